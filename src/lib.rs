//! Commute Expense Reimbursement Engine
//!
//! This crate turns free-form Japanese commute reports into per-employee
//! reimbursement ledgers: a floored distance fee per day plus a flat daily
//! allowance, ready to be rendered as statements.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod extraction;
pub mod ledger;
pub mod models;
pub mod render;

pub use ledger::parse_report;
