//! Core data models for the expense engine.
//!
//! This module contains the domain models that flow through the pipeline,
//! from single trip entries up to the finished expense report.

mod daily_record;
mod ledger;
mod report;
mod report_date;
mod trip;

pub use daily_record::DailyRecord;
pub use ledger::{EmployeeLedger, LedgerRow, LedgerRowKind, LedgerTotals, TOTAL_ROW_LABEL};
pub use report::ExpenseReport;
pub use report_date::{DayKey, ReportDate};
pub use trip::{ROUTE_JOINER, ROUTE_SEPARATORS, Route, TripEntry};
