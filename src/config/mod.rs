//! Configuration loading and management for the expense engine.
//!
//! This module loads the reimbursement constants (rate per kilometre, daily
//! allowance, hop distance) and statement labels from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use pino_expense::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/reimbursement.yaml").unwrap();
//! println!("Daily allowance: {}", config.daily_allowance());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ReimbursementConfig;
