//! Aggregation and ledger construction.
//!
//! This module turns extracted trip entries into the finished
//! [`ExpenseReport`](crate::models::ExpenseReport) and exposes
//! [`parse_report`], the whole text-to-ledger pipeline in one call.

mod aggregator;
mod builder;

pub use aggregator::{EmployeeDays, aggregate};
pub use builder::build_report;

use tracing::info;

use crate::config::ReimbursementConfig;
use crate::error::EngineResult;
use crate::extraction::extract;
use crate::models::ExpenseReport;

/// Runs the full pipeline: extraction, fee calculation, aggregation and
/// ledger assembly.
///
/// The result depends only on `text` and `config`.
///
/// # Example
///
/// ```
/// use pino_expense::config::ReimbursementConfig;
/// use pino_expense::parse_report;
///
/// let report = parse_report(
///     "田中様\n1/5 渋谷→新宿→池袋\n1/5 池袋→渋谷",
///     &ReimbursementConfig::default(),
/// )
/// .unwrap();
///
/// let day = &report.employee("田中").unwrap().days()[0];
/// assert_eq!(day.transportation_fee(), 225);
/// assert_eq!(day.total(), 425);
/// ```
pub fn parse_report(text: &str, config: &ReimbursementConfig) -> EngineResult<ExpenseReport> {
    let extraction = extract(text, config)?;
    let employees = aggregate(
        extraction.entries,
        config.rate_per_km,
        config.daily_allowance,
    )?;
    let report = build_report(extraction.dialect, employees)?;

    info!(
        dialect = %report.dialect(),
        employees = report.len(),
        days = report.grand_totals().days,
        grand_total = report.grand_totals().total,
        "Built expense report"
    );

    Ok(report)
}
