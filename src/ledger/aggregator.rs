//! Grouping of trip entries into daily records.
//!
//! Entries are bucketed by employee, then by day. Employees keep the order
//! in which their names first appear; an employee whose name reappears
//! later in the text keeps accumulating into the same bucket.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{DailyRecord, DayKey, ReportDate, TripEntry};

/// The daily records collected for one employee, not yet sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDays {
    /// The employee name.
    pub employee_name: String,
    /// One record per day, in first-seen order.
    pub days: Vec<DailyRecord>,
}

#[derive(Debug)]
struct DayBucket {
    date: ReportDate,
    trips: Vec<TripEntry>,
}

/// Groups entries by (employee, day) and finalizes one [`DailyRecord`] per
/// group.
///
/// # Example
///
/// ```
/// use pino_expense::config::ReimbursementConfig;
/// use pino_expense::extraction::extract;
/// use pino_expense::ledger::aggregate;
///
/// let config = ReimbursementConfig::default();
/// let extraction = extract("田中様\n1/5 A→B\n1/5 B→A\n1/6 A→B", &config).unwrap();
/// let employees = aggregate(extraction.entries, config.rate_per_km, config.daily_allowance).unwrap();
/// assert_eq!(employees.len(), 1);
/// assert_eq!(employees[0].days.len(), 2);
/// ```
pub fn aggregate(
    entries: Vec<TripEntry>,
    rate_per_km: Decimal,
    daily_allowance: u64,
) -> EngineResult<Vec<EmployeeDays>> {
    let mut buckets: IndexMap<String, IndexMap<DayKey, DayBucket>> = IndexMap::new();

    for entry in entries {
        let days = buckets.entry(entry.employee_name.clone()).or_default();
        days.entry(entry.date.day_key())
            .or_insert_with(|| DayBucket {
                date: entry.date.clone(),
                trips: Vec::new(),
            })
            .trips
            .push(entry);
    }

    buckets
        .into_iter()
        .map(|(employee_name, days)| {
            let days = days
                .into_values()
                .map(|bucket| {
                    DailyRecord::from_trips(bucket.date, bucket.trips, rate_per_km, daily_allowance)
                })
                .collect::<EngineResult<Vec<_>>>()?;
            debug!(employee = %employee_name, days = days.len(), "Aggregated daily records");
            Ok(EmployeeDays {
                employee_name,
                days,
            })
        })
        .collect()
}
