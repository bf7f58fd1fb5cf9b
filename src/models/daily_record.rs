//! Daily record model.
//!
//! A [`DailyRecord`] is the aggregation unit: every trip one employee made
//! on one date, with the fee and allowance owed for that day.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{FeeBreakdown, calculate_daily_fee};
use crate::error::{EngineError, EngineResult};

use super::{ReportDate, TripEntry};

/// The reimbursement owed to one employee for one date.
///
/// Records are built once from their trips and are read-only afterwards.
///
/// # Example
///
/// ```
/// use pino_expense::extraction::Dialect;
/// use pino_expense::models::{DailyRecord, ReportDate, Route, TripEntry};
/// use rust_decimal::Decimal;
///
/// let date = ReportDate::new("1/6", None);
/// let trip = TripEntry {
///     employee_name: "田中".to_string(),
///     date: date.clone(),
///     route: Route::parse("渋谷").unwrap(),
///     distance_km: Decimal::ZERO,
///     dialect: Dialect::Plain,
/// };
///
/// let record = DailyRecord::from_trips(date, vec![trip], Decimal::from(15), 200).unwrap();
/// assert_eq!(record.transportation_fee(), 0);
/// assert_eq!(record.allowance(), 200);
/// assert_eq!(record.total(), 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    date: ReportDate,
    trips: Vec<TripEntry>,
    total_distance_km: Decimal,
    transportation_fee: u64,
    allowance: u64,
    total: u64,
}

impl DailyRecord {
    /// Builds the record for one day from its trips, in source order.
    ///
    /// Distances are summed before the fee is floored. Fails with
    /// [`EngineError::CalculationError`] when the sum or the fee overflows.
    pub fn from_trips(
        date: ReportDate,
        trips: Vec<TripEntry>,
        rate_per_km: Decimal,
        daily_allowance: u64,
    ) -> EngineResult<Self> {
        let total_distance_km = trips.iter().try_fold(Decimal::ZERO, |sum, t| {
            sum.checked_add(t.distance_km)
                .ok_or_else(|| EngineError::CalculationError {
                    message: format!(
                        "distance overflow on {}: {} + {}",
                        date,
                        sum.normalize(),
                        t.distance_km.normalize()
                    ),
                })
        })?;
        let FeeBreakdown {
            transportation_fee,
            allowance,
            total,
        } = calculate_daily_fee(total_distance_km, rate_per_km, daily_allowance)?;

        Ok(Self {
            date,
            trips,
            total_distance_km,
            transportation_fee,
            allowance,
            total,
        })
    }

    /// The date of this record.
    pub fn date(&self) -> &ReportDate {
        &self.date
    }

    /// The trips made on this date, in the order they appeared.
    pub fn trips(&self) -> &[TripEntry] {
        &self.trips
    }

    /// Sum of the trips' distances.
    pub fn total_distance_km(&self) -> Decimal {
        self.total_distance_km
    }

    /// The floored distance fee.
    pub fn transportation_fee(&self) -> u64 {
        self.transportation_fee
    }

    /// The flat daily allowance.
    pub fn allowance(&self) -> u64 {
        self.allowance
    }

    /// Fee plus allowance.
    pub fn total(&self) -> u64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::Dialect;
    use crate::models::Route;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn trip(route: &str, km: &str) -> TripEntry {
        TripEntry {
            employee_name: "田中".to_string(),
            date: ReportDate::new("1/5", None),
            route: Route::parse(route).unwrap(),
            distance_km: dec(km),
            dialect: Dialect::Plain,
        }
    }

    fn record(trips: Vec<TripEntry>) -> DailyRecord {
        DailyRecord::from_trips(ReportDate::new("1/5", None), trips, dec("15"), 200).unwrap()
    }

    #[test]
    fn test_two_trips_summed_before_floor() {
        let record = record(vec![trip("A→B", "1.3"), trip("B→A", "1.3")]);
        assert_eq!(record.total_distance_km(), dec("2.6"));
        assert_eq!(record.transportation_fee(), 39);
        assert_eq!(record.total(), 239);
    }

    #[test]
    fn test_allowance_once_for_many_trips() {
        let one = record(vec![trip("A→B", "5")]);
        let many = record(vec![
            trip("A→B", "5"),
            trip("B→C", "5"),
            trip("C→D", "5"),
            trip("D→A", "5"),
        ]);
        assert_eq!(one.allowance(), 200);
        assert_eq!(many.allowance(), 200);
        assert_eq!(many.transportation_fee(), 300);
        assert_eq!(many.total(), 500);
    }

    #[test]
    fn test_trips_keep_source_order() {
        let record = record(vec![trip("渋谷→新宿", "5"), trip("新宿→渋谷", "5")]);
        let routes: Vec<String> = record.trips().iter().map(|t| t.route.to_string()).collect();
        assert_eq!(routes, vec!["渋谷→新宿", "新宿→渋谷"]);
    }

    #[test]
    fn test_record_serializes_amounts() {
        let record = record(vec![trip("A→B→C", "10.0")]);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"transportation_fee\":150"));
        assert!(json.contains("\"allowance\":200"));
        assert!(json.contains("\"total\":350"));
        assert!(json.contains("\"total_distance_km\":\"10.0\""));
    }

    #[test]
    fn test_distance_sum_overflow_is_error() {
        let result = DailyRecord::from_trips(
            ReportDate::new("1/5", None),
            vec![
                trip("A→B", "50000000000000000000000000000"),
                trip("B→A", "50000000000000000000000000000"),
            ],
            dec("15"),
            200,
        );
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_fee_beyond_u64_is_error() {
        let result = DailyRecord::from_trips(
            ReportDate::new("1/5", None),
            vec![trip("A→B", "2000000000000000000")],
            dec("15"),
            200,
        );
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
