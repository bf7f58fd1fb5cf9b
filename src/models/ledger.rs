//! Employee ledger models.
//!
//! This module contains [`EmployeeLedger`], the per-employee statement data,
//! its column totals and the flattened rows handed to renderers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::DailyRecord;

/// The date label of the synthetic total row.
pub const TOTAL_ROW_LABEL: &str = "合計";

/// Column-wise sums over a set of daily records.
///
/// # Example
///
/// ```
/// use pino_expense::models::LedgerTotals;
///
/// let totals = LedgerTotals::default();
/// assert_eq!(totals.days, 0);
/// assert_eq!(totals.total, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTotals {
    /// Number of daily records.
    pub days: usize,
    /// Number of trips across those days.
    pub trips: usize,
    /// Summed distance.
    pub total_distance_km: Decimal,
    /// Summed transportation fees.
    pub transportation_fee: u64,
    /// Summed allowances.
    pub allowance: u64,
    /// Summed totals.
    pub total: u64,
}

impl LedgerTotals {
    /// Adds one daily record to the sums.
    ///
    /// On overflow the totals are left unchanged.
    pub fn add_record(&mut self, record: &DailyRecord) -> EngineResult<()> {
        let next = LedgerTotals {
            days: self.days + 1,
            trips: self.trips + record.trips().len(),
            total_distance_km: add_km(self.total_distance_km, record.total_distance_km())?,
            transportation_fee: add_yen(
                "transportation_fee",
                self.transportation_fee,
                record.transportation_fee(),
            )?,
            allowance: add_yen("allowance", self.allowance, record.allowance())?,
            total: add_yen("total", self.total, record.total())?,
        };
        *self = next;
        Ok(())
    }

    /// Adds another set of totals to these.
    ///
    /// On overflow the totals are left unchanged.
    pub fn merge(&mut self, other: &LedgerTotals) -> EngineResult<()> {
        let next = LedgerTotals {
            days: self.days + other.days,
            trips: self.trips + other.trips,
            total_distance_km: add_km(self.total_distance_km, other.total_distance_km)?,
            transportation_fee: add_yen(
                "transportation_fee",
                self.transportation_fee,
                other.transportation_fee,
            )?,
            allowance: add_yen("allowance", self.allowance, other.allowance)?,
            total: add_yen("total", self.total, other.total)?,
        };
        *self = next;
        Ok(())
    }
}

fn add_km(a: Decimal, b: Decimal) -> EngineResult<Decimal> {
    a.checked_add(b).ok_or_else(|| EngineError::CalculationError {
        message: format!("distance total overflow: {} + {}", a.normalize(), b.normalize()),
    })
}

fn add_yen(column: &str, a: u64, b: u64) -> EngineResult<u64> {
    a.checked_add(b).ok_or_else(|| EngineError::CalculationError {
        message: format!("{} total overflow: {} + {}", column, a, b),
    })
}

/// Whether a ledger row is a day or the synthetic total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerRowKind {
    /// One daily record.
    Day,
    /// The column sums appended after the last day.
    Total,
}

/// One display row of an employee ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Day or total.
    pub kind: LedgerRowKind,
    /// The date label, or [`TOTAL_ROW_LABEL`] for the total row.
    pub date: String,
    /// The day's routes joined by ` / `; empty for the total row.
    pub route: String,
    /// Distance for the day, or the summed distance.
    pub total_distance_km: Decimal,
    /// Fee for the day, or the summed fees.
    pub transportation_fee: u64,
    /// Allowance for the day, or the summed allowances.
    pub allowance: u64,
    /// Total for the day, or the grand total.
    pub total: u64,
}

/// The finalized reimbursement ledger for one employee.
///
/// Days are sorted by date ascending. The ledger is read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeLedger {
    employee_name: String,
    days: Vec<DailyRecord>,
    totals: LedgerTotals,
}

impl EmployeeLedger {
    /// Builds a ledger, sorting the days chronologically and computing the
    /// totals. Days whose dates do not resolve keep their relative order
    /// after the resolved ones.
    ///
    /// Fails with [`EngineError::CalculationError`] when a total overflows.
    pub fn new(employee_name: impl Into<String>, mut days: Vec<DailyRecord>) -> EngineResult<Self> {
        days.sort_by(|a, b| a.date().chronological_cmp(b.date()));

        let mut totals = LedgerTotals::default();
        for day in &days {
            totals.add_record(day)?;
        }

        Ok(Self {
            employee_name: employee_name.into(),
            days,
            totals,
        })
    }

    /// The employee this ledger belongs to.
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    /// The daily records in date order.
    pub fn days(&self) -> &[DailyRecord] {
        &self.days
    }

    /// Column-wise sums over all days.
    pub fn totals(&self) -> &LedgerTotals {
        &self.totals
    }

    /// One row per day followed by the total row.
    ///
    /// # Example
    ///
    /// ```
    /// use pino_expense::config::ReimbursementConfig;
    /// use pino_expense::models::{LedgerRowKind, TOTAL_ROW_LABEL};
    /// use pino_expense::parse_report;
    ///
    /// let report = parse_report("田中様\n1/5 渋谷→新宿", &ReimbursementConfig::default()).unwrap();
    /// let rows = report.employee("田中").unwrap().rows();
    /// assert_eq!(rows.len(), 2);
    /// assert_eq!(rows[1].kind, LedgerRowKind::Total);
    /// assert_eq!(rows[1].date, TOTAL_ROW_LABEL);
    /// assert_eq!(rows[1].route, "");
    /// ```
    pub fn rows(&self) -> Vec<LedgerRow> {
        let mut rows: Vec<LedgerRow> = self
            .days
            .iter()
            .map(|day| LedgerRow {
                kind: LedgerRowKind::Day,
                date: day.date().label.clone(),
                route: day
                    .trips()
                    .iter()
                    .map(|t| t.route.to_string())
                    .collect::<Vec<_>>()
                    .join(" / "),
                total_distance_km: day.total_distance_km(),
                transportation_fee: day.transportation_fee(),
                allowance: day.allowance(),
                total: day.total(),
            })
            .collect();

        rows.push(LedgerRow {
            kind: LedgerRowKind::Total,
            date: TOTAL_ROW_LABEL.to_string(),
            route: String::new(),
            total_distance_km: self.totals.total_distance_km,
            transportation_fee: self.totals.transportation_fee,
            allowance: self.totals.allowance,
            total: self.totals.total,
        });

        rows
    }
}
