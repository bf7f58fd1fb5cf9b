//! Configuration types for reimbursement calculation.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DEFAULT_DAILY_ALLOWANCE, DEFAULT_HOP_DISTANCE_KM, DEFAULT_RATE_PER_KM};
use crate::error::{EngineError, EngineResult};

/// Reimbursement constants and statement labels.
///
/// Every field has a default, so a YAML file only needs to list the values
/// that differ from the baseline (15 yen per km, 200 yen per day, 5 km per
/// hop).
///
/// # Example
///
/// ```
/// use pino_expense::config::ReimbursementConfig;
/// use rust_decimal::Decimal;
///
/// let config = ReimbursementConfig::default();
/// assert_eq!(config.rate_per_km, Decimal::from(15));
/// assert_eq!(config.daily_allowance, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReimbursementConfig {
    /// Yen paid per kilometre of daily travel.
    pub rate_per_km: Decimal,
    /// Flat amount paid once per employee per recorded day.
    pub daily_allowance: u64,
    /// Distance credited for each hop of a plain-dialect route.
    pub hop_distance_km: Decimal,
    /// Reporting period shown in statement titles (e.g. "1月").
    pub period_label: String,
    /// Prefix used when naming statement files.
    pub statement_label: String,
    /// Note printed at the bottom of every statement.
    pub footnote: String,
    /// Year assigned to dates written without one.
    pub reporting_year: i32,
    /// First month of the reporting year. Months before it roll into
    /// `reporting_year + 1`.
    pub year_start_month: u32,
}

impl Default for ReimbursementConfig {
    fn default() -> Self {
        Self {
            rate_per_km: Decimal::from(DEFAULT_RATE_PER_KM),
            daily_allowance: DEFAULT_DAILY_ALLOWANCE,
            hop_distance_km: DEFAULT_HOP_DISTANCE_KM,
            period_label: "1月".to_string(),
            statement_label: "精算書".to_string(),
            footnote: "※2025年1月分給与にて清算しました。".to_string(),
            reporting_year: 2025,
            year_start_month: 1,
        }
    }
}

impl ReimbursementConfig {
    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> EngineResult<()> {
        if self.rate_per_km.is_sign_negative() {
            return Err(invalid("rate_per_km", "must not be negative"));
        }
        if self.hop_distance_km.is_sign_negative() {
            return Err(invalid("hop_distance_km", "must not be negative"));
        }
        if !(1..=12).contains(&self.year_start_month) {
            return Err(invalid("year_start_month", "must be between 1 and 12"));
        }
        if NaiveDate::from_ymd_opt(self.reporting_year, 1, 1).is_none() {
            return Err(invalid("reporting_year", "is out of range"));
        }
        Ok(())
    }

    /// Returns the calendar year a month without an explicit year belongs to.
    ///
    /// ```
    /// use pino_expense::config::ReimbursementConfig;
    ///
    /// let config = ReimbursementConfig {
    ///     reporting_year: 2024,
    ///     year_start_month: 12,
    ///     ..Default::default()
    /// };
    /// assert_eq!(config.year_for_month(12), 2024);
    /// assert_eq!(config.year_for_month(1), 2025);
    /// ```
    pub fn year_for_month(&self, month: u32) -> i32 {
        if month >= self.year_start_month {
            self.reporting_year
        } else {
            self.reporting_year + 1
        }
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}
