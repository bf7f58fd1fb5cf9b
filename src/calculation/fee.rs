//! Daily fee calculation.
//!
//! The transportation fee is floored once, on the day's summed distance.
//! Flooring each trip and adding the results can come out lower, so
//! callers must sum distances first and call [`calculate_daily_fee`] once
//! per employee and day.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The default reimbursement rate in yen per kilometre.
pub const DEFAULT_RATE_PER_KM: u64 = 15;

/// The default flat allowance in yen per recorded day.
pub const DEFAULT_DAILY_ALLOWANCE: u64 = 200;

/// The amounts owed for one employee on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// `floor(total_distance_km × rate_per_km)`.
    pub transportation_fee: u64,
    /// The flat daily allowance.
    pub allowance: u64,
    /// `transportation_fee + allowance`.
    pub total: u64,
}

/// Floors `total_distance_km × rate_per_km` to whole yen.
///
/// Truncates toward zero. Fails only when the result does not fit in a
/// `u64`, which includes negative products.
///
/// # Examples
///
/// ```
/// use pino_expense::calculation::transportation_fee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let fee = transportation_fee(Decimal::from_str("2.6").unwrap(), Decimal::from(15)).unwrap();
/// assert_eq!(fee, 39);
/// ```
pub fn transportation_fee(total_distance_km: Decimal, rate_per_km: Decimal) -> EngineResult<u64> {
    let product = total_distance_km
        .checked_mul(rate_per_km)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "fee overflow: {} km × {}",
                total_distance_km.normalize(),
                rate_per_km.normalize()
            ),
        })?;

    product
        .trunc()
        .to_u64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("fee out of range: {}", product.normalize()),
        })
}

/// Calculates the full breakdown for one day's summed distance.
///
/// The allowance is added once regardless of how many trips make up the
/// distance, including days with zero distance.
///
/// # Examples
///
/// ```
/// use pino_expense::calculation::calculate_daily_fee;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_daily_fee(Decimal::from(15), Decimal::from(15), 200).unwrap();
/// assert_eq!(breakdown.transportation_fee, 225);
/// assert_eq!(breakdown.allowance, 200);
/// assert_eq!(breakdown.total, 425);
/// ```
pub fn calculate_daily_fee(
    total_distance_km: Decimal,
    rate_per_km: Decimal,
    daily_allowance: u64,
) -> EngineResult<FeeBreakdown> {
    let fee = transportation_fee(total_distance_km, rate_per_km)?;
    let total = fee
        .checked_add(daily_allowance)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("daily total overflow: {} + {}", fee, daily_allowance),
        })?;

    Ok(FeeBreakdown {
        transportation_fee: fee,
        allowance: daily_allowance,
        total,
    })
}
