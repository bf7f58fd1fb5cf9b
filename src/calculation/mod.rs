//! Calculation logic for the expense engine.
//!
//! This module contains the distance derivation for plain-dialect routes
//! and the daily fee calculation: the floored distance fee plus the flat
//! daily allowance.

mod distance;
mod fee;

pub use distance::{DEFAULT_HOP_DISTANCE_KM, route_distance};
pub use fee::{
    DEFAULT_DAILY_ALLOWANCE, DEFAULT_RATE_PER_KM, FeeBreakdown, calculate_daily_fee,
    transportation_fee,
};
