//! Distance derivation for plain-dialect routes.
//!
//! Plain trip lines carry no mileage, so the distance is a placeholder:
//! every hop between two waypoints is credited the configured hop distance.

use rust_decimal::Decimal;

use crate::models::Route;

/// The default distance credited per hop, in kilometres.
pub const DEFAULT_HOP_DISTANCE_KM: Decimal = Decimal::from_parts(50, 0, 0, false, 1);

/// Calculates the distance for a route as `hops × hop_distance_km`.
///
/// # Examples
///
/// ```
/// use pino_expense::calculation::{route_distance, DEFAULT_HOP_DISTANCE_KM};
/// use pino_expense::models::Route;
/// use rust_decimal::Decimal;
///
/// let route = Route::parse("渋谷→新宿→池袋").unwrap();
/// assert_eq!(route_distance(&route, DEFAULT_HOP_DISTANCE_KM), Decimal::from(10));
/// ```
pub fn route_distance(route: &Route, hop_distance_km: Decimal) -> Decimal {
    Decimal::from(route.hops()) * hop_distance_km
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_hop_distance_is_five_km() {
        assert_eq!(DEFAULT_HOP_DISTANCE_KM, dec("5.0"));
    }

    #[test]
    fn test_two_hops() {
        let route = Route::parse("渋谷→新宿→池袋").unwrap();
        assert_eq!(route_distance(&route, dec("5.0")), dec("10.0"));
    }

    #[test]
    fn test_one_hop() {
        let route = Route::parse("池袋→渋谷").unwrap();
        assert_eq!(route_distance(&route, dec("5.0")), dec("5.0"));
    }

    #[test]
    fn test_zero_hops_is_zero_distance() {
        let route = Route::parse("渋谷").unwrap();
        assert_eq!(route_distance(&route, dec("5.0")), Decimal::ZERO);
    }

    #[test]
    fn test_custom_hop_distance() {
        let route = Route::parse("A→B→C→D").unwrap();
        assert_eq!(route_distance(&route, dec("2.5")), dec("7.5"));
    }
}
