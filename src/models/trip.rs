//! Trip entry and route models.
//!
//! This module defines [`TripEntry`], one recognized commute segment, and
//! [`Route`], the ordered waypoints it travels through.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::extraction::Dialect;

use super::ReportDate;

/// Separators accepted between waypoints.
pub const ROUTE_SEPARATORS: [&str; 3] = ["→", "⇒", "->"];

/// The separator used when a route is written back out.
pub const ROUTE_JOINER: &str = "→";

/// An ordered, non-empty sequence of waypoint labels.
///
/// # Example
///
/// ```
/// use pino_expense::models::Route;
///
/// let route = Route::parse("渋谷→新宿→池袋").unwrap();
/// assert_eq!(route.waypoints(), ["渋谷", "新宿", "池袋"]);
/// assert_eq!(route.hops(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    waypoints: Vec<String>,
}

impl Route {
    /// Splits route text on the arrow separators.
    ///
    /// Empty pieces are dropped; text without a separator is a single
    /// waypoint. Returns `None` when no waypoint remains.
    pub fn parse(text: &str) -> Option<Self> {
        let mut pieces = vec![text];
        for separator in ROUTE_SEPARATORS {
            pieces = pieces
                .into_iter()
                .flat_map(|piece| piece.split(separator))
                .collect();
        }

        let waypoints: Vec<String> = pieces
            .into_iter()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        if waypoints.is_empty() {
            None
        } else {
            Some(Self { waypoints })
        }
    }

    /// The waypoint labels in travel order.
    pub fn waypoints(&self) -> &[String] {
        &self.waypoints
    }

    /// Number of segments between consecutive waypoints.
    pub fn hops(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.waypoints.join(ROUTE_JOINER))
    }
}

/// One recognized commute segment.
///
/// Entries are produced by the extractors and consumed by the aggregator;
/// they are never modified in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripEntry {
    /// The employee, with the honorific removed.
    pub employee_name: String,
    /// The day the trip was made.
    pub date: ReportDate,
    /// The waypoints travelled through.
    pub route: Route,
    /// The distance credited for this trip.
    pub distance_km: Decimal,
    /// The grammar the entry was read from.
    pub dialect: Dialect,
}
