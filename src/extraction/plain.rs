//! Plain dialect extraction.
//!
//! ```text
//! 田中様
//! 1/5 渋谷→新宿→池袋
//! 1/5 池袋→渋谷
//! ```
//!
//! A line containing `様` names the employee for the lines that follow.
//! Every other line is `<date> <route>`; its distance comes from the
//! number of hops in the route.

use tracing::debug;

use crate::calculation::route_distance;
use crate::config::ReimbursementConfig;
use crate::models::{Route, TripEntry};

use super::date::resolve_date;
use super::dialect::{Dialect, NAME_MARKER};
use super::Extraction;

/// Extracts trip entries from plain-dialect text.
///
/// Lines that do not split into a date and a route, and data lines seen
/// before any name marker, are skipped.
pub fn extract_plain(text: &str, config: &ReimbursementConfig) -> Extraction {
    let mut entries = Vec::new();
    let mut skipped = 0;
    let mut current_employee: Option<String> = None;

    for (line_no, line) in text.lines().map(str::trim).enumerate() {
        if line.is_empty() {
            continue;
        }

        if line.contains(NAME_MARKER) {
            let name = line.replace(NAME_MARKER, "").trim().to_string();
            current_employee = if name.is_empty() { None } else { Some(name) };
            continue;
        }

        let Some(employee_name) = current_employee.as_ref() else {
            debug!(line = line_no + 1, "Skipping line before first name marker");
            skipped += 1;
            continue;
        };

        let mut tokens = line.split_whitespace();
        let (Some(date_token), Some(first_route_token)) = (tokens.next(), tokens.next()) else {
            debug!(line = line_no + 1, "Skipping line without date and route");
            skipped += 1;
            continue;
        };

        let route_text = std::iter::once(first_route_token)
            .chain(tokens)
            .collect::<Vec<_>>()
            .join(" ");
        let Some(route) = Route::parse(&route_text) else {
            debug!(line = line_no + 1, "Skipping line with empty route");
            skipped += 1;
            continue;
        };

        entries.push(TripEntry {
            employee_name: employee_name.clone(),
            date: resolve_date(date_token, config),
            distance_km: route_distance(&route, config.hop_distance_km),
            route,
            dialect: Dialect::Plain,
        });
    }

    Extraction {
        dialect: Dialect::Plain,
        entries,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn extract(text: &str) -> Extraction {
        extract_plain(text, &ReimbursementConfig::default())
    }

    #[test]
    fn test_reference_scenario_entries() {
        let extraction = extract("田中様\n1/5 渋谷→新宿→池袋\n1/5 池袋→渋谷");
        assert_eq!(extraction.entries.len(), 2);

        let first = &extraction.entries[0];
        assert_eq!(first.employee_name, "田中");
        assert_eq!(first.date.label, "1/5");
        assert_eq!(first.route.hops(), 2);
        assert_eq!(first.distance_km, Decimal::from(10));

        let second = &extraction.entries[1];
        assert_eq!(second.route.hops(), 1);
        assert_eq!(second.distance_km, Decimal::from(5));
    }

    #[test]
    fn test_marker_line_produces_no_entry() {
        let extraction = extract("田中様");
        assert!(extraction.entries.is_empty());
        assert_eq!(extraction.skipped, 0);
    }

    #[test]
    fn test_lines_before_first_marker_dropped() {
        let extraction = extract("1/4 渋谷→新宿\n田中様\n1/5 渋谷→新宿");
        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.entries[0].date.label, "1/5");
        assert_eq!(extraction.skipped, 1);
    }

    #[test]
    fn test_single_token_line_skipped() {
        let extraction = extract("田中様\n1/5\n1/6 渋谷→新宿");
        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.skipped, 1);
    }

    #[test]
    fn test_route_tokens_rejoined_with_single_space() {
        let extraction = extract("田中様\n1/5   渋谷   →  新宿");
        let entry = &extraction.entries[0];
        assert_eq!(entry.route.waypoints(), ["渋谷", "新宿"]);
        assert_eq!(entry.distance_km, Decimal::from(5));
    }

    #[test]
    fn test_honorific_removed_and_trimmed() {
        let extraction = extract("  佐藤 様  \n1/5 A→B");
        assert_eq!(extraction.entries[0].employee_name, "佐藤");
    }

    #[test]
    fn test_bare_marker_clears_current_employee() {
        let extraction = extract("田中様\n1/5 A→B\n様\n1/6 A→B");
        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.skipped, 1);
    }

    #[test]
    fn test_zero_hop_entry_kept() {
        let extraction = extract("田中様\n1/6 渋谷");
        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.entries[0].distance_km, Decimal::ZERO);
    }

    #[test]
    fn test_hop_distance_from_config() {
        let config = ReimbursementConfig {
            hop_distance_km: Decimal::new(25, 1),
            ..Default::default()
        };
        let extraction = extract_plain("田中様\n1/5 A→B→C", &config);
        assert_eq!(extraction.entries[0].distance_km, Decimal::from(5));
    }
}
