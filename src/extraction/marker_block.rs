//! Marker-block dialect extraction.
//!
//! ```text
//! 【ピノ】田中 1/5(日) (渋谷→新宿→池袋) 12.4km
//! 【ピノ】佐藤様 1/6(月)
//! (品川→大崎) ３．２ｋｍ
//! ```
//!
//! Each block names its employee and date, and states the distance
//! travelled. The route is whatever sits between the weekday and the
//! distance. A distance written inside the parenthesised route is part of
//! a waypoint name, not the stated distance.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::ReimbursementConfig;
use crate::models::{Route, TripEntry};

use super::date::month_day;
use super::dialect::{BLOCK_MARKER, Dialect};
use super::{Extraction, normalize_width};

static NAME_AND_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<name>[^\d/()\n]+?)\s*(?P<month>\d{1,2})/(?P<day>\d{1,2})\s*\([月火水木金土日](?:曜日?)?\)",
    )
    .expect("name/date pattern is valid")
});

static DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<km>\d+(?:\.\d+)?)\s*(?:km|KM|Km|kM|キロメートル|キロ|㎞)")
        .expect("distance pattern is valid")
});

const HONORIFICS: [&str; 2] = ["様", "さん"];

/// Extracts trip entries from marker-block text.
///
/// Text before the first `【ピノ】` is ignored. Blocks without a name and
/// `M/D(曜)` date, without a distance, or with an empty route are skipped.
pub fn extract_marker_blocks(text: &str, config: &ReimbursementConfig) -> Extraction {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for (index, block) in text.split(BLOCK_MARKER).enumerate().skip(1) {
        match parse_block(block, config) {
            Some(entry) => entries.push(entry),
            None => {
                debug!(block = index, "Skipping unrecognized block");
                skipped += 1;
            }
        }
    }

    Extraction {
        dialect: Dialect::MarkerBlock,
        entries,
        skipped,
    }
}

fn parse_block(block: &str, config: &ReimbursementConfig) -> Option<TripEntry> {
    let block = normalize_width(block);

    let caps = NAME_AND_DATE.captures(&block)?;
    let employee_name = strip_honorific(&caps["name"]);
    if employee_name.is_empty() {
        return None;
    }
    let month: u32 = caps["month"].parse().ok()?;
    let day: u32 = caps["day"].parse().ok()?;
    let date_end = caps.get(0)?.end();

    let rest = &block[date_end..];
    let distance = DISTANCE
        .captures_iter(rest)
        .filter(|caps| caps.get(0).is_some_and(|m| paren_depth(&rest[..m.start()]) == 0))
        .last()?;
    let distance_match = distance.get(0)?;
    let distance_km: Decimal = distance["km"].parse().ok()?;

    let route_text = block[date_end..date_end + distance_match.start()].trim();
    let route = Route::parse(strip_enclosing_parens(route_text))?;

    Some(TripEntry {
        employee_name,
        date: month_day(month, day, config),
        route,
        distance_km,
        dialect: Dialect::MarkerBlock,
    })
}

fn strip_honorific(name: &str) -> String {
    let mut name = name.trim();
    for honorific in HONORIFICS {
        if let Some(stripped) = name.strip_suffix(honorific) {
            name = stripped.trim_end();
        }
    }
    name.to_string()
}

/// Removes one pair of parentheses wrapping the whole route. `(A)→(B)` is
/// two parenthesised waypoints, not one wrapped route, and is left as is.
fn strip_enclosing_parens(text: &str) -> &str {
    let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
        return text;
    };

    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return text,
            },
            _ => {}
        }
    }

    if depth == 0 { inner.trim() } else { text }
}

/// Open parentheses minus closed ones. Positive inside a parenthesised route.
fn paren_depth(text: &str) -> isize {
    text.chars().fold(0, |depth, c| match c {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    })
}
