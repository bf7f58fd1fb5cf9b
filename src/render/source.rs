//! Source-text re-rendering.
//!
//! Writes a ledger back out as trip report text in the dialect its trips
//! were read from. Parsing the output again yields the same totals.

use chrono::{Datelike, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::extraction::{BLOCK_MARKER, Dialect, NAME_MARKER};
use crate::models::{EmployeeLedger, TripEntry};

use super::{StatementContext, StatementRenderer};

/// Renders a ledger as parseable trip report text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceTextRenderer;

impl StatementRenderer for SourceTextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn render(&self, ledger: &EmployeeLedger, _context: &StatementContext) -> EngineResult<Vec<u8>> {
        let trips = ledger.days().iter().flat_map(|day| day.trips());
        let dialect = ledger
            .days()
            .first()
            .and_then(|day| day.trips().first())
            .map(|trip| trip.dialect)
            .unwrap_or(Dialect::Plain);

        let mut lines = Vec::new();
        match dialect {
            Dialect::Plain => {
                lines.push(format!("{}{}", ledger.employee_name(), NAME_MARKER));
                lines.extend(trips.map(|trip| format!("{} {}", trip.date.label, trip.route)));
            }
            Dialect::MarkerBlock => {
                for trip in trips {
                    lines.push(marker_block_line(ledger.employee_name(), trip)?);
                }
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out.into_bytes())
    }
}

fn marker_block_line(employee_name: &str, trip: &TripEntry) -> EngineResult<String> {
    let date = trip.date.date.ok_or_else(|| EngineError::RenderError {
        format: "source".to_string(),
        message: format!("date '{}' has no weekday", trip.date.label),
    })?;

    Ok(format!(
        "{}{} {}/{}({}) ({}) {}km",
        BLOCK_MARKER,
        employee_name,
        date.month(),
        date.day(),
        weekday_kanji(date.weekday()),
        trip.route,
        trip.distance_km.normalize()
    ))
}

fn weekday_kanji(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    }
}
