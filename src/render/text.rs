//! Fixed-width text statement.
//!
//! One line per trip. The day's distance and amounts are printed on the
//! day's first trip only; further trips of the same day show just their
//! route.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EngineResult;
use crate::models::{DailyRecord, EmployeeLedger, TOTAL_ROW_LABEL};

use super::{StatementContext, StatementRenderer};

const COLUMNS: usize = 6;
const RIGHT_ALIGNED_FROM: usize = 2;

/// Renders a ledger as an aligned text table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl StatementRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn render(&self, ledger: &EmployeeLedger, context: &StatementContext) -> EngineResult<Vec<u8>> {
        let header = [
            "日付".to_string(),
            "経路".to_string(),
            "合計距離(km)".to_string(),
            format!("交通費(距離×{}P)", context.rate_per_km.normalize()),
            "運転手当".to_string(),
            "合計".to_string(),
        ];

        let mut body: Vec<[String; COLUMNS]> = Vec::new();
        for day in ledger.days() {
            body.extend(day_rows(day));
        }

        let totals = ledger.totals();
        let total_row = [
            TOTAL_ROW_LABEL.to_string(),
            String::new(),
            format_km(totals.total_distance_km),
            format_yen(totals.transportation_fee),
            format_yen(totals.allowance),
            format_yen(totals.total),
        ];

        let mut widths = [0usize; COLUMNS];
        for row in std::iter::once(&header)
            .chain(body.iter())
            .chain(std::iter::once(&total_row))
        {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(display_width(cell));
            }
        }
        let rule = "-".repeat(widths.iter().sum::<usize>() + 2 * (COLUMNS - 1));

        let mut lines = vec![context.title(ledger.employee_name()), String::new()];
        lines.push(format_row(&header, &widths));
        lines.push(rule.clone());
        lines.extend(body.iter().map(|row| format_row(row, &widths)));
        lines.push(rule);
        lines.push(format_row(&total_row, &widths));
        lines.push(String::new());
        lines.push(format!("合計金額: {} 円", format_yen(totals.total)));
        lines.push(String::new());
        lines.push(context.footnote.clone());
        lines.push(format!(
            "計算日時: {}",
            context.generated_at.format("%Y/%m/%d")
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out.into_bytes())
    }
}

fn day_rows(day: &DailyRecord) -> Vec<[String; COLUMNS]> {
    day.trips()
        .iter()
        .enumerate()
        .map(|(i, trip)| {
            if i == 0 {
                [
                    day.date().label.clone(),
                    trip.route.to_string(),
                    distance_formula(day),
                    format_yen(day.transportation_fee()),
                    format_yen(day.allowance()),
                    format_yen(day.total()),
                ]
            } else {
                [
                    String::new(),
                    trip.route.to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                ]
            }
        })
        .collect()
}

fn format_row(cells: &[String; COLUMNS], widths: &[usize; COLUMNS]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            let pad = " ".repeat(width.saturating_sub(display_width(cell)));
            if i >= RIGHT_ALIGNED_FROM {
                format!("{}{}", pad, cell)
            } else {
                format!("{}{}", cell, pad)
            }
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Shows a day's distance, as `a+b=c` when several trips add up to it.
///
/// ```
/// use pino_expense::config::ReimbursementConfig;
/// use pino_expense::parse_report;
/// use pino_expense::render::distance_formula;
///
/// let report = parse_report("田中様\n1/5 A→B→C\n1/5 C→A", &ReimbursementConfig::default()).unwrap();
/// let day = &report.employee("田中").unwrap().days()[0];
/// assert_eq!(distance_formula(day), "10.0+5.0=15.0");
/// ```
pub fn distance_formula(day: &DailyRecord) -> String {
    let total = format_km(day.total_distance_km());
    if day.trips().len() < 2 {
        return total;
    }
    let parts: Vec<String> = day.trips().iter().map(|t| format_km(t.distance_km)).collect();
    format!("{}={}", parts.join("+"), total)
}

/// Formats kilometres with exactly one decimal place, rounding half away
/// from zero.
pub fn format_km(km: Decimal) -> String {
    let mut rounded = km.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    rounded.to_string()
}

/// Formats yen with thousands separators.
///
/// ```
/// use pino_expense::render::format_yen;
///
/// assert_eq!(format_yen(1234567), "1,234,567");
/// assert_eq!(format_yen(425), "425");
/// ```
pub fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Terminal column width, counting East Asian wide and full-width
/// characters as two columns.
fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    match c {
        '\u{1100}'..='\u{115F}'       // Hangul Jamo
        | '\u{2E80}'..='\u{303E}'     // CJK radicals and punctuation
        | '\u{3041}'..='\u{33FF}'     // kana and CJK compatibility
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'     // CJK ideographs
        | '\u{A000}'..='\u{A4CF}'
        | '\u{AC00}'..='\u{D7A3}'     // Hangul syllables
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FE30}'..='\u{FE4F}'
        | '\u{FF00}'..='\u{FF60}'     // full-width forms
        | '\u{FFE0}'..='\u{FFE6}'
        | '\u{1F300}'..='\u{1F64F}'
        | '\u{1F900}'..='\u{1F9FF}'
        | '\u{20000}'..='\u{3FFFD}' => 2,
        _ => 1,
    }
}
