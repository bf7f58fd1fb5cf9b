//! Date token resolution.
//!
//! Trip reports write dates as free-form tokens (`1/5`, `1月5日`,
//! `2025/1/5`, `1/5(日)`). The token is kept verbatim as the label and,
//! when it can be read as a calendar date, resolved for ordering.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::config::ReimbursementConfig;
use crate::models::ReportDate;

use super::normalize_width;

static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<year>\d{4})[/.\-年])?(?P<month>\d{1,2})[/.\-月](?P<day>\d{1,2})日?(?:\([^)]*\))?$",
    )
    .expect("date token pattern is valid")
});

/// Resolves a date token against the reporting year.
///
/// Tokens without a year take [`ReimbursementConfig::year_for_month`].
/// Tokens that are not dates, or name an impossible day, keep their label
/// and stay unresolved.
///
/// ```
/// use chrono::NaiveDate;
/// use pino_expense::config::ReimbursementConfig;
/// use pino_expense::extraction::resolve_date;
///
/// let config = ReimbursementConfig::default();
/// let date = resolve_date("1/5", &config);
/// assert_eq!(date.label, "1/5");
/// assert_eq!(date.date, NaiveDate::from_ymd_opt(2025, 1, 5));
/// ```
pub fn resolve_date(token: &str, config: &ReimbursementConfig) -> ReportDate {
    let label = token.trim();
    let normalized = normalize_width(label);

    let date = DATE_TOKEN.captures(&normalized).and_then(|caps| {
        let month: u32 = caps["month"].parse().ok()?;
        let day: u32 = caps["day"].parse().ok()?;
        let year = match caps.name("year") {
            Some(y) => y.as_str().parse().ok()?,
            None => config.year_for_month(month),
        };
        NaiveDate::from_ymd_opt(year, month, day)
    });

    ReportDate::new(label, date)
}

/// Builds a date from month and day numbers already split out of the text.
pub fn month_day(month: u32, day: u32, config: &ReimbursementConfig) -> ReportDate {
    let date = NaiveDate::from_ymd_opt(config.year_for_month(month), month, day);
    ReportDate::new(format!("{}/{}", month, day), date)
}
