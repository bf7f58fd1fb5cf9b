//! Report date model.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date as written in the trip report, with its calendar date when one
/// could be resolved.
///
/// Two entries fall on the same day when their resolved dates match, or,
/// when neither resolves, when their labels match exactly.
///
/// # Example
///
/// ```
/// use pino_expense::models::ReportDate;
/// use chrono::NaiveDate;
///
/// let a = ReportDate::new("1/5", NaiveDate::from_ymd_opt(2025, 1, 5));
/// let b = ReportDate::new("1/12", NaiveDate::from_ymd_opt(2025, 1, 12));
/// assert!(a.chronological_cmp(&b).is_lt());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportDate {
    /// The token as it appeared in the source text.
    pub label: String,
    /// The calendar date, if the label could be read as one.
    pub date: Option<NaiveDate>,
}

impl ReportDate {
    /// Creates a report date.
    pub fn new(label: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            label: label.into(),
            date,
        }
    }

    /// The grouping key for this date.
    pub fn day_key(&self) -> DayKey {
        match self.date {
            Some(date) => DayKey::Date(date),
            None => DayKey::Label(self.label.clone()),
        }
    }

    /// Orders resolved dates ascending and places unresolved labels after
    /// them. Unresolved labels compare equal so a stable sort keeps their
    /// source order.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        match (self.date, other.date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Identifies one calendar day for grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DayKey {
    /// A resolved calendar date.
    Date(NaiveDate),
    /// An unresolved label, matched verbatim.
    Label(String),
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(label: &str, m: u32, d: u32) -> ReportDate {
        ReportDate::new(label, NaiveDate::from_ymd_opt(2025, m, d))
    }

    #[test]
    fn test_resolved_dates_sort_numerically_not_lexically() {
        let mut dates = vec![resolved("1/12", 1, 12), resolved("1/5", 1, 5)];
        dates.sort_by(|a, b| a.chronological_cmp(b));
        assert_eq!(dates[0].label, "1/5");
        assert_eq!(dates[1].label, "1/12");
    }

    #[test]
    fn test_unresolved_after_resolved_in_source_order() {
        let mut dates = vec![
            ReportDate::new("翌日", None),
            resolved("1/9", 1, 9),
            ReportDate::new("前日", None),
        ];
        dates.sort_by(|a, b| a.chronological_cmp(b));
        let labels: Vec<&str> = dates.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["1/9", "翌日", "前日"]);
    }

    #[test]
    fn test_day_key_merges_equivalent_labels() {
        let a = resolved("1/5", 1, 5);
        let b = resolved("1月5日", 1, 5);
        assert_eq!(a.day_key(), b.day_key());
        assert_ne!(
            ReportDate::new("前日", None).day_key(),
            ReportDate::new("翌日", None).day_key()
        );
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(resolved("1/5", 1, 5).to_string(), "1/5");
    }
}
