//! Statement file naming.

use chrono::NaiveDate;

/// Builds `<label>_<employee>_<YYYYMMDD>.<extension>`.
///
/// Path separators in the employee name are replaced with `_`.
///
/// ```
/// use chrono::NaiveDate;
/// use pino_expense::render::statement_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// assert_eq!(statement_file_name("精算書", "田中", date, "png"), "精算書_田中_20250131.png");
/// ```
pub fn statement_file_name(label: &str, employee_name: &str, date: NaiveDate, extension: &str) -> String {
    let employee: String = employee_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}_{}_{}.{}", label, employee, date.format("%Y%m%d"), extension)
}
