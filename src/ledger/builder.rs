//! Ledger assembly.

use crate::error::EngineResult;
use crate::extraction::Dialect;
use crate::models::{EmployeeLedger, ExpenseReport};

use super::aggregator::EmployeeDays;

/// Builds the read-only report: each employee's days sorted by date with a
/// totals row, employees kept in first-appearance order.
pub fn build_report(dialect: Dialect, employees: Vec<EmployeeDays>) -> EngineResult<ExpenseReport> {
    let ledgers = employees
        .into_iter()
        .map(|e| EmployeeLedger::new(e.employee_name, e.days))
        .collect::<EngineResult<Vec<_>>>()?;
    ExpenseReport::new(dialect, ledgers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReimbursementConfig;
    use crate::error::EngineError;
    use crate::extraction::extract;
    use crate::ledger::aggregate;

    fn build(text: &str) -> ExpenseReport {
        let config = ReimbursementConfig::default();
        let extraction = extract(text, &config).unwrap();
        let employees =
            aggregate(extraction.entries, config.rate_per_km, config.daily_allowance).unwrap();
        build_report(extraction.dialect, employees).unwrap()
    }

    #[test]
    fn test_days_sorted_within_employee() {
        let report = build("田中様\n1/12 A→B\n1/5 A→B\n1/9 A→B");
        let labels: Vec<&str> = report
            .employee("田中")
            .unwrap()
            .days()
            .iter()
            .map(|d| d.date().label.as_str())
            .collect();
        assert_eq!(labels, vec!["1/5", "1/9", "1/12"]);
    }

    #[test]
    fn test_grand_totals_span_employees() {
        let report = build("田中様\n1/5 A→B\n佐藤様\n1/5 A→B→C");
        let totals = report.grand_totals();
        assert_eq!(totals.days, 2);
        // (75 + 200) + (150 + 200)
        assert_eq!(totals.total, 625);
        assert_eq!(report.dialect(), Dialect::Plain);
    }

    #[test]
    fn test_grand_total_overflow_across_employees_is_error() {
        let text = "【ピノ】田中 1/5(日) (A→B) 1000000000000000000km\n\
                    【ピノ】佐藤 1/5(日) (A→B) 1000000000000000000km";
        let config = ReimbursementConfig::default();
        let extraction = extract(text, &config).unwrap();
        let employees =
            aggregate(extraction.entries, config.rate_per_km, config.daily_allowance).unwrap();

        let result = build_report(extraction.dialect, employees);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
