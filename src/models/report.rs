//! Expense report model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::extraction::Dialect;

use super::{EmployeeLedger, LedgerTotals};

/// The root result of a parse: one ledger per employee.
///
/// Employees iterate in the order their names first appear in the source
/// text, not alphabetically.
///
/// # Example
///
/// ```
/// use pino_expense::config::ReimbursementConfig;
/// use pino_expense::parse_report;
///
/// let text = "鈴木様\n1/5 A→B\n阿部様\n1/5 A→B";
/// let report = parse_report(text, &ReimbursementConfig::default()).unwrap();
/// let names: Vec<&str> = report.employee_names().collect();
/// assert_eq!(names, vec!["鈴木", "阿部"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseReport {
    dialect: Dialect,
    employees: IndexMap<String, EmployeeLedger>,
    grand_totals: LedgerTotals,
}

impl ExpenseReport {
    /// Assembles a report from ledgers already in first-appearance order.
    ///
    /// Fails with [`EngineError::CalculationError`] when a grand total
    /// overflows.
    ///
    /// [`EngineError::CalculationError`]: crate::error::EngineError::CalculationError
    pub fn new(dialect: Dialect, ledgers: Vec<EmployeeLedger>) -> EngineResult<Self> {
        let mut grand_totals = LedgerTotals::default();
        let mut employees = IndexMap::with_capacity(ledgers.len());
        for ledger in ledgers {
            grand_totals.merge(ledger.totals())?;
            employees.insert(ledger.employee_name().to_string(), ledger);
        }

        Ok(Self {
            dialect,
            employees,
            grand_totals,
        })
    }

    /// The dialect the source text was read as.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Looks up one employee's ledger.
    pub fn employee(&self, name: &str) -> Option<&EmployeeLedger> {
        self.employees.get(name)
    }

    /// Employee names in first-appearance order.
    pub fn employee_names(&self) -> impl Iterator<Item = &str> {
        self.employees.keys().map(String::as_str)
    }

    /// Ledgers in first-appearance order.
    pub fn ledgers(&self) -> impl Iterator<Item = &EmployeeLedger> {
        self.employees.values()
    }

    /// Totals across every employee.
    pub fn grand_totals(&self) -> &LedgerTotals {
        &self.grand_totals
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the report holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = ExpenseReport::new(Dialect::Plain, vec![]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.grand_totals(), &LedgerTotals::default());
    }

    #[test]
    fn test_insertion_order_kept() {
        let report = ExpenseReport::new(
            Dialect::Plain,
            vec![
                EmployeeLedger::new("渡辺", vec![]).unwrap(),
                EmployeeLedger::new("青木", vec![]).unwrap(),
            ],
        )
        .unwrap();
        let names: Vec<&str> = report.employee_names().collect();
        assert_eq!(names, vec!["渡辺", "青木"]);
        assert!(report.employee("青木").is_some());
        assert!(report.employee("佐藤").is_none());
    }

    #[test]
    fn test_serialized_employee_order_matches_iteration() {
        let report = ExpenseReport::new(
            Dialect::Plain,
            vec![
                EmployeeLedger::new("渡辺", vec![]).unwrap(),
                EmployeeLedger::new("青木", vec![]).unwrap(),
            ],
        )
        .unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let first = json.find("渡辺").unwrap();
        let second = json.find("青木").unwrap();
        assert!(first < second);
        assert!(json.contains("\"dialect\":\"plain\""));
    }
}
