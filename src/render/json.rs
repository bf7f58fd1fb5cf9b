//! JSON statement.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{DailyRecord, EmployeeLedger, LedgerRow, LedgerTotals};

use super::{StatementContext, StatementRenderer};

/// Renders a ledger and its statement metadata as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonStatement<'a> {
    title: String,
    employee_name: &'a str,
    rows: Vec<LedgerRow>,
    days: &'a [DailyRecord],
    totals: &'a LedgerTotals,
    footnote: &'a str,
    generated_at: DateTime<Local>,
}

impl StatementRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, ledger: &EmployeeLedger, context: &StatementContext) -> EngineResult<Vec<u8>> {
        let statement = JsonStatement {
            title: context.title(ledger.employee_name()),
            employee_name: ledger.employee_name(),
            rows: ledger.rows(),
            days: ledger.days(),
            totals: ledger.totals(),
            footnote: &context.footnote,
            generated_at: context.generated_at,
        };

        serde_json::to_vec_pretty(&statement).map_err(|e| EngineError::RenderError {
            format: "json".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReimbursementConfig;
    use crate::ledger::parse_report;
    use serde_json::Value;

    #[test]
    fn test_json_statement_fields() {
        let config = ReimbursementConfig::default();
        let report = parse_report("田中様\n1/5 渋谷→新宿→池袋\n1/5 池袋→渋谷", &config).unwrap();
        let context = StatementContext::from_config(&config, Local::now());

        let bytes = JsonRenderer
            .render(report.employee("田中").unwrap(), &context)
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["employee_name"], "田中");
        assert_eq!(json["title"], "田中様 1月 社内通貨（交通費）清算額");
        assert_eq!(json["totals"]["total"], 425);
        assert_eq!(json["rows"].as_array().unwrap().len(), 2);
        assert_eq!(json["rows"][1]["kind"], "total");
        assert_eq!(json["rows"][1]["date"], "合計");
        assert_eq!(json["days"][0]["trips"].as_array().unwrap().len(), 2);
    }
}
