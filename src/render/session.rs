//! Caller-owned report session.
//!
//! Holds the last successfully parsed report so statements can be
//! rendered, and re-rendered with another renderer, without parsing again.

use chrono::{DateTime, Local};
use tracing::warn;

use crate::config::ReimbursementConfig;
use crate::error::{EngineError, EngineResult};
use crate::ledger::parse_report;
use crate::models::ExpenseReport;

use super::{StatementContext, StatementRenderer, statement_file_name};

/// A rendered statement ready to be written or sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStatement {
    /// The employee the statement is for.
    pub employee_name: String,
    /// File name following the statement naming convention.
    pub file_name: String,
    /// MIME type of `bytes`.
    pub content_type: &'static str,
    /// The rendered statement.
    pub bytes: Vec<u8>,
}

/// Parsing and rendering state owned by one caller.
///
/// # Example
///
/// ```
/// use chrono::Local;
/// use pino_expense::config::ReimbursementConfig;
/// use pino_expense::render::{ReportSession, TextRenderer};
///
/// let mut session = ReportSession::new(ReimbursementConfig::default());
/// session.ingest("田中様\n1/5 渋谷→新宿").unwrap();
///
/// let statement = session.render("田中", &TextRenderer, Local::now()).unwrap();
/// assert!(statement.file_name.starts_with("精算書_田中_"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportSession {
    config: ReimbursementConfig,
    report: Option<ExpenseReport>,
}

impl ReportSession {
    /// Creates an empty session.
    pub fn new(config: ReimbursementConfig) -> Self {
        Self {
            config,
            report: None,
        }
    }

    /// The configuration this session parses and renders with.
    pub fn config(&self) -> &ReimbursementConfig {
        &self.config
    }

    /// Parses `text` and keeps the report. On failure the previous report
    /// is kept.
    pub fn ingest(&mut self, text: &str) -> EngineResult<&ExpenseReport> {
        let report = parse_report(text, &self.config)?;
        Ok(&*self.report.insert(report))
    }

    /// The last successfully parsed report.
    pub fn report(&self) -> Option<&ExpenseReport> {
        self.report.as_ref()
    }

    /// Forgets the current report.
    pub fn clear(&mut self) {
        self.report = None;
    }

    /// Renders one employee's statement.
    pub fn render(
        &self,
        employee_name: &str,
        renderer: &dyn StatementRenderer,
        generated_at: DateTime<Local>,
    ) -> EngineResult<RenderedStatement> {
        let ledger = self
            .report
            .as_ref()
            .and_then(|r| r.employee(employee_name))
            .ok_or_else(|| EngineError::EmployeeNotFound {
                name: employee_name.to_string(),
            })?;

        let context = StatementContext::from_config(&self.config, generated_at);
        let bytes = renderer.render(ledger, &context).inspect_err(|e| {
            warn!(employee = %employee_name, error = %e, "Statement rendering failed");
        })?;

        Ok(RenderedStatement {
            employee_name: employee_name.to_string(),
            file_name: statement_file_name(
                &self.config.statement_label,
                employee_name,
                generated_at.date_naive(),
                renderer.extension(),
            ),
            content_type: renderer.content_type(),
            bytes,
        })
    }

    /// Renders every employee's statement in report order.
    pub fn render_all(
        &self,
        renderer: &dyn StatementRenderer,
        generated_at: DateTime<Local>,
    ) -> EngineResult<Vec<RenderedStatement>> {
        let Some(report) = self.report.as_ref() else {
            return Ok(Vec::new());
        };
        report
            .employee_names()
            .map(|name| self.render(name, renderer, generated_at))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeLedger;
    use crate::render::{JsonRenderer, TextRenderer};

    struct FailingRenderer;

    impl StatementRenderer for FailingRenderer {
        fn extension(&self) -> &'static str {
            "png"
        }

        fn content_type(&self) -> &'static str {
            "image/png"
        }

        fn render(&self, _: &EmployeeLedger, _: &StatementContext) -> EngineResult<Vec<u8>> {
            Err(EngineError::RenderError {
                format: "png".to_string(),
                message: "font asset missing".to_string(),
            })
        }
    }

    fn session_with(text: &str) -> ReportSession {
        let mut session = ReportSession::new(ReimbursementConfig::default());
        session.ingest(text).unwrap();
        session
    }

    #[test]
    fn test_failed_ingest_keeps_previous_report() {
        let mut session = session_with("田中様\n1/5 A→B");
        assert!(matches!(session.ingest("   "), Err(EngineError::EmptyInput)));
        assert!(session.report().unwrap().employee("田中").is_some());
    }

    #[test]
    fn test_render_failure_allows_retry_with_other_renderer() {
        let session = session_with("田中様\n1/5 A→B");
        let before = session.report().cloned();

        let result = session.render("田中", &FailingRenderer, Local::now());
        assert!(matches!(result, Err(EngineError::RenderError { .. })));
        assert_eq!(session.report().cloned(), before);

        let statement = session.render("田中", &JsonRenderer, Local::now()).unwrap();
        assert!(statement.file_name.ends_with(".json"));
        assert_eq!(statement.content_type, "application/json");
    }

    #[test]
    fn test_unknown_employee() {
        let session = session_with("田中様\n1/5 A→B");
        let result = session.render("佐藤", &TextRenderer, Local::now());
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { .. })));
    }

    #[test]
    fn test_render_all_in_report_order() {
        let session = session_with("鈴木様\n1/5 A→B\n阿部様\n1/5 A→B");
        let statements = session.render_all(&TextRenderer, Local::now()).unwrap();
        let names: Vec<&str> = statements.iter().map(|s| s.employee_name.as_str()).collect();
        assert_eq!(names, vec!["鈴木", "阿部"]);
    }

    #[test]
    fn test_render_all_without_report_is_empty() {
        let session = ReportSession::new(ReimbursementConfig::default());
        assert!(session.render_all(&TextRenderer, Local::now()).unwrap().is_empty());
    }
}
