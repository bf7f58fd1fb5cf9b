//! Statement rendering.
//!
//! Every output format implements [`StatementRenderer`] and consumes the
//! same read-only [`EmployeeLedger`]. Image, PDF and spreadsheet exporters
//! live outside this crate and plug in through the same trait; the crate
//! ships a fixed-width text statement, a JSON statement and a source-text
//! re-rendering.

mod json;
mod naming;
mod session;
mod source;
mod text;

pub use json::JsonRenderer;
pub use naming::statement_file_name;
pub use session::{RenderedStatement, ReportSession};
pub use source::SourceTextRenderer;
pub use text::{TextRenderer, distance_formula, format_km, format_yen};

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ReimbursementConfig;
use crate::error::EngineResult;
use crate::models::EmployeeLedger;

/// Turns one employee ledger into statement bytes.
pub trait StatementRenderer {
    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    /// MIME type of the rendered bytes.
    fn content_type(&self) -> &'static str;

    /// Renders the statement. A failure leaves the ledger untouched.
    fn render(&self, ledger: &EmployeeLedger, context: &StatementContext) -> EngineResult<Vec<u8>>;
}

/// Everything a statement needs besides the ledger itself.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementContext {
    /// Reporting period shown in the title.
    pub period_label: String,
    /// Note printed under the table.
    pub footnote: String,
    /// Rate shown in the fee column header.
    pub rate_per_km: Decimal,
    /// When the statement was generated.
    pub generated_at: DateTime<Local>,
}

impl StatementContext {
    /// Builds a context from the configuration and a generation time.
    pub fn from_config(config: &ReimbursementConfig, generated_at: DateTime<Local>) -> Self {
        Self {
            period_label: config.period_label.clone(),
            footnote: config.footnote.clone(),
            rate_per_km: config.rate_per_km,
            generated_at,
        }
    }

    /// The statement title for an employee.
    ///
    /// ```
    /// use chrono::Local;
    /// use pino_expense::config::ReimbursementConfig;
    /// use pino_expense::render::StatementContext;
    ///
    /// let context = StatementContext::from_config(&ReimbursementConfig::default(), Local::now());
    /// assert_eq!(context.title("田中"), "田中様 1月 社内通貨（交通費）清算額");
    /// ```
    pub fn title(&self, employee_name: &str) -> String {
        format!(
            "{}様 {} 社内通貨（交通費）清算額",
            employee_name, self.period_label
        )
    }
}

/// The in-crate output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Fixed-width text table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Trip lines in the dialect they were read from.
    Source,
}

impl OutputFormat {
    /// The renderer for this format.
    pub fn renderer(self) -> Box<dyn StatementRenderer + Send + Sync> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Source => Box::new(SourceTextRenderer),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Source => write!(f, "source"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "source" => Ok(OutputFormat::Source),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
