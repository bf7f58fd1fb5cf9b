//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use pino_expense::render::OutputFormat;

/// The top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a trip report and print the ledger as JSON
    Parse(ParseArgs),

    /// Render one statement file per employee
    Render(RenderArgs),

    /// Serve the HTTP API
    Serve(ServeArgs),
}

/// Arguments for `parse`.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Text file holding the pasted report
    #[arg(long)]
    pub input: PathBuf,

    /// Reimbursement configuration (YAML); built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Text file holding the pasted report
    #[arg(long)]
    pub input: PathBuf,

    /// Directory the statements are written to
    #[arg(long, default_value = "statements")]
    pub out_dir: PathBuf,

    /// Statement format: text, json or source
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Reimbursement configuration (YAML); built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind: String,

    /// Reimbursement configuration (YAML); built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}
