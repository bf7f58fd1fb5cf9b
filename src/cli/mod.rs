//! Command line interface.
//!
//! Thin dispatch layer: every subcommand loads the configuration, then
//! hands off to the library pipeline, renderers or HTTP router.

pub mod commands;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::info;

use commands::{Commands, ParseArgs, RenderArgs, ServeArgs};
use pino_expense::api::{AppState, create_router};
use pino_expense::config::ConfigLoader;
use pino_expense::parse_report;
use pino_expense::render::ReportSession;

/// Turns pasted commute reports into expense ledgers and statements.
#[derive(Parser, Debug)]
#[command(name = "pino-expense", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Runs the selected subcommand.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Parse(args) => run_parse(args),
            Commands::Render(args) => run_render(args),
            Commands::Serve(args) => run_serve(args),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(ConfigLoader::default()),
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn run_parse(args: ParseArgs) -> Result<()> {
    let loader = load_config(args.config.as_deref())?;
    let text = read_input(&args.input)?;

    let report = parse_report(&text, loader.config())?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_render(args: RenderArgs) -> Result<()> {
    let loader = load_config(args.config.as_deref())?;
    let text = read_input(&args.input)?;

    let mut session = ReportSession::new(loader.config().clone());
    session.ingest(&text)?;

    let renderer = args.format.renderer();
    let statements = session.render_all(renderer.as_ref(), Local::now())?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    for statement in &statements {
        let path = args.out_dir.join(&statement.file_name);
        fs::write(&path, &statement.bytes)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(employee = %statement.employee_name, path = %path.display(), "Wrote statement");
    }

    println!("{} statement(s) written to {}", statements.len(), args.out_dir.display());
    Ok(())
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let loader = load_config(args.config.as_deref())?;
    let router = create_router(AppState::new(loader));

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&args.bind)
            .await
            .with_context(|| format!("binding {}", args.bind))?;
        info!(bind = %args.bind, "Listening");
        axum::serve(listener, router).await?;
        Ok::<(), anyhow::Error>(())
    })
}
