//! todo - apply a script of to-do list edits and print the resulting lists
//!
//! Starts from the configured seed lists (or none with `--empty`), runs the
//! script commands through libtodo's dispatcher and prints every list with
//! its filter applied. Nothing is saved.

mod render;
mod script;

use anyhow::Context;
use clap::Parser;
use libtodo::logging::{LogFormat, LoggingConfig};
use libtodo::{Config, TodoApp, TodoError};
use std::io::Read;
use std::path::PathBuf;

use render::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Apply a script of to-do list edits and print the resulting lists", long_about = None)]
struct Cli {
    /// Script with one command per line (reads stdin if not provided)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Config file with validation limits and seed lists
    #[arg(short, long, env = "TODO_CONFIG")]
    config: Option<PathBuf>,

    /// Start without any lists instead of the configured seed
    #[arg(long)]
    empty: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log format (text, json, pretty)
    #[arg(long, env = "TODO_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Minimum log level (error, warn, info, debug, trace)
    #[arg(long, env = "TODO_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    LoggingConfig::new(cli.log_format, cli.log_level.clone(), cli.verbose).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<TodoError>()
            .map(TodoError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let mut app = if cli.empty {
        TodoApp::default()
    } else {
        TodoApp::from_seed(&config.lists)
    };

    let source = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            buf
        }
    };

    let mut snapshots = script::run(&mut app, &config.validation, &source)?;
    if snapshots.is_empty() {
        snapshots.push(app.views());
    }
    tracing::debug!(snapshots = snapshots.len(), "script finished");

    let rendered = snapshots
        .iter()
        .map(|views| render::render(views, cli.format))
        .collect::<Result<Vec<_>, _>>()
        .context("failed to render lists")?;

    // Text snapshots are separated by a blank line, JSON is one array per line
    match cli.format {
        OutputFormat::Text => print!("{}", rendered.join("\n")),
        OutputFormat::Json => {
            for out in &rendered {
                println!("{}", out);
            }
        }
    }

    Ok(())
}
