//! Galo - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use galo::{Cli, Command, load_config, run_script, run_tui};
use galo_scene::Presenter;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, log_file } => {
            init_file_logging(&log_file)?;
            let config = load_config(config.as_deref())?;
            run_tui(&config)
        }
        Command::Script {
            config,
            aspect,
            input,
        } => {
            init_stderr_logging();
            let result = script(config.as_deref(), aspect, input.as_deref());
            if let Err(err) = &result {
                error!(error = ?err, "Script failed");
            }
            result
        }
    }
}

fn script(config: Option<&Path>, aspect: f32, input: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let mut presenter = Presenter::new(&config, aspect);
    let stdout = io::stdout().lock();
    let written = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            run_script(&mut presenter, BufReader::new(file), stdout)?
        }
        None => run_script(&mut presenter, io::stdin().lock(), stdout)?,
    };
    info!(written, "Script finished");
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to a file so the alternate screen stays clean.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Logs to stderr, leaving stdout to the JSON events.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}
