//! Command-line interface for galo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Galo - tic-tac-toe on a pickable 3D board
#[derive(Parser, Debug)]
#[command(name = "galo")]
#[command(about = "Tic-tac-toe on a pickable 3D board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal with the mouse or keys 1-9
    Play {
        /// Scene configuration file (TOML). Defaults are used if omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Where to write logs while the terminal UI owns the screen
        #[arg(long, default_value = "galo.log")]
        log_file: PathBuf,
    },

    /// Run a command script and print scene events as JSON lines
    Script {
        /// Scene configuration file (TOML). Defaults are used if omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Viewport aspect ratio used for click commands
        #[arg(long, default_value = "1.0")]
        aspect: f32,

        /// Script file; reads stdin if omitted
        input: Option<PathBuf>,
    },
}
