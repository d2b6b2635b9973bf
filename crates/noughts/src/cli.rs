//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a feed-forward move selector
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a feed-forward move selector", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout (you are X)
    Play {
        /// Path to a TOML play config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Path to a TOML model file (overrides the config)
        #[arg(long)]
        model: Option<PathBuf>,

        /// Pause before the automated move, in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
    },

    /// Print the automated player's move for a board
    Suggest {
        /// Nine cells, row-major: X, O or . (e.g. "X.. .O. ...")
        #[arg(long)]
        board: String,

        /// Path to a TOML model file
        #[arg(long)]
        model: Option<PathBuf>,

        /// Also print every cell's score
        #[arg(long)]
        scores: bool,
    },

    /// Print the outcome of a board
    Classify {
        /// Nine cells, row-major: X, O or .
        #[arg(long)]
        board: String,
    },
}
