use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Validate knight move sequences and search for knight paths.
#[derive(Debug, Parser)]
#[command(name = "knightboard", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,

    /// Read input from this file instead of stdin.
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Print board dumps while validating and raise the log level to debug.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// The operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Mode {
    /// Check a move sequence. Input: `depth width startX startY [verbose]`,
    /// then one `dx dy` pair per line. Exits 0 if valid, 1 otherwise.
    Validate,
    /// Find any path. Input: `depth width startX startY endX endY`.
    Any,
    /// Find a path with the fewest moves. Same input as `any`.
    Shortest,
    /// Find the longest simple path. Same input as `any`; small boards only.
    Longest,
    /// Find the cheapest path over terrain. Input: `startX startY endX endY`,
    /// then the grid rows.
    Weighted,
}
