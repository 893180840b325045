//! Text front end for the knight path planners.
//!
//! Reads the line-oriented input format (a header line of integers, then
//! either move pairs or grid rows), runs one operation and renders the
//! result in the output format expected by callers.

pub mod cli;
pub mod input;
pub mod output;
pub mod run;

pub use cli::{Cli, Mode};
pub use run::{Outcome, run};
