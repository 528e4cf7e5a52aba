//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Logging setup
//! - Output formatting (text/JSON)

pub mod cli;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands, SelectorArgs};
pub use logging::init_logging;
pub use output::{render_levels, render_state, ColumnSummary, OutputFormat};
