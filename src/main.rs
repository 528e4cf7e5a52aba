//! Strata CLI - hierarchical multi-level selector
//!
//! Usage: strata <COMMAND>
//!
//! Commands:
//!   pick     Pick options interactively and print the final selection
//!   resolve  Apply a selection path without prompting
//!   levels   Print the columns that would be rendered

use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;

use strata::config::ColorMode;
use strata::error::StrataError;
use strata::presentation::{init_logging, Cli, Commands, OutputFormat};

mod commands;

/// Exit status for an interactive selection the user backed out of
const EXIT_CANCELLED: u8 = 130;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ansi = match cli.color {
        Some(ColorMode::Always) => true,
        Some(ColorMode::Never) => false,
        _ => std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    };
    init_logging(cli.verbose, ansi);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if matches!(e.downcast_ref::<StrataError>(), Some(StrataError::Cancelled)) => {
            eprintln!("Cancelled.");
            ExitCode::from(EXIT_CANCELLED)
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let format = OutputFormat::from_json_flag(cli.json);
    match &cli.command {
        Commands::Pick { selector, prompt } => {
            commands::pick::cmd_pick(selector, *prompt, format, cli.color)
        }
        Commands::Resolve { selector } => commands::resolve::cmd_resolve(selector, format),
        Commands::Levels { selector } => commands::levels::cmd_levels(selector, format),
    }
}
