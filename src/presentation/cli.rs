//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Flags left unset fall back to config and environment values

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ColorMode;
use crate::selection::SelectorKind;

/// Strata - hierarchical multi-level selector
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick options interactively and print the final selection
    Pick {
        #[command(flatten)]
        selector: SelectorArgs,

        /// Ask one question per level instead of showing columns
        #[arg(long)]
        prompt: bool,
    },

    /// Apply a selection path without prompting and print the state
    Resolve {
        #[command(flatten)]
        selector: SelectorArgs,
    },

    /// Print the columns that would be rendered for a selection
    Levels {
        #[command(flatten)]
        selector: SelectorArgs,
    },
}

/// Tree and selector shape shared by all subcommands
#[derive(Args, Debug, Clone)]
pub struct SelectorArgs {
    /// Option tree file (.json, .yaml or .yml)
    pub tree: PathBuf,

    /// Number of selectable levels
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub levels: Option<u16>,

    /// Selector behaviour
    #[arg(short, long, value_enum)]
    pub kind: Option<SelectorKind>,

    /// Path of option ids to select, e.g. `a/a1`
    #[arg(short, long, value_name = "PATH")]
    pub select: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_pick() {
        let cli = Cli::try_parse_from(["strata", "pick", "tree.json", "--prompt"]).unwrap();
        match cli.command {
            Commands::Pick { selector, prompt } => {
                assert_eq!(selector.tree, PathBuf::from("tree.json"));
                assert!(prompt);
                assert!(selector.levels.is_none());
            }
            _ => panic!("Expected Pick command"),
        }
    }

    #[test]
    fn test_cli_parse_resolve_with_options() {
        let cli = Cli::try_parse_from([
            "strata",
            "resolve",
            "tree.yaml",
            "--levels",
            "2",
            "--kind",
            "advanced-selector",
            "--select",
            "a/a1",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve { selector } => {
                assert_eq!(selector.levels, Some(2));
                assert_eq!(selector.kind, Some(SelectorKind::AdvancedSelector));
                assert_eq!(selector.select.as_deref(), Some("a/a1"));
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["strata", "levels", "t.json", "--json", "-vv", "--color", "never"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorMode::Never));
    }

    #[test]
    fn test_cli_rejects_zero_levels() {
        assert!(Cli::try_parse_from(["strata", "resolve", "t.json", "--levels", "0"]).is_err());
    }
}
