//! Command-line interface definitions and parsing
//!
//! Diagnostic CLI for the autotags filter using the `clap` crate. The
//! binary does not run tests itself; it inspects what the filter would do:
//! which tags are active, whether a given test function would be skipped,
//! and what the local cache holds.
//!
//! # Commands
//!
//! - **show**: fetch (or reuse) the tag list and print the session summary (default)
//! - **check**: evaluate one test function against the active tags
//! - **cache**: inspect or clear the cached tag list

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(name = "autotags", about = "Inspect the CI auto-tag test filter", version)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, defaulting to `show`
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Show {
            json: false,
            offline: false,
        })
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fetch the active tag list and print the session summary
    #[command(alias = "s")]
    Show {
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,

        /// Skip the network fetch and use the cached list only
        #[arg(long)]
        offline: bool,
    },

    /// Evaluate a single test function against the active tags
    #[command(alias = "c")]
    Check {
        /// Dotted module identifier of the test function
        #[arg(short, long)]
        module: String,

        /// Qualified name within the module, e.g. TestMove.test_post
        #[arg(short = 'n', long)]
        qualname: String,

        /// Defining file path, if known
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Skip the network fetch and use the cached list only
        #[arg(long)]
        offline: bool,
    },

    /// Inspect or clear the cached tag list
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CacheCommands {
    /// Print the cached tag list and when it was fetched
    Show,
    /// Drop the cached tag list
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_show() {
        let cli = Cli::try_parse_from(["autotags"]).unwrap();
        assert!(matches!(
            cli.get_command(),
            Commands::Show { json: false, offline: false }
        ));
    }

    #[test]
    fn test_show_flags() {
        let cli = Cli::try_parse_from(["autotags", "show", "--json", "--offline"]).unwrap();
        assert!(matches!(
            cli.get_command(),
            Commands::Show { json: true, offline: true }
        ));
    }

    #[test]
    fn test_check_arguments() {
        let cli = Cli::try_parse_from([
            "autotags",
            "check",
            "--module",
            "odoo.addons.account.tests.test_move",
            "--qualname",
            "TestMove.test_post",
        ])
        .unwrap();

        match cli.get_command() {
            Commands::Check { module, qualname, file, offline } => {
                assert_eq!(module, "odoo.addons.account.tests.test_move");
                assert_eq!(qualname, "TestMove.test_post");
                assert!(file.is_none());
                assert!(!offline);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cache_subcommands() {
        let cli = Cli::try_parse_from(["autotags", "cache", "clear"]).unwrap();
        assert!(matches!(
            cli.get_command(),
            Commands::Cache { command: CacheCommands::Clear }
        ));
    }

    #[test]
    fn test_global_quiet_flag() {
        let cli = Cli::try_parse_from(["autotags", "-q", "show"]).unwrap();
        assert!(cli.quiet);
    }
}
