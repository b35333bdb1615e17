//! Command-line interface for patternbook.
//!
//! This module provides the CLI structure for the `patterns` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{CategoryArg, ConfigCommand, ListCommand, RunCommand, ShowCommand};

/// patterns - Runnable design pattern and SOLID principle demonstrations
///
/// Each demo prints a short scenario showing a pattern, a principle, or a
/// dependency-injection style at work.
#[derive(Debug, Parser)]
#[command(name = "patterns")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available demos
    List(ListCommand),

    /// Describe one demo
    Show(ShowCommand),

    /// Run demos
    Run(RunCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn list_command() -> Command {
        Command::List(ListCommand {
            category: None,
            json: false,
        })
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "patterns");
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: list_command(),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: false,
            command: list_command(),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose() {
        let cli = Cli {
            config: None,
            verbose: 1,
            quiet: false,
            command: list_command(),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_trace() {
        let cli = Cli {
            config: None,
            verbose: 3,
            quiet: false,
            command: list_command(),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_with_category() {
        let cli = Cli::try_parse_from(["patterns", "list", "--category", "principle"]).unwrap();
        match cli.command {
            Command::List(cmd) => assert_eq!(cmd.category, Some(CategoryArg::Principle)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_run_names() {
        let cli = Cli::try_parse_from(["patterns", "run", "decorator", "singleton"]).unwrap();
        match cli.command {
            Command::Run(cmd) => {
                assert_eq!(cmd.names, ["decorator", "singleton"]);
                assert!(!cmd.all);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_run_all() {
        let cli = Cli::try_parse_from(["patterns", "run", "--all"]).unwrap();
        assert!(matches!(cli.command, Command::Run(RunCommand { all: true, .. })));
    }

    #[test]
    fn test_run_names_conflict_with_all() {
        assert!(Cli::try_parse_from(["patterns", "run", "--all", "decorator"]).is_err());
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["patterns", "show", "open-closed", "--json"]).unwrap();
        match cli.command {
            Command::Show(cmd) => {
                assert_eq!(cmd.name, "open-closed");
                assert!(cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["patterns", "-c", "/custom/config.toml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli =
            Cli::try_parse_from(["patterns", "config", "validate", "--file", "x.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["patterns", "list", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
