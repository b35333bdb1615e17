//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::catalog::Category;

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only list demos in this category
    #[arg(short = 'k', long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Name of the demo (e.g. "decorator", "open-closed")
    pub name: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Run command arguments.
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Demos to run, in order (defaults to `demos.default` from the config)
    #[arg(conflicts_with_all = ["all", "category"])]
    pub names: Vec<String>,

    /// Run every demo
    #[arg(short, long, conflicts_with = "category")]
    pub all: bool,

    /// Run every demo in this category
    #[arg(short = 'k', long, value_enum)]
    pub category: Option<CategoryArg>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration file
    Validate {
        /// Path to config file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Demo category for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Object creation patterns
    Creational,
    /// Object composition patterns
    Structural,
    /// Behavioral patterns
    Behavioral,
    /// SOLID and related principles
    Principle,
    /// Dependency-injection styles
    Injection,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Creational => Self::Creational,
            CategoryArg::Structural => Self::Structural,
            CategoryArg::Behavioral => Self::Behavioral,
            CategoryArg::Principle => Self::Principle,
            CategoryArg::Injection => Self::Injection,
        }
    }
}
