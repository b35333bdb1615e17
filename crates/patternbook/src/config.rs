//! Configuration management for patternbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::patterns::abstract_factory::Cuisine;
use crate::patterns::credit_card::CardKind;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the platform config directory.
const CONFIG_DIR_NAME: &str = "patternbook";

/// Widest separator line accepted.
const MAX_SEPARATOR_WIDTH: usize = 200;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PATTERNBOOK_`, `__` between levels)
/// 2. TOML config file at `~/.config/patternbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Console output configuration.
    pub output: OutputConfig,
    /// Demonstration selection and parameters.
    pub demos: DemosConfig,
    /// Journal persistence for the single-responsibility demo.
    pub journal: JournalConfig,
}

/// Console output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Character the separator line between demos is drawn with.
    pub separator_char: char,
    /// Length of the separator line.
    pub separator_width: usize,
    /// Print each demo's title under the separator.
    pub show_titles: bool,
}

/// Demonstration selection and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemosConfig {
    /// Demos run by `patterns run` when no names are given.
    pub default: Vec<String>,
    /// Card kind issued by the credit-card factory demo.
    pub credit_card: String,
    /// Cuisine codes fed to the abstract-factory demo.
    pub cuisines: Vec<char>,
}

/// Journal persistence configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// File the journal is saved to. Nothing is written when unset.
    pub path: Option<PathBuf>,
    /// Replace an existing file.
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator_char: '-',
            separator_width: 50,
            show_titles: true,
        }
    }
}

impl OutputConfig {
    /// The separator line printed before each demo.
    #[must_use]
    pub fn separator(&self) -> String {
        std::iter::repeat(self.separator_char)
            .take(self.separator_width)
            .collect()
    }
}

impl Default for DemosConfig {
    fn default() -> Self {
        Self {
            default: vec!["decorator".to_string()],
            credit_card: "moneyback".to_string(),
            cuisines: vec!['A', 'C'],
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// Without a path the default location is used, and a missing file there
    /// just means defaults. A path given explicitly must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config file is missing, or if
    /// configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = match config_path {
            Some(path) if !path.is_file() => return Err(Error::ConfigNotFound { path }),
            Some(path) => path,
            None => Self::default_config_path(),
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("PATTERNBOOK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let width = self.output.separator_width;
        if width == 0 || width > MAX_SEPARATOR_WIDTH {
            return Err(Error::ConfigValidation {
                message: format!(
                    "separator_width must be between 1 and {MAX_SEPARATOR_WIDTH}, got {width}"
                ),
            });
        }

        let catalog = Catalog::builtin();
        for name in &self.demos.default {
            if catalog.find(name).is_none() {
                return Err(Error::ConfigValidation {
                    message: format!("unknown demo in demos.default: {name}"),
                });
            }
        }

        if self.demos.credit_card.parse::<CardKind>().is_err() {
            return Err(Error::ConfigValidation {
                message: format!("unknown credit_card kind: {}", self.demos.credit_card),
            });
        }

        for &code in &self.demos.cuisines {
            if Cuisine::try_from(code).is_err() {
                return Err(Error::ConfigValidation {
                    message: format!("unknown cuisine code: {code}"),
                });
            }
        }

        Ok(())
    }

    /// The credit card kind the factory demo issues.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured kind is unknown.
    pub fn credit_card_kind(&self) -> Result<CardKind> {
        self.demos.credit_card.parse()
    }
}
