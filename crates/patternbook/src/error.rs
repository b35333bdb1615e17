//! Error types for patternbook.
//!
//! This module defines all error types used throughout the patternbook crate,
//! from the validation failures the demonstrations raise on purpose to the
//! configuration and I/O errors of the CLI around them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for patternbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// A first or last name was empty or whitespace.
    #[error("name is not valid: '{first}' '{last}'")]
    InvalidName {
        /// The first name as given.
        first: String,
        /// The last name as given.
        last: String,
    },

    /// An email address is missing its `@` or `.`.
    #[error("email is not valid: '{email}'")]
    InvalidEmail {
        /// The rejected address.
        email: String,
    },

    // === Catalog Errors ===
    /// No demonstration is registered under this name.
    #[error("unknown demo '{name}' (run `patterns list` to see them all)")]
    UnknownDemo {
        /// The name that was looked up.
        name: String,
    },

    // === Pattern Errors ===
    /// A factory selector (cuisine code, card kind, ...) was not recognised.
    #[error("unsupported {what}: '{value}'")]
    UnsupportedOption {
        /// What kind of selector was given.
        what: &'static str,
        /// The unrecognised value.
        value: String,
    },

    /// A factory registry has nothing registered for an action.
    #[error("no factory registered for action '{action}'")]
    MissingFactory {
        /// The requested action.
        action: String,
    },

    /// A dependency was used before it was injected.
    #[error("dependency '{dependency}' has not been injected")]
    MissingDependency {
        /// Name of the missing dependency.
        dependency: &'static str,
    },

    /// A dish ran out of portions.
    #[error("not enough ingredients for {customer}'s order of {dish}")]
    SoldOut {
        /// The dish that was ordered.
        dish: String,
        /// Who ordered it.
        customer: String,
    },

    /// A journal index does not exist.
    #[error("journal entry {index} is out of range (journal has {len} entries)")]
    EntryOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of entries in the journal.
        len: usize,
    },

    // === Configuration Errors ===
    /// A config file named explicitly does not exist.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// The path that was given.
        path: PathBuf,
    },

    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system or console operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for patternbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an unsupported-option error.
    #[must_use]
    pub fn unsupported(what: &'static str, value: impl Into<String>) -> Self {
        Self::UnsupportedOption {
            what,
            value: value.into(),
        }
    }

    /// Create an unknown demo error.
    #[must_use]
    pub fn unknown_demo(name: impl Into<String>) -> Self {
        Self::UnknownDemo { name: name.into() }
    }

    /// Check if this error is an input validation failure.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::InvalidName { .. } | Self::InvalidEmail { .. })
    }
}
