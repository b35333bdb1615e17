//! `patternbook` - Runnable demonstrations of design patterns and principles
//!
//! This library holds the creational, structural and behavioral patterns,
//! the SOLID principles with their before/after designs, and the
//! dependency-injection styles, each registered in a [`Catalog`] of
//! demonstrations that write to any [`std::io::Write`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod injection;
pub mod logging;
pub mod patterns;
pub mod principles;

pub use catalog::{to_json, Catalog, Category, Demo, DemoContext, DemoInfo};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
