//! Singleton: exactly one instance, created on first use, shared globally.

use std::sync::OnceLock;

use tracing::debug;

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::Result;

/// The kitchen's order bell. There is only ever one.
#[derive(Debug)]
pub struct TheBell {
    // Private so the only way to get a bell is `instance()`.
    _private: (),
}

impl TheBell {
    /// The one bell, created on the first call from any thread.
    pub fn instance() -> &'static TheBell {
        static BELL: OnceLock<TheBell> = OnceLock::new();
        BELL.get_or_init(|| {
            debug!("Creating the bell");
            TheBell { _private: () }
        })
    }

    /// Ring it.
    #[must_use]
    pub fn ring(&self) -> &'static str {
        "Ding! Order up!"
    }
}

/// Shows that two lookups hand back the same bell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingletonDemo;

impl Demo for SingletonDemo {
    fn name(&self) -> &'static str {
        "singleton"
    }

    fn title(&self) -> &'static str {
        "Singleton"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Share one lazily created, thread-safe instance"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let out = ctx.out();
        let bell = TheBell::instance();
        let other_bell = TheBell::instance();

        writeln!(out, "{bell:p}")?;
        writeln!(out, "{other_bell:p}")?;
        writeln!(out, "Same instance: {}", std::ptr::eq(bell, other_bell))?;
        writeln!(out, "{}", bell.ring())?;
        Ok(())
    }
}
