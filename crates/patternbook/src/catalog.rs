//! The catalog of runnable demonstrations.
//!
//! Every pattern and principle module contributes one [`Demo`]. The
//! [`Catalog`] owns them, resolves names typed on the command line and runs
//! them against a [`DemoContext`], which carries the output writer and the
//! loaded configuration.

use std::fmt;
use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::injection::DependencyInjectionDemo;
use crate::patterns::{
    AbstractFactoryDemo, AirConditionerDemo, CreditCardDemo, DecoratorDemo, FactoryMethodDemo,
    SingletonDemo, TemplateMethodDemo,
};
use crate::principles::{
    DependencyInversionDemo, DryDemo, InterfaceSegregationDemo, LiskovSubstitutionDemo,
    OpenClosedDemo, SingleResponsibilityDemo,
};

/// The family a demonstration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Object creation patterns.
    Creational,
    /// Object composition patterns.
    Structural,
    /// Patterns about how objects share work.
    Behavioral,
    /// SOLID and related design principles.
    Principle,
    /// Dependency-injection styles.
    Injection,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creational => write!(f, "creational"),
            Self::Structural => write!(f, "structural"),
            Self::Behavioral => write!(f, "behavioral"),
            Self::Principle => write!(f, "principle"),
            Self::Injection => write!(f, "injection"),
        }
    }
}

/// Where a running demonstration writes, and the settings it may consult.
pub struct DemoContext<'a> {
    out: &'a mut dyn Write,
    config: &'a Config,
}

impl<'a> DemoContext<'a> {
    /// Create a context writing to `out`.
    pub fn new(out: &'a mut dyn Write, config: &'a Config) -> Self {
        Self { out, config }
    }

    /// The output writer.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        self.config
    }
}

impl fmt::Debug for DemoContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A self-contained, runnable demonstration.
pub trait Demo: Send + Sync {
    /// Name used on the command line, in kebab case.
    fn name(&self) -> &'static str;

    /// Human-readable title.
    fn title(&self) -> &'static str;

    /// The family this demonstration belongs to.
    fn category(&self) -> Category;

    /// One-line description of what the demonstration shows.
    fn summary(&self) -> &'static str;

    /// Run the demonstration, printing its output to the context.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails or the demonstration hits an
    /// error it does not handle itself.
    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()>;

    /// Serializable description of this demonstration.
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: self.name(),
            title: self.title(),
            category: self.category(),
            summary: self.summary(),
        }
    }
}

/// Serializable summary of a [`Demo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoInfo {
    /// Command-line name.
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Family.
    pub category: Category,
    /// One-line description.
    pub summary: &'static str,
}

/// Normalize a demo name as typed by a user: trimmed, lowercase, `_` as `-`.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}

/// Render a listing, a demo's info or the config as pretty JSON.
///
/// # Errors
///
/// Returns [`Error::Json`] if the value can't be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// An ordered collection of demonstrations.
#[derive(Default)]
pub struct Catalog {
    demos: Vec<Box<dyn Demo>>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding every built-in demonstration.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(Box::new(AbstractFactoryDemo));
        catalog.register(Box::new(FactoryMethodDemo));
        catalog.register(Box::new(AirConditionerDemo));
        catalog.register(Box::new(CreditCardDemo));
        catalog.register(Box::new(SingletonDemo));
        catalog.register(Box::new(DecoratorDemo));
        catalog.register(Box::new(TemplateMethodDemo));
        catalog.register(Box::new(SingleResponsibilityDemo));
        catalog.register(Box::new(OpenClosedDemo));
        catalog.register(Box::new(LiskovSubstitutionDemo));
        catalog.register(Box::new(InterfaceSegregationDemo));
        catalog.register(Box::new(DependencyInversionDemo));
        catalog.register(Box::new(DryDemo));
        catalog.register(Box::new(DependencyInjectionDemo));
        catalog
    }

    /// Add a demonstration. A demonstration with the same name is replaced.
    pub fn register(&mut self, demo: Box<dyn Demo>) {
        if let Some(slot) = self.demos.iter_mut().find(|d| d.name() == demo.name()) {
            debug!(demo = demo.name(), "Replacing registered demo");
            *slot = demo;
        } else {
            self.demos.push(demo);
        }
    }

    /// Number of registered demonstrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.demos.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    /// Iterate over the demonstrations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Demo> + '_ {
        self.demos.iter().map(|demo| &**demo)
    }

    /// Iterate over the demonstrations of one category.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &dyn Demo> + '_ {
        self.iter().filter(move |demo| demo.category() == category)
    }

    /// Names of all demonstrations in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(Demo::name).collect()
    }

    /// Find a demonstration by (normalized) name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&dyn Demo> {
        let wanted = normalize_name(name);
        self.iter().find(|demo| demo.name() == wanted)
    }

    /// Find a demonstration by name, failing if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDemo`] if no demonstration matches.
    pub fn get(&self, name: &str) -> Result<&dyn Demo> {
        self.find(name).ok_or_else(|| Error::unknown_demo(name))
    }

    /// Resolve several names, failing on the first unknown one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDemo`] for the first name that doesn't match.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&dyn Demo>> {
        names.iter().map(|name| self.get(name.as_ref())).collect()
    }

    /// Run the named demonstrations in the given order.
    ///
    /// All names are resolved before anything runs. Returns how many ran.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is unknown or a demonstration fails.
    pub fn run<S: AsRef<str>>(&self, names: &[S], ctx: &mut DemoContext<'_>) -> Result<usize> {
        let demos = self.resolve(names)?;
        Self::run_each(&demos, ctx)
    }

    /// Run every demonstration in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if a demonstration fails.
    pub fn run_all(&self, ctx: &mut DemoContext<'_>) -> Result<usize> {
        let demos: Vec<&dyn Demo> = self.iter().collect();
        Self::run_each(&demos, ctx)
    }

    /// Run every demonstration of one category.
    ///
    /// # Errors
    ///
    /// Returns an error if a demonstration fails.
    pub fn run_category(&self, category: Category, ctx: &mut DemoContext<'_>) -> Result<usize> {
        let demos: Vec<&dyn Demo> = self.by_category(category).collect();
        Self::run_each(&demos, ctx)
    }

    fn run_each(demos: &[&dyn Demo], ctx: &mut DemoContext<'_>) -> Result<usize> {
        for demo in demos {
            let output = ctx.config().output.clone();
            writeln!(ctx.out(), "{}", output.separator())?;
            if output.show_titles {
                writeln!(ctx.out(), "{} ({})", demo.title(), demo.category())?;
            }
            info!(demo = demo.name(), "Running demo");
            demo.run(ctx)?;
            ctx.out().flush()?;
        }
        Ok(demos.len())
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("demos", &self.names())
            .finish()
    }
}
