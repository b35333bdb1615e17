//! Factory Method with a registry: one creator per [`Action`], looked up at
//! run time, so callers only ever see the [`AirConditioner`] trait.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::{Error, Result};

/// Something that can condition a room.
pub trait AirConditioner: fmt::Debug {
    /// Describe what the unit does.
    fn operate(&self) -> String;
}

/// Cools the room down to a temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooling {
    temperature: f64,
}

/// Warms the room up to a temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Warming {
    temperature: f64,
}

impl Cooling {
    /// Create a cooling unit targeting `temperature` degrees.
    #[must_use]
    pub fn new(temperature: f64) -> Self {
        Self { temperature }
    }
}

impl Warming {
    /// Create a warming unit targeting `temperature` degrees.
    #[must_use]
    pub fn new(temperature: f64) -> Self {
        Self { temperature }
    }
}

impl AirConditioner for Cooling {
    fn operate(&self) -> String {
        format!(
            "Cooling the room to the required temperature of {} degrees",
            self.temperature
        )
    }
}

impl AirConditioner for Warming {
    fn operate(&self) -> String {
        format!(
            "Warming the room to the required temperature of {} degrees.",
            self.temperature
        )
    }
}

/// A creator for one kind of air conditioner.
pub trait AirConditionerFactory: fmt::Debug + Send + Sync {
    /// Create a unit targeting `temperature` degrees.
    fn create(&self, temperature: f64) -> Box<dyn AirConditioner>;
}

/// Creates [`Cooling`] units.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoolingFactory;

/// Creates [`Warming`] units.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarmingFactory;

impl AirConditionerFactory for CoolingFactory {
    fn create(&self, temperature: f64) -> Box<dyn AirConditioner> {
        Box::new(Cooling::new(temperature))
    }
}

impl AirConditionerFactory for WarmingFactory {
    fn create(&self, temperature: f64) -> Box<dyn AirConditioner> {
        Box::new(Warming::new(temperature))
    }
}

/// What the caller wants the room to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Make it colder.
    Cooling,
    /// Make it warmer.
    Warming,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 2] = [Action::Cooling, Action::Warming];

    /// The factory that serves this action.
    #[must_use]
    pub fn factory(self) -> Box<dyn AirConditionerFactory> {
        match self {
            Self::Cooling => Box::new(CoolingFactory),
            Self::Warming => Box::new(WarmingFactory),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cooling => write!(f, "cooling"),
            Self::Warming => write!(f, "warming"),
        }
    }
}

/// Maps each [`Action`] to the factory that serves it.
#[derive(Debug, Default)]
pub struct FactoryRegistry {
    factories: HashMap<Action, Box<dyn AirConditionerFactory>>,
}

impl FactoryRegistry {
    /// A registry wired by hand with both factories.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Action::Cooling, Box::new(CoolingFactory));
        registry.register(Action::Warming, Box::new(WarmingFactory));
        registry
    }

    /// A registry with nothing in it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry built by walking every [`Action`] and asking it for its
    /// factory, so a new action only needs a new arm in [`Action::factory`].
    #[must_use]
    pub fn discover() -> Self {
        let mut registry = Self::empty();
        for action in Action::ALL {
            registry.register(action, action.factory());
        }
        registry
    }

    /// Fluent entry point, equivalent to [`FactoryRegistry::new`].
    #[must_use]
    pub fn initialize_factories() -> Self {
        Self::new()
    }

    /// Register (or replace) the factory for an action.
    pub fn register(&mut self, action: Action, factory: Box<dyn AirConditionerFactory>) {
        debug!(%action, ?factory, "Registering air conditioner factory");
        self.factories.insert(action, factory);
    }

    /// Number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if no factories are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Create a unit for `action` targeting `temperature` degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFactory`] if nothing serves `action`.
    pub fn execute_creation(
        &self,
        action: Action,
        temperature: f64,
    ) -> Result<Box<dyn AirConditioner>> {
        let factory = self
            .factories
            .get(&action)
            .ok_or_else(|| Error::MissingFactory {
                action: action.to_string(),
            })?;
        Ok(factory.create(temperature))
    }
}

/// Creates cooling and warming units through the registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct AirConditionerDemo;

impl Demo for AirConditionerDemo {
    fn name(&self) -> &'static str {
        "air-conditioner"
    }

    fn title(&self) -> &'static str {
        "Factory Method (registry)"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Pick an air conditioner factory by action from a registry"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let out = ctx.out();

        let cooling = FactoryRegistry::new().execute_creation(Action::Cooling, 22.5)?;
        writeln!(out, "{}", cooling.operate())?;

        let warming = FactoryRegistry::discover().execute_creation(Action::Warming, 28.0)?;
        writeln!(out, "{}", warming.operate())?;

        let line = FactoryRegistry::initialize_factories()
            .execute_creation(Action::Cooling, 23.0)?
            .operate();
        writeln!(out, "{line}")?;
        Ok(())
    }
}
