//! Factory Method: the sandwich knows it needs ingredients, but each recipe
//! decides which ones by implementing the factory method.

use std::fmt;
use std::io::Write;

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::Result;

/// Something that goes between (or is) the bread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    /// A slice of bread.
    Bread,
    /// Sliced turkey.
    Turkey,
    /// Lettuce.
    Lettuce,
    /// Mayonnaise.
    Mayonnaise,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bread => write!(f, "Bread"),
            Self::Turkey => write!(f, "Turkey"),
            Self::Lettuce => write!(f, "Lettuce"),
            Self::Mayonnaise => write!(f, "Mayonnaise"),
        }
    }
}

/// A recipe supplies the factory method.
pub trait SandwichRecipe {
    /// Name of the sandwich this recipe makes.
    fn name(&self) -> &'static str;

    /// The factory method: the ingredients, in stacking order.
    fn create_ingredients(&self) -> Vec<Ingredient>;
}

/// Turkey on bread with mayo and lettuce.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurkeySandwich;

/// Lettuce and mayo, no meat.
#[derive(Debug, Clone, Copy, Default)]
pub struct Veggie;

impl SandwichRecipe for TurkeySandwich {
    fn name(&self) -> &'static str {
        "TurkeySandwich"
    }

    fn create_ingredients(&self) -> Vec<Ingredient> {
        vec![
            Ingredient::Bread,
            Ingredient::Mayonnaise,
            Ingredient::Lettuce,
            Ingredient::Turkey,
            Ingredient::Turkey,
            Ingredient::Bread,
        ]
    }
}

impl SandwichRecipe for Veggie {
    fn name(&self) -> &'static str {
        "Veggie"
    }

    fn create_ingredients(&self) -> Vec<Ingredient> {
        vec![
            Ingredient::Bread,
            Ingredient::Lettuce,
            Ingredient::Mayonnaise,
            Ingredient::Bread,
        ]
    }
}

/// A built sandwich.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sandwich {
    name: &'static str,
    ingredients: Vec<Ingredient>,
}

impl Sandwich {
    /// Build a sandwich, calling the recipe's factory method exactly once.
    #[must_use]
    pub fn from_recipe(recipe: &dyn SandwichRecipe) -> Self {
        Self {
            name: recipe.name(),
            ingredients: recipe.create_ingredients(),
        }
    }

    /// Name of the recipe it was built from.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The ingredients in stacking order.
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Print the sandwich and its ingredients.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn describe(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Sandwich: {} ", self.name)?;
        for ingredient in &self.ingredients {
            writeln!(out, "Ingredient: {ingredient}")?;
        }
        Ok(())
    }
}

/// Builds a turkey and a veggie sandwich through the same constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryMethodDemo;

impl Demo for FactoryMethodDemo {
    fn name(&self) -> &'static str {
        "factory-method"
    }

    fn title(&self) -> &'static str {
        "Factory Method"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Let each sandwich recipe decide which ingredients get created"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let recipes: [&dyn SandwichRecipe; 2] = [&TurkeySandwich, &Veggie];
        let sandwiches: Vec<Sandwich> = recipes.into_iter().map(Sandwich::from_recipe).collect();

        for sandwich in &sandwiches {
            sandwich.describe(ctx.out())?;
        }
        Ok(())
    }
}
