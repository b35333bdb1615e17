//! Template Method: [`Bread::make`] fixes the order of the steps; each bread
//! fills in the steps themselves.

use std::io::{self, Write};

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::Result;

/// A loaf that knows how to make itself.
pub trait Bread {
    /// Name used when slicing.
    fn name(&self) -> &'static str;

    /// Gather and mix the ingredients.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn mix_ingredients(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Bake the loaf.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn bake(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Slice the loaf. Most breads slice the same way.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn slice(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Slicing the {} bread!", self.name())
    }

    /// The template method: mix, bake, slice.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn make(&self, out: &mut dyn Write) -> io::Result<()> {
        self.mix_ingredients(out)?;
        self.bake(out)?;
        self.slice(out)
    }
}

/// Twelve-grain loaf.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwelveGrain;

/// Sourdough loaf.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sourdough;

/// Whole wheat loaf.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeWheat;

impl Bread for TwelveGrain {
    fn name(&self) -> &'static str {
        "TwelveGrain"
    }

    fn mix_ingredients(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Gathering Ingredients for 12-Grain Bread.")
    }

    fn bake(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Baking the 12-Grain Bread. (25 minutes)")
    }
}

impl Bread for Sourdough {
    fn name(&self) -> &'static str {
        "Sourdough"
    }

    fn mix_ingredients(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Gathering Ingredients for Sourdough Bread.")
    }

    fn bake(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Baking the Sourdough Bread. (20 minutes)")
    }
}

impl Bread for WholeWheat {
    fn name(&self) -> &'static str {
        "WholeWheat"
    }

    fn mix_ingredients(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Gathering Ingredients for Whole Wheat Bread.")
    }

    fn bake(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Baking the Whole Wheat Bread. (15 minutes)")
    }
}

/// Bakes one loaf of each bread.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateMethodDemo;

impl Demo for TemplateMethodDemo {
    fn name(&self) -> &'static str {
        "template-method"
    }

    fn title(&self) -> &'static str {
        "Template Method"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Fix the order of the bread-making steps, let each bread fill them in"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let breads: [&dyn Bread; 3] = [&Sourdough, &TwelveGrain, &WholeWheat];
        for bread in breads {
            bread.make(ctx.out())?;
        }
        Ok(())
    }
}
