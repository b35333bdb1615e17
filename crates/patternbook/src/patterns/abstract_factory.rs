//! Abstract Factory: one interface for creating a whole family of related
//! products, with each concrete factory deciding which family you get.

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::{Error, Result};

/// A sandwich from some cuisine.
pub trait Sandwich: fmt::Debug {
    /// Name of the sandwich.
    fn name(&self) -> &'static str;
}

/// A dessert from some cuisine.
pub trait Dessert: fmt::Debug {
    /// Name of the dessert.
    fn name(&self) -> &'static str;
}

/// Creates the matching sandwich and dessert of one cuisine.
pub trait RecipeFactory: fmt::Debug {
    /// Create this cuisine's sandwich.
    fn create_sandwich(&self) -> Box<dyn Sandwich>;

    /// Create this cuisine's dessert.
    fn create_dessert(&self) -> Box<dyn Dessert>;
}

/// Bacon, lettuce and tomato.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blt;

/// Grilled cheese.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrilledCheese;

/// Crème brûlée.
#[derive(Debug, Clone, Copy, Default)]
pub struct CremeBrulee;

/// Ice cream sundae.
#[derive(Debug, Clone, Copy, Default)]
pub struct IceCreamSundae;

impl Sandwich for Blt {
    fn name(&self) -> &'static str {
        "BLT"
    }
}

impl Sandwich for GrilledCheese {
    fn name(&self) -> &'static str {
        "GrilledCheese"
    }
}

impl Dessert for CremeBrulee {
    fn name(&self) -> &'static str {
        "CremeBrulee"
    }
}

impl Dessert for IceCreamSundae {
    fn name(&self) -> &'static str {
        "IceCreamSundae"
    }
}

/// Grown-up menu: BLT and crème brûlée.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdultCuisineFactory;

/// Kids' menu: grilled cheese and a sundae.
#[derive(Debug, Clone, Copy, Default)]
pub struct KidCuisineFactory;

impl RecipeFactory for AdultCuisineFactory {
    fn create_sandwich(&self) -> Box<dyn Sandwich> {
        Box::new(Blt)
    }

    fn create_dessert(&self) -> Box<dyn Dessert> {
        Box::new(CremeBrulee)
    }
}

impl RecipeFactory for KidCuisineFactory {
    fn create_sandwich(&self) -> Box<dyn Sandwich> {
        Box::new(GrilledCheese)
    }

    fn create_dessert(&self) -> Box<dyn Dessert> {
        Box::new(IceCreamSundae)
    }
}

/// Which menu to cook from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cuisine {
    /// Code `A`.
    Adult,
    /// Code `C`.
    Kid,
}

impl Cuisine {
    /// The factory producing this cuisine's family of dishes.
    #[must_use]
    pub fn factory(self) -> Box<dyn RecipeFactory> {
        match self {
            Self::Adult => Box::new(AdultCuisineFactory),
            Self::Kid => Box::new(KidCuisineFactory),
        }
    }
}

impl TryFrom<char> for Cuisine {
    type Error = Error;

    fn try_from(code: char) -> Result<Self> {
        match code {
            'A' => Ok(Self::Adult),
            'C' => Ok(Self::Kid),
            other => Err(Error::unsupported("cuisine code", other.to_string())),
        }
    }
}

/// Cook one meal from whichever factory the code selects and print it.
///
/// # Errors
///
/// Returns an error for an unknown code or if writing fails.
pub fn serve(out: &mut dyn Write, code: char) -> Result<()> {
    let factory = Cuisine::try_from(code)?.factory();
    debug!(code = %code, factory = ?factory, "Selected recipe factory");

    let sandwich = factory.create_sandwich();
    let dessert = factory.create_dessert();

    writeln!(out)?;
    writeln!(out, "Sandwich: {}", sandwich.name())?;
    writeln!(out, "Dessert: {}", dessert.name())?;
    Ok(())
}

/// Runs the adult and kids' menus through the same client code.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbstractFactoryDemo;

impl Demo for AbstractFactoryDemo {
    fn name(&self) -> &'static str {
        "abstract-factory"
    }

    fn title(&self) -> &'static str {
        "Abstract Factory"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Create families of related dishes without naming their concrete types"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let codes = ctx.config().demos.cuisines.clone();
        for code in codes {
            serve(ctx.out(), code)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serve_to_string(code: char) -> Result<String> {
        let mut buf = Vec::new();
        serve(&mut buf, code)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_adult_factory_family() {
        let factory = AdultCuisineFactory;
        assert_eq!(factory.create_sandwich().name(), "BLT");
        assert_eq!(factory.create_dessert().name(), "CremeBrulee");
    }

    #[test]
    fn test_kid_factory_family() {
        let factory = KidCuisineFactory;
        assert_eq!(factory.create_sandwich().name(), "GrilledCheese");
        assert_eq!(factory.create_dessert().name(), "IceCreamSundae");
    }

    #[test]
    fn test_cuisine_from_code() {
        assert_eq!(Cuisine::try_from('A').unwrap(), Cuisine::Adult);
        assert_eq!(Cuisine::try_from('C').unwrap(), Cuisine::Kid);
    }

    #[test]
    fn test_cuisine_rejects_unknown_code() {
        let err = Cuisine::try_from('a').unwrap_err();
        assert!(matches!(err, Error::UnsupportedOption { .. }));
    }

    #[test]
    fn test_serve_output() {
        assert_eq!(
            serve_to_string('A').unwrap(),
            "\nSandwich: BLT\nDessert: CremeBrulee\n"
        );
        assert_eq!(
            serve_to_string('C').unwrap(),
            "\nSandwich: GrilledCheese\nDessert: IceCreamSundae\n"
        );
    }

    #[test]
    fn test_serve_unknown_code_writes_nothing() {
        let mut buf = Vec::new();
        assert!(serve(&mut buf, 'X').is_err());
        assert!(buf.is_empty());
    }
}
