//! Interface Segregation: no type should be forced to implement methods it
//! has no use for.
//!
//! [`fat::Garment`] bundles pants measurements into every product, so a cap
//! has to invent an inseam. The split traits let [`Jeans`] and
//! [`BaseballCap`] implement only what applies, and helpers ask only for the
//! trait they need.

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::Result;

/// The one-size-fits-all version.
pub mod fat {
    /// Everything any product might have.
    pub trait Garment {
        /// Product id.
        fn id(&self) -> u32;
        /// Shipping weight.
        fn weight(&self) -> f64;
        /// Units in stock.
        fn stock(&self) -> u32;
        /// Inseam length.
        fn inseam(&self) -> u32;
        /// Waist size.
        fn waist_size(&self) -> u32;
    }

    /// A cap that has to pretend to have pants measurements.
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct BaseballCap {
        /// Product id.
        pub id: u32,
        /// Shipping weight.
        pub weight: f64,
        /// Units in stock.
        pub stock: u32,
        /// Hat size.
        pub hat_size: u32,
    }

    impl Garment for BaseballCap {
        fn id(&self) -> u32 {
            self.id
        }

        fn weight(&self) -> f64 {
            self.weight
        }

        fn stock(&self) -> u32 {
            self.stock
        }

        // Meaningless for a cap.
        fn inseam(&self) -> u32 {
            0
        }

        fn waist_size(&self) -> u32 {
            0
        }
    }
}

/// What every product has.
pub trait Product {
    /// Product id.
    fn id(&self) -> u32;
    /// Shipping weight.
    fn weight(&self) -> f64;
    /// Units in stock.
    fn stock(&self) -> u32;
}

/// Pants measurements.
pub trait Pants {
    /// Inseam length.
    fn inseam(&self) -> u32;
    /// Waist size.
    fn waist_size(&self) -> u32;
}

/// Hat measurements.
pub trait Hat {
    /// Hat size.
    fn hat_size(&self) -> u32;
}

/// Jeans: a product with pants measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Jeans {
    /// Product id.
    pub id: u32,
    /// Shipping weight.
    pub weight: f64,
    /// Units in stock.
    pub stock: u32,
    /// Inseam length.
    pub inseam: u32,
    /// Waist size.
    pub waist_size: u32,
}

impl Product for Jeans {
    fn id(&self) -> u32 {
        self.id
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn stock(&self) -> u32 {
        self.stock
    }
}

impl Pants for Jeans {
    fn inseam(&self) -> u32 {
        self.inseam
    }

    fn waist_size(&self) -> u32 {
        self.waist_size
    }
}

/// A baseball cap: a product with a hat size and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BaseballCap {
    /// Product id.
    pub id: u32,
    /// Shipping weight.
    pub weight: f64,
    /// Units in stock.
    pub stock: u32,
    /// Hat size.
    pub hat_size: u32,
}

impl Product for BaseballCap {
    fn id(&self) -> u32 {
        self.id
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn stock(&self) -> u32 {
        self.stock
    }
}

impl Hat for BaseballCap {
    fn hat_size(&self) -> u32 {
        self.hat_size
    }
}

/// Units in stock across any mix of products.
#[must_use]
pub fn total_stock(products: &[&dyn Product]) -> u64 {
    products.iter().map(|p| u64::from(p.stock())).sum()
}

/// Whether `pants` match the given measurements exactly.
#[must_use]
pub fn pants_fit(pants: &dyn Pants, inseam: u32, waist_size: u32) -> bool {
    pants.inseam() == inseam && pants.waist_size() == waist_size
}

/// Stocks jeans and caps through the narrow traits.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceSegregationDemo;

impl Demo for InterfaceSegregationDemo {
    fn name(&self) -> &'static str {
        "interface-segregation"
    }

    fn title(&self) -> &'static str {
        "Interface Segregation Principle"
    }

    fn category(&self) -> Category {
        Category::Principle
    }

    fn summary(&self) -> &'static str {
        "Split a fat product trait so caps no longer carry an inseam"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        use fat::Garment;

        let out = ctx.out();

        let old_cap = fat::BaseballCap {
            id: 7,
            weight: 0.2,
            stock: 12,
            hat_size: 7,
        };
        writeln!(
            out,
            "Before: cap {} reports inseam {} and waist {}",
            old_cap.id(),
            old_cap.inseam(),
            old_cap.waist_size()
        )?;

        let jeans = Jeans {
            id: 1,
            weight: 0.9,
            stock: 30,
            inseam: 32,
            waist_size: 34,
        };
        let cap = BaseballCap {
            id: 2,
            weight: 0.2,
            stock: 12,
            hat_size: 7,
        };

        writeln!(out, "After: cap {} has hat size {}", cap.id(), cap.hat_size())?;
        writeln!(
            out,
            "Jeans {} fit 32x34: {}",
            jeans.id(),
            pants_fit(&jeans, 32, 34)
        )?;
        writeln!(out, "Total stock: {}", total_stock(&[&jeans, &cap]))?;
        Ok(())
    }
}
