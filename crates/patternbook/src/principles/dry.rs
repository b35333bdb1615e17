//! Don't Repeat Yourself: every piece of knowledge gets one authoritative
//! home. Here the knowledge is "has a name and displays as it".
//!
//! [`repeated`] spells that knowledge out twice; [`NamedEntity`] keeps it once.

use std::fmt;

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::Result;

/// The repetitive version: every type restates the name and its formatting.
pub mod repeated {
    use std::fmt;

    /// A product with its own copy of the naming logic.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Product {
        /// Name.
        pub name: String,
    }

    impl fmt::Display for Product {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.name)
        }
    }

    /// A customer with a second copy of the same naming logic.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Customer {
        /// Name.
        pub name: String,
    }

    impl fmt::Display for Customer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.name)
        }
    }
}

/// A name, displayed as itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedEntity {
    name: String,
}

impl NamedEntity {
    /// Create an entity called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NamedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A product; its naming comes from [`NamedEntity`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    /// Name.
    pub entity: NamedEntity,
    /// Unit price.
    pub price: f64,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entity.fmt(f)
    }
}

/// A customer; its naming comes from [`NamedEntity`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    /// Name.
    pub entity: NamedEntity,
    /// Contact address.
    pub email: String,
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entity.fmt(f)
    }
}

/// Prints a product and a customer through the shared naming.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryDemo;

impl Demo for DryDemo {
    fn name(&self) -> &'static str {
        "dry"
    }

    fn title(&self) -> &'static str {
        "Don't Repeat Yourself"
    }

    fn category(&self) -> Category {
        Category::Principle
    }

    fn summary(&self) -> &'static str {
        "Keep the name field and its formatting in one shared type"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let out = ctx.out();

        let product = repeated::Product {
            name: "Espresso Machine".to_string(),
        };
        let customer = repeated::Customer {
            name: "Ada Lovelace".to_string(),
        };
        writeln!(out, "Before: each type formats its own name")?;
        writeln!(out, " Product: {product}")?;
        writeln!(out, " Customer: {customer}")?;

        let product = Product {
            entity: NamedEntity::new("Espresso Machine"),
            price: 249.0,
        };
        let customer = Customer {
            entity: NamedEntity::new("Ada Lovelace"),
            email: "ada@example.com".to_string(),
        };
        writeln!(out, "After: both delegate to NamedEntity")?;
        writeln!(out, " Product: {product}")?;
        writeln!(out, " Customer: {customer}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_name() {
        let entity = NamedEntity::new("Widget");
        assert_eq!(entity.to_string(), "Widget");
        assert_eq!(entity.name(), "Widget");
    }

    #[test]
    fn test_product_and_customer_share_formatting() {
        let product = Product {
            entity: NamedEntity::new("Same"),
            price: 1.0,
        };
        let customer = Customer {
            entity: NamedEntity::new("Same"),
            email: String::new(),
        };
        assert_eq!(product.to_string(), customer.to_string());
    }

    #[test]
    fn test_repeated_types_format_like_named_entity() {
        let product = repeated::Product {
            name: "Kettle".to_string(),
        };
        let customer = repeated::Customer {
            name: "Kettle".to_string(),
        };
        let expected = NamedEntity::new("Kettle").to_string();
        assert_eq!(product.to_string(), expected);
        assert_eq!(customer.to_string(), expected);
    }

    #[test]
    fn test_demo_output() {
        let config = crate::config::Config::default();
        let mut buf = Vec::new();
        let mut ctx = DemoContext::new(&mut buf, &config);
        DryDemo.run(&mut ctx).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Before: each type formats its own name\n \
             Product: Espresso Machine\n \
             Customer: Ada Lovelace\n\
             After: both delegate to NamedEntity\n \
             Product: Espresso Machine\n \
             Customer: Ada Lovelace\n"
        );
    }
}
