//! Decorator: give a single dish new responsibilities (tracking how many
//! portions are left and who ordered them) without changing the dish types.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::{Error, Result};

/// A dish on the menu.
pub trait RestaurantDish {
    /// Name the dish is listed under.
    fn label(&self) -> &str;

    /// Print the dish.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn display(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A salad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreshSalad {
    greens: String,
    cheese: String,
    dressing: String,
}

impl FreshSalad {
    /// Create a salad.
    #[must_use]
    pub fn new(
        greens: impl Into<String>,
        cheese: impl Into<String>,
        dressing: impl Into<String>,
    ) -> Self {
        Self {
            greens: greens.into(),
            cheese: cheese.into(),
            dressing: dressing.into(),
        }
    }
}

impl RestaurantDish for FreshSalad {
    fn label(&self) -> &'static str {
        "Fresh Salad"
    }

    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Fresh Salad:")?;
        writeln!(out, " Greens: {}", self.greens)?;
        writeln!(out, " Cheese: {}", self.cheese)?;
        writeln!(out, " Dressing: {}", self.dressing)
    }
}

/// A pasta dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pasta {
    pasta_type: String,
    sauce: String,
}

impl Pasta {
    /// Create a pasta dish.
    #[must_use]
    pub fn new(pasta_type: impl Into<String>, sauce: impl Into<String>) -> Self {
        Self {
            pasta_type: pasta_type.into(),
            sauce: sauce.into(),
        }
    }
}

impl RestaurantDish for Pasta {
    fn label(&self) -> &'static str {
        "Classic Pasta"
    }

    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Classic Pasta:")?;
        writeln!(out, " Pasta: {}", self.pasta_type)?;
        writeln!(out, " Sauce: {}", self.sauce)
    }
}

impl<D: RestaurantDish + ?Sized> RestaurantDish for Box<D> {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).display(out)
    }
}

/// Decorates a dish with a limited number of portions and a list of the
/// customers who ordered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Available<D> {
    dish: D,
    num_available: usize,
    customers: Vec<String>,
}

impl<D: RestaurantDish> Available<D> {
    /// Make `num_available` portions of `dish` orderable.
    pub fn new(dish: D, num_available: usize) -> Self {
        Self {
            dish,
            num_available,
            customers: Vec::new(),
        }
    }

    /// Portions left.
    #[must_use]
    pub fn num_available(&self) -> usize {
        self.num_available
    }

    /// Customers who got a portion, in order.
    #[must_use]
    pub fn customers(&self) -> &[String] {
        &self.customers
    }

    /// The decorated dish.
    #[must_use]
    pub fn inner(&self) -> &D {
        &self.dish
    }

    /// Take one portion for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SoldOut`] when no portions are left; nothing changes.
    pub fn order_item(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.num_available == 0 {
            warn!(dish = self.dish.label(), customer = %name, "Dish sold out");
            return Err(Error::SoldOut {
                dish: self.dish.label().to_string(),
                customer: name,
            });
        }
        debug!(dish = self.dish.label(), customer = %name, "Order taken");
        self.customers.push(name);
        self.num_available -= 1;
        Ok(())
    }
}

impl<D: RestaurantDish> RestaurantDish for Available<D> {
    fn label(&self) -> &str {
        self.dish.label()
    }

    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        self.dish.display(out)?;
        for customer in &self.customers {
            writeln!(out, "Ordered by {customer}")?;
        }
        Ok(())
    }
}

/// Take an order, printing a notice instead of failing when sold out.
fn take_order<D: RestaurantDish>(
    out: &mut dyn Write,
    dish: &mut Available<D>,
    name: &str,
) -> Result<()> {
    match dish.order_item(name) {
        Ok(()) => Ok(()),
        Err(Error::SoldOut { customer, .. }) => {
            writeln!(out)?;
            writeln!(out, "Not enough ingredients for {customer}'s order!")?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Runs the caesar salad and fettuccine alfredo scenario.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoratorDemo;

impl Demo for DecoratorDemo {
    fn name(&self) -> &'static str {
        "decorator"
    }

    fn title(&self) -> &'static str {
        "Decorator"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Add portion tracking to individual dishes without changing their types"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let out = ctx.out();

        // Step 1: the dishes, and how many of each we can make.
        let caesar_salad = FreshSalad::new(
            "Crisp romaine lettuce",
            "Freshly-grated Parmesan cheese",
            "House-made Caesar dressing",
        );
        caesar_salad.display(out)?;

        let fettuccine_alfredo = Pasta::new("Fresh-made daily pasta", "Creamly garlic alfredo sauce");
        fettuccine_alfredo.display(out)?;

        writeln!(out)?;
        writeln!(out, "Making these dishes available.")?;

        // Step 2: decorate them.
        let mut caesar_available = Available::new(caesar_salad, 3);
        let mut alfredo_available = Available::new(fettuccine_alfredo, 4);

        // Step 3: order. Dennis is one too many.
        for name in ["John", "Sally", "Manush"] {
            take_order(out, &mut caesar_available, name)?;
        }
        for name in ["Sally", "Francis", "Venkat", "Diana", "Dennis"] {
            take_order(out, &mut alfredo_available, name)?;
        }

        caesar_available.display(out)?;
        alfredo_available.display(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pasta() -> Pasta {
        Pasta::new("Penne", "Arrabbiata")
    }

    fn display_to_string(dish: &dyn RestaurantDish) -> String {
        let mut buf = Vec::new();
        dish.display(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_order_decrements_portions() {
        let mut dish = Available::new(pasta(), 2);
        dish.order_item("Ann").unwrap();
        assert_eq!(dish.num_available(), 1);
        assert_eq!(dish.customers(), ["Ann".to_string()]);
    }

    #[test]
    fn test_order_when_sold_out() {
        crate::logging::init_test_logging();
        let mut dish = Available::new(pasta(), 1);
        dish.order_item("Ann").unwrap();

        let err = dish.order_item("Bob").unwrap_err();
        assert!(matches!(err, Error::SoldOut { ref customer, .. } if customer == "Bob"));
        assert_eq!(dish.num_available(), 0);
        assert_eq!(dish.customers().len(), 1);
    }

    #[test]
    fn test_zero_portions_rejects_first_order() {
        let mut dish = Available::new(pasta(), 0);
        assert!(dish.order_item("Ann").is_err());
        assert!(dish.customers().is_empty());
    }

    #[test]
    fn test_decorated_display_appends_customers() {
        let mut dish = Available::new(pasta(), 2);
        dish.order_item("Ann").unwrap();
        dish.order_item("Bob").unwrap();

        let plain = display_to_string(dish.inner());
        let decorated = display_to_string(&dish);
        assert_eq!(decorated, format!("{plain}Ordered by Ann\nOrdered by Bob\n"));
    }

    #[test]
    fn test_decorators_stack() {
        let inner = Available::new(pasta(), 5);
        let mut outer = Available::new(inner, 1);
        outer.order_item("Ann").unwrap();
        assert!(outer.order_item("Bob").is_err());
        assert_eq!(outer.label(), "Classic Pasta");
    }

    #[test]
    fn test_dish_labels_outlive_the_dish() {
        let labels: [&'static str; 2] = {
            let salad = FreshSalad::new("Kale", "Feta", "Lemon");
            let pasta = pasta();
            [salad.label(), pasta.label()]
        };
        assert_eq!(labels, ["Fresh Salad", "Classic Pasta"]);
    }

    #[test]
    fn test_boxed_dish_can_be_decorated() {
        let dish: Box<dyn RestaurantDish> = Box::new(FreshSalad::new("Kale", "Feta", "Lemon"));
        let mut available = Available::new(dish, 1);
        available.order_item("Ann").unwrap();
        assert!(display_to_string(&available).contains("Greens: Kale"));
    }

    #[test]
    fn test_demo_output() {
        let config = crate::config::Config::default();
        let mut buf = Vec::new();
        let mut ctx = DemoContext::new(&mut buf, &config);
        DecoratorDemo.run(&mut ctx).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\nNot enough ingredients for Dennis's order!\n"));
        assert_eq!(output.matches("Ordered by").count(), 7);
        assert!(output.contains("Ordered by Diana"));
        assert!(!output.contains("Ordered by Dennis"));
        assert!(output.starts_with("\nFresh Salad:\n Greens: Crisp romaine lettuce\n"));
    }
}
