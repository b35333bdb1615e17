//! Open/Closed: open for extension, closed for modification.
//!
//! Two before/after pairs. The area calculator in [`legacy`] has to be edited
//! for every new shape; [`CombinedAreaCalculator`] only knows about
//! [`Shape`]. The [`ProductFilter`] grows a method for every combination of
//! criteria; [`BetterFilter`] takes any [`Specification`], and new criteria
//! are new types.

use std::any::Any;
use std::f64::consts::PI;
use std::fmt;

use regex::Regex;

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::{Error, Result};

/// The closed-for-extension version: every shape is a case here.
pub mod legacy {
    use std::any::Any;
    use std::f64::consts::PI;

    /// A rectangle the calculator knows about.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Rectangle {
        /// Width.
        pub width: f64,
        /// Height.
        pub height: f64,
    }

    /// A circle, added later, which forced an edit to [`combined_area`].
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Circle {
        /// Radius.
        pub radius: f64,
    }

    /// Sum the areas of the shapes it recognises. Anything else counts as
    /// zero.
    #[must_use]
    pub fn combined_area(shapes: &[&dyn Any]) -> f64 {
        let mut area = 0.0;
        for shape in shapes {
            if let Some(rectangle) = shape.downcast_ref::<Rectangle>() {
                area += rectangle.width * rectangle.height;
            } else if let Some(circle) = shape.downcast_ref::<Circle>() {
                area += circle.radius * circle.radius * PI;
            }
        }
        area
    }
}

/// Anything with an area.
pub trait Shape: fmt::Debug {
    /// The area.
    fn area(&self) -> f64;
}

/// A rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Radius.
    pub radius: f64,
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }
}

/// A triangle, given base width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Height.
    pub height: f64,
    /// Base width.
    pub width: f64,
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        self.height * self.width * 0.5
    }
}

/// Sums areas without knowing any concrete shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinedAreaCalculator;

impl CombinedAreaCalculator {
    /// Total area of `shapes`.
    #[must_use]
    pub fn area(&self, shapes: &[Box<dyn Shape>]) -> f64 {
        shapes.iter().map(|shape| shape.area()).sum()
    }
}

/// Product colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

/// Product sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    /// Small.
    Small,
    /// Medium.
    Medium,
    /// Large.
    Large,
    /// Bigger than large.
    Yuge,
}

/// Something to filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Name.
    pub name: String,
    /// Color.
    pub color: Color,
    /// Size.
    pub size: Size,
}

impl Product {
    /// Create a product.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

/// Before: one method per combination of criteria.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter;

impl ProductFilter {
    /// Products of `color`.
    pub fn by_color<'a>(
        &self,
        products: &'a [Product],
        color: Color,
    ) -> impl Iterator<Item = &'a Product> {
        products.iter().filter(move |p| p.color == color)
    }

    /// Products of `size`.
    pub fn by_size<'a>(
        &self,
        products: &'a [Product],
        size: Size,
    ) -> impl Iterator<Item = &'a Product> {
        products.iter().filter(move |p| p.size == size)
    }

    /// Products of both `size` and `color`.
    pub fn by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> impl Iterator<Item = &'a Product> {
        products
            .iter()
            .filter(move |p| p.size == size && p.color == color)
    }
}

/// A predicate over items.
pub trait Specification<T> {
    /// Whether `item` meets the specification.
    fn is_satisfied(&self, item: &T) -> bool;
}

/// Combinators available on every specification.
pub trait SpecificationExt<T>: Specification<T> + Sized {
    /// Both this and `other` must hold.
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<Self, S> {
        AndSpecification::new(self, other)
    }
}

impl<T, S: Specification<T>> SpecificationExt<T> for S {}

/// Takes all items, returns the ones a specification accepts.
pub trait Filter<T> {
    /// Items satisfying `spec`, in their original order.
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}

/// After: the only filter needed, whatever the criteria.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
        items.iter().filter(|item| spec.is_satisfied(item)).collect()
    }
}

/// Matches products of one color.
#[derive(Debug, Clone, Copy)]
pub struct ColorSpecification(pub Color);

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.0
    }
}

/// Matches products of one size.
#[derive(Debug, Clone, Copy)]
pub struct SizeSpecification(pub Size);

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.0
    }
}

/// Matches products whose name matches a regular expression.
#[derive(Debug, Clone)]
pub struct NameSpecification {
    pattern: Regex,
}

impl NameSpecification {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOption`] if the pattern doesn't compile.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|_| Error::unsupported("name pattern", pattern))?;
        Ok(Self { pattern })
    }
}

impl Specification<Product> for NameSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        self.pattern.is_match(&item.name)
    }
}

/// Both specifications must hold.
#[derive(Debug, Clone)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    /// Combine two specifications.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for AndSpecification<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

/// Computes combined areas and filters the product list both ways.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenClosedDemo;

impl Demo for OpenClosedDemo {
    fn name(&self) -> &'static str {
        "open-closed"
    }

    fn title(&self) -> &'static str {
        "Open/Closed Principle"
    }

    fn category(&self) -> Category {
        Category::Principle
    }

    fn summary(&self) -> &'static str {
        "Add shapes and filter criteria as new types instead of new branches"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let out = ctx.out();

        let rectangle = legacy::Rectangle {
            width: 2.0,
            height: 3.0,
        };
        let circle = legacy::Circle { radius: 1.0 };
        let legacy_shapes: [&dyn Any; 2] = [&rectangle, &circle];
        let before = legacy::combined_area(&legacy_shapes);
        writeln!(out, "Combined area (downcasting): {before:.2}")?;

        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle {
                width: 2.0,
                height: 3.0,
            }),
            Box::new(Circle { radius: 1.0 }),
            Box::new(Triangle {
                height: 4.0,
                width: 3.0,
            }),
        ];
        let after = CombinedAreaCalculator.area(&shapes);
        writeln!(out, "Combined area (Shape trait): {after:.2}")?;
        writeln!(out)?;

        let products = sample_products();

        writeln!(out, "Green products:")?;
        for p in ProductFilter.by_color(&products, Color::Green) {
            writeln!(out, " - {} is green", p.name)?;
        }

        writeln!(out, "Large green products:")?;
        let large_green = ColorSpecification(Color::Green).and(SizeSpecification(Size::Large));
        for p in BetterFilter.filter(&products, &large_green) {
            writeln!(out, " - {} is large and green", p.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_calculator_sums_all_shapes() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle {
                width: 2.0,
                height: 3.0,
            }),
            Box::new(Triangle {
                height: 4.0,
                width: 3.0,
            }),
        ];
        assert!((CombinedAreaCalculator.area(&shapes) - 12.0).abs() < f64::EPSILON);
        assert!(CombinedAreaCalculator.area(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_shape_needs_no_calculator_change() {
        #[derive(Debug)]
        struct Square(f64);
        impl Shape for Square {
            fn area(&self) -> f64 {
                self.0 * self.0
            }
        }

        let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Square(3.0)), Box::new(Circle { radius: 1.0 })];
        assert!((CombinedAreaCalculator.area(&shapes) - (9.0 + PI)).abs() < 1e-12);
    }

    #[test]
    fn test_legacy_ignores_unknown_shapes() {
        let rect = legacy::Rectangle {
            width: 2.0,
            height: 5.0,
        };
        let triangle = Triangle {
            height: 1.0,
            width: 1.0,
        };
        let shapes: [&dyn Any; 2] = [&rect, &triangle];
        assert!((legacy::combined_area(&shapes) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_both_calculators_agree_on_known_shapes() {
        let rectangle = legacy::Rectangle {
            width: 1.5,
            height: 2.0,
        };
        let circle = legacy::Circle { radius: 2.0 };
        let legacy_shapes: [&dyn Any; 2] = [&rectangle, &circle];
        let before = legacy::combined_area(&legacy_shapes);
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle {
                width: 1.5,
                height: 2.0,
            }),
            Box::new(Circle { radius: 2.0 }),
        ];
        assert!((before - CombinedAreaCalculator.area(&shapes)).abs() < 1e-12);
    }

    #[test]
    fn test_legacy_filter() {
        let products = sample_products();
        let green: Vec<_> = ProductFilter.by_color(&products, Color::Green).collect();
        assert_eq!(names(&green), ["Apple", "Tree"]);

        let large: Vec<_> = ProductFilter.by_size(&products, Size::Large).collect();
        assert_eq!(names(&large), ["Tree", "House"]);

        let both: Vec<_> = ProductFilter
            .by_size_and_color(&products, Size::Large, Color::Green)
            .collect();
        assert_eq!(names(&both), ["Tree"]);
    }

    #[test]
    fn test_better_filter_matches_legacy() {
        let products = sample_products();
        for color in [Color::Red, Color::Green, Color::Blue] {
            let legacy: Vec<_> = ProductFilter.by_color(&products, color).collect();
            let better = BetterFilter.filter(&products, &ColorSpecification(color));
            assert_eq!(legacy, better);
        }
        for size in [Size::Small, Size::Medium, Size::Large, Size::Yuge] {
            let legacy: Vec<_> = ProductFilter.by_size(&products, size).collect();
            let better = BetterFilter.filter(&products, &SizeSpecification(size));
            assert_eq!(legacy, better);
        }
    }

    #[test]
    fn test_and_specification() {
        let products = sample_products();
        let spec = ColorSpecification(Color::Green).and(SizeSpecification(Size::Large));
        assert_eq!(names(&BetterFilter.filter(&products, &spec)), ["Tree"]);

        let spec = SizeSpecification(Size::Large).and(ColorSpecification(Color::Red));
        assert!(BetterFilter.filter(&products, &spec).is_empty());
    }

    fn color() -> impl Strategy<Value = Color> {
        prop_oneof![Just(Color::Red), Just(Color::Green), Just(Color::Blue)]
    }

    fn size() -> impl Strategy<Value = Size> {
        prop_oneof![
            Just(Size::Small),
            Just(Size::Medium),
            Just(Size::Large),
            Just(Size::Yuge),
        ]
    }

    fn products() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec(("[a-z]{1,8}", color(), size()), 0..24).prop_map(|items| {
            items
                .into_iter()
                .map(|(name, color, size)| Product::new(name, color, size))
                .collect()
        })
    }

    /// (kind, first dimension, second dimension) with kind 0..3 picking
    /// rectangle, circle or triangle.
    fn dimensions() -> impl Strategy<Value = Vec<(u8, f64, f64)>> {
        prop::collection::vec((0u8..3, 0.0f64..1000.0, 0.0f64..1000.0), 0..16)
    }

    fn boxed(kind: u8, a: f64, b: f64) -> Box<dyn Shape> {
        match kind {
            0 => Box::new(Rectangle {
                width: a,
                height: b,
            }),
            1 => Box::new(Circle { radius: a }),
            _ => Box::new(Triangle {
                height: a,
                width: b,
            }),
        }
    }

    fn expected_area(kind: u8, a: f64, b: f64) -> f64 {
        match kind {
            0 => a * b,
            1 => a * a * PI,
            _ => a * b / 2.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    proptest! {
        #[test]
        fn test_calculator_area_is_sum_of_parts(dims in dimensions()) {
            let shapes: Vec<Box<dyn Shape>> = dims.iter().map(|&(k, a, b)| boxed(k, a, b)).collect();
            let expected: f64 = dims.iter().map(|&(k, a, b)| expected_area(k, a, b)).sum();
            prop_assert!(close(CombinedAreaCalculator.area(&shapes), expected));
        }

        #[test]
        fn test_calculator_area_ignores_order(dims in dimensions()) {
            let forward: Vec<Box<dyn Shape>> = dims.iter().map(|&(k, a, b)| boxed(k, a, b)).collect();
            let backward: Vec<Box<dyn Shape>> =
                dims.iter().rev().map(|&(k, a, b)| boxed(k, a, b)).collect();
            prop_assert!(close(
                CombinedAreaCalculator.area(&forward),
                CombinedAreaCalculator.area(&backward)
            ));
        }

        #[test]
        fn test_legacy_area_agrees_on_rectangles_and_circles(
            rects in prop::collection::vec((0.0f64..1000.0, 0.0f64..1000.0), 0..8),
            radii in prop::collection::vec(0.0f64..1000.0, 0..8),
        ) {
            let old_rects: Vec<legacy::Rectangle> = rects
                .iter()
                .map(|&(width, height)| legacy::Rectangle { width, height })
                .collect();
            let old_circles: Vec<legacy::Circle> =
                radii.iter().map(|&radius| legacy::Circle { radius }).collect();
            let mut old: Vec<&dyn Any> = Vec::new();
            old.extend(old_rects.iter().map(|r| r as &dyn Any));
            old.extend(old_circles.iter().map(|c| c as &dyn Any));

            let mut shapes: Vec<Box<dyn Shape>> = Vec::new();
            shapes.extend(rects.iter().map(|&(a, b)| boxed(0, a, b)));
            shapes.extend(radii.iter().map(|&r| boxed(1, r, 0.0)));

            prop_assert!(close(legacy::combined_area(&old), CombinedAreaCalculator.area(&shapes)));
        }

        #[test]
        fn test_better_filter_keeps_exactly_satisfying_items(
            items in products(),
            color in color(),
            size in size(),
        ) {
            let by_color = ColorSpecification(color);
            let expected: Vec<&Product> = items.iter().filter(|p| by_color.is_satisfied(p)).collect();
            prop_assert_eq!(BetterFilter.filter(&items, &by_color), expected);

            let both = ColorSpecification(color).and(SizeSpecification(size));
            let expected: Vec<&Product> = items
                .iter()
                .filter(|p| {
                    ColorSpecification(color).is_satisfied(p)
                        && SizeSpecification(size).is_satisfied(p)
                })
                .collect();
            prop_assert_eq!(BetterFilter.filter(&items, &both), expected);
        }

        #[test]
        fn test_better_filter_agrees_with_product_filter(
            items in products(),
            color in color(),
            size in size(),
        ) {
            let legacy: Vec<&Product> = ProductFilter.by_color(&items, color).collect();
            prop_assert_eq!(BetterFilter.filter(&items, &ColorSpecification(color)), legacy);

            let legacy: Vec<&Product> = ProductFilter.by_size(&items, size).collect();
            prop_assert_eq!(BetterFilter.filter(&items, &SizeSpecification(size)), legacy);

            let legacy: Vec<&Product> = ProductFilter.by_size_and_color(&items, size, color).collect();
            let spec = SizeSpecification(size).and(ColorSpecification(color));
            prop_assert_eq!(BetterFilter.filter(&items, &spec), legacy);
        }
    }

    #[test]
    fn test_name_specification() {
        let products = sample_products();
        let spec = NameSpecification::new("^[AH]").unwrap();
        assert_eq!(names(&BetterFilter.filter(&products, &spec)), ["Apple", "House"]);

        let spec = NameSpecification::new("e$")
            .unwrap()
            .and(SizeSpecification(Size::Large));
        assert_eq!(names(&BetterFilter.filter(&products, &spec)), ["Tree", "House"]);
    }

    #[test]
    fn test_name_specification_rejects_bad_pattern() {
        let err = NameSpecification::new("(").unwrap_err();
        assert!(matches!(err, Error::UnsupportedOption { what: "name pattern", .. }));
    }

    #[test]
    fn test_demo_output() {
        let config = crate::config::Config::default();
        let mut buf = Vec::new();
        let mut ctx = DemoContext::new(&mut buf, &config);
        OpenClosedDemo.run(&mut ctx).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains(
            "Green products:\n - Apple is green\n - Tree is green\n\
             Large green products:\n - Tree is large and green\n"
        ));
        assert!(output.contains("Combined area (downcasting): 9.14"));
        assert!(output.contains("Combined area (Shape trait): 15.14"));
    }
}
