//! Liskov Substitution: anything that claims to be an [`Ellipse`] must behave
//! like one wherever an ellipse is expected.

use std::f64::consts::PI;

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::Result;

/// An ellipse with independently settable axes.
pub trait Ellipse {
    /// Major axis.
    fn major_axis(&self) -> f64;

    /// Minor axis.
    fn minor_axis(&self) -> f64;

    /// Set the major axis.
    fn set_major_axis(&mut self, major_axis: f64);

    /// Set the minor axis.
    fn set_minor_axis(&mut self, minor_axis: f64);

    /// Area, from the axes as they are now.
    fn area(&self) -> f64 {
        self.major_axis() * self.minor_axis() * PI
    }
}

/// A plain ellipse.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Oval {
    major_axis: f64,
    minor_axis: f64,
}

impl Ellipse for Oval {
    fn major_axis(&self) -> f64 {
        self.major_axis
    }

    fn minor_axis(&self) -> f64 {
        self.minor_axis
    }

    fn set_major_axis(&mut self, major_axis: f64) {
        self.major_axis = major_axis;
    }

    fn set_minor_axis(&mut self, minor_axis: f64) {
        self.minor_axis = minor_axis;
    }
}

/// Broken: keeps the axes equal only when the major axis is set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NaiveCircle {
    major_axis: f64,
    minor_axis: f64,
}

impl Ellipse for NaiveCircle {
    fn major_axis(&self) -> f64 {
        self.major_axis
    }

    fn minor_axis(&self) -> f64 {
        self.minor_axis
    }

    fn set_major_axis(&mut self, major_axis: f64) {
        self.major_axis = major_axis;
        self.minor_axis = major_axis;
    }

    fn set_minor_axis(&mut self, minor_axis: f64) {
        self.minor_axis = minor_axis;
    }
}

/// Fixed within the hierarchy: either setter moves both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SymmetricCircle {
    axis: f64,
}

impl Ellipse for SymmetricCircle {
    fn major_axis(&self) -> f64 {
        self.axis
    }

    fn minor_axis(&self) -> f64 {
        self.axis
    }

    fn set_major_axis(&mut self, major_axis: f64) {
        self.axis = major_axis;
    }

    fn set_minor_axis(&mut self, minor_axis: f64) {
        self.axis = minor_axis;
    }
}

/// Fixed by leaving the hierarchy: a circle has a radius, not two axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the radius.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }
}

/// Set the major then minor axis, the way any ellipse caller might.
fn resize(shape: &mut dyn Ellipse, major_axis: f64, minor_axis: f64) -> f64 {
    shape.set_major_axis(major_axis);
    shape.set_minor_axis(minor_axis);
    shape.area()
}

/// Shows the naive circle's wrong area next to both fixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiskovSubstitutionDemo;

impl Demo for LiskovSubstitutionDemo {
    fn name(&self) -> &'static str {
        "liskov-substitution"
    }

    fn title(&self) -> &'static str {
        "Liskov Substitution Principle"
    }

    fn category(&self) -> Category {
        Category::Principle
    }

    fn summary(&self) -> &'static str {
        "A circle that pretends to be an ellipse breaks callers that set both axes"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let out = ctx.out();

        let area = resize(&mut NaiveCircle::default(), 5.0, 4.0);
        writeln!(out, "{area}")?;
        writeln!(out, "Naive circle: 5*4 = 20, but we expected 5*5 = 25")?;

        let area = resize(&mut SymmetricCircle::default(), 5.0, 4.0);
        writeln!(out, "Symmetric circle: both axes follow the last setter: {area}")?;

        let mut circle = Circle::default();
        circle.set_radius(5.0);
        writeln!(out, "Separate circle type with a radius of 5: {}", circle.area())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_oval_keeps_axes_independent() {
        let mut oval = Oval::default();
        assert!(close(resize(&mut oval, 5.0, 4.0), 20.0 * PI));
        assert!(close(oval.major_axis(), 5.0));
        assert!(close(oval.minor_axis(), 4.0));
    }

    #[test]
    fn test_naive_circle_stops_being_a_circle() {
        let mut circle = NaiveCircle::default();
        let area = resize(&mut circle, 5.0, 4.0);
        assert!(close(area, 20.0 * PI));
        assert!(!close(circle.major_axis(), circle.minor_axis()));
    }

    #[test]
    fn test_symmetric_circle_stays_a_circle() {
        let mut circle = SymmetricCircle::default();
        let area = resize(&mut circle, 5.0, 4.0);
        assert!(close(area, 16.0 * PI));
        assert!(close(circle.major_axis(), circle.minor_axis()));

        circle.set_major_axis(5.0);
        assert!(close(circle.area(), 25.0 * PI));
    }

    #[test]
    fn test_separate_circle() {
        let mut circle = Circle::default();
        circle.set_radius(5.0);
        assert!(close(circle.radius(), 5.0));
        assert!(close(circle.area(), 25.0 * PI));
    }

    #[test]
    fn test_demo_prints_naive_area() {
        let config = crate::config::Config::default();
        let mut buf = Vec::new();
        let mut ctx = DemoContext::new(&mut buf, &config);
        LiskovSubstitutionDemo.run(&mut ctx).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().next(), Some("62.83185307179586"));
    }
}
