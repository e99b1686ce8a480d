//! Shape areas through base-typed handles
//!
//! Each shape owns its own dimensions and supplies `area`; callers hold them
//! as `Box<dyn Shape>` and never see the concrete type.

use super::constants::PI_APPROX;
use super::errors::ExerciseError;
use super::Exercise;
use crate::output::{format_general, Transcript};

pub trait Shape {
    /// Display name used in the report
    fn name(&self) -> &'static str;

    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI_APPROX * self.radius * self.radius
    }
}

/// `Area of <name>: <area>`
pub fn describe(shape: &dyn Shape) -> String {
    format!("Area of {}: {}", shape.name(), format_general(shape.area()))
}

pub struct Polymorphism;

impl Exercise for Polymorphism {
    fn name(&self) -> &'static str {
        "polymorphism"
    }

    fn summary(&self) -> &'static str {
        "Compute rectangle and circle areas through Box<dyn Shape>"
    }

    fn run(&self, _input: &str, out: &mut Transcript) -> Result<(), ExerciseError> {
        let shapes: [Box<dyn Shape>; 2] =
            [Box::new(Rectangle::new(5.0, 3.0)), Box::new(Circle::new(4.0))];

        for shape in &shapes {
            out.println(describe(shape.as_ref()));
        }
        Ok(())
    }
}
