//! Area formulas for walls and obstructions.
//!
//! Dimensions are in metres and are expected to be positive; callers validate
//! them before they get here.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

pub fn rectangle_area(height: f64, width: f64) -> f64 {
    height * width
}

pub fn circle_area(diameter: f64) -> f64 {
    let radius = diameter * 0.5;
    PI * radius * radius
}

/// Area of an ellipse given its two semi-axes.
pub fn ellipse_area(axis_a: f64, axis_b: f64) -> f64 {
    PI * axis_a * axis_b
}

/// The shapes an obstruction can be entered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Ellipse,
    Circle,
}

impl ShapeKind {
    /// All kinds in the order they are offered to the user.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rect, ShapeKind::Ellipse, ShapeKind::Circle];

    /// The token the user types to pick this shape.
    pub fn token(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
        }
    }

    pub fn tokens() -> [&'static str; 3] {
        Self::ALL.map(Self::token)
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| format!("unknown shape '{s}'"))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A measured shape, ready to contribute its area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle { height: f64, width: f64 },
    Circle { diameter: f64 },
    Ellipse { axis_a: f64, axis_b: f64 },
}

impl Shape {
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Rectangle { height, width } => rectangle_area(height, width),
            Shape::Circle { diameter } => circle_area(diameter),
            Shape::Ellipse { axis_a, axis_b } => ellipse_area(axis_a, axis_b),
        }
    }
}
