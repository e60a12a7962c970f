//! Shape definitions for the drawing surface.

mod style;

pub use style::{ShapeStyle, Translate};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of shape stamped by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    #[default]
    Box,
    /// Ellipse inscribed in the dragged rectangle.
    Circle,
}

impl ShapeKind {
    /// Text form used in persisted data and by UI buttons.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown shape kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape kind: {0}")]
pub struct ParseShapeKindError(pub String);

impl FromStr for ShapeKind {
    type Err = ParseShapeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box" => Ok(ShapeKind::Box),
            "circle" => Ok(ShapeKind::Circle),
            other => Err(ParseShapeKindError(other.to_string())),
        }
    }
}

/// All shapes drawn so far, split by kind.
///
/// Vector order is drag-completion order, which is also the stacking order
/// inside each kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeCollection {
    /// Rectangles, oldest first.
    pub boxes: Vec<ShapeStyle>,
    /// Circles, oldest first.
    pub circles: Vec<ShapeStyle>,
}

impl ShapeCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape to the sub-collection matching its kind.
    pub fn push(&mut self, style: ShapeStyle) {
        match style.kind {
            ShapeKind::Box => self.boxes.push(style),
            ShapeKind::Circle => self.circles.push(style),
        }
    }

    /// The sub-collection holding shapes of `kind`.
    pub fn of_kind(&self, kind: ShapeKind) -> &[ShapeStyle] {
        match kind {
            ShapeKind::Box => &self.boxes,
            ShapeKind::Circle => &self.circles,
        }
    }

    /// Total number of shapes.
    pub fn len(&self) -> usize {
        self.boxes.len() + self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty() && self.circles.is_empty()
    }

    /// Shapes in the order the surface paints them: all circles, then all boxes.
    pub fn render_order(&self) -> impl Iterator<Item = &ShapeStyle> {
        self.circles.iter().chain(self.boxes.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn shape(kind: ShapeKind, x: f64) -> ShapeStyle {
        ShapeStyle::from_drag(Point::new(0.0, 0.0), Point::new(x, x), kind)
    }

    #[test]
    fn test_push_routes_by_kind() {
        let mut draws = ShapeCollection::new();
        draws.push(shape(ShapeKind::Box, 10.0));
        draws.push(shape(ShapeKind::Circle, 20.0));
        draws.push(shape(ShapeKind::Box, 30.0));

        assert_eq!(draws.boxes.len(), 2);
        assert_eq!(draws.circles.len(), 1);
        assert!(draws.boxes.iter().all(|s| s.kind == ShapeKind::Box));
        assert!(draws.circles.iter().all(|s| s.kind == ShapeKind::Circle));
        assert_eq!(draws.len(), 3);
    }

    #[test]
    fn test_render_order_circles_first() {
        let mut draws = ShapeCollection::new();
        draws.push(shape(ShapeKind::Box, 10.0));
        draws.push(shape(ShapeKind::Circle, 20.0));
        draws.push(shape(ShapeKind::Circle, 30.0));

        let kinds: Vec<_> = draws.render_order().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![ShapeKind::Circle, ShapeKind::Circle, ShapeKind::Box]);
        let lefts: Vec<_> = draws.render_order().map(|s| s.left).collect();
        assert_eq!(lefts, vec![20.0, 30.0, 10.0]);
    }

    #[test]
    fn test_shape_kind_text_forms() {
        assert_eq!("box".parse::<ShapeKind>(), Ok(ShapeKind::Box));
        assert_eq!("circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert!("triangle".parse::<ShapeKind>().is_err());
        assert_eq!(ShapeKind::Circle.to_string(), "circle");
        assert_eq!(ShapeKind::default(), ShapeKind::Box);
    }

    #[test]
    fn test_empty_collection() {
        let draws = ShapeCollection::new();
        assert!(draws.is_empty());
        assert_eq!(draws.of_kind(ShapeKind::Box).len(), 0);
        assert_eq!(draws.render_order().count(), 0);
    }
}
