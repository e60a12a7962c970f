//! Render-agnostic geometry of a stamped shape.

use super::ShapeKind;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Border drawn around every shape.
const BORDER: &str = "1px solid #000000";

/// Per-axis correction applied to the anchor corner.
///
/// A shape is anchored at the drag release point. When the drag moved in the
/// positive direction on an axis, the release point is the far edge, so the
/// box is pulled back by its own size on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Translate {
    /// Anchor already is the near edge.
    #[default]
    #[serde(rename = "0%")]
    Zero,
    /// Shift back by the full extent on this axis.
    #[serde(rename = "-100%")]
    PullBack,
}

impl Translate {
    /// Pick the correction for one axis from the drag start and end coordinates.
    pub fn for_axis(start: f64, end: f64) -> Self {
        if start - end < 0.0 {
            Translate::PullBack
        } else {
            Translate::Zero
        }
    }

    /// Fraction of the shape's own size this correction moves it by.
    pub fn factor(&self) -> f64 {
        match self {
            Translate::Zero => 0.0,
            Translate::PullBack => -1.0,
        }
    }

    /// CSS percentage literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Translate::Zero => "0%",
            Translate::PullBack => "-100%",
        }
    }
}

/// Geometry descriptor for one shape on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    /// Horizontal extent, never negative.
    #[serde(with = "px")]
    pub width: f64,
    /// Vertical extent, never negative.
    #[serde(with = "px")]
    pub height: f64,
    /// Anchor y (the drag release point).
    #[serde(with = "px")]
    pub top: f64,
    /// Anchor x (the drag release point).
    #[serde(with = "px")]
    pub left: f64,
    pub translate_x: Translate,
    pub translate_y: Translate,
    #[serde(rename = "shapeKind")]
    pub kind: ShapeKind,
}

impl ShapeStyle {
    /// Derive the style for a drag from `start` released at `end`.
    ///
    /// Zero-size drags yield a zero-size shape.
    pub fn from_drag(start: Point, end: Point, kind: ShapeKind) -> Self {
        Self {
            width: (start.x - end.x).abs(),
            height: (start.y - end.y).abs(),
            top: end.y,
            left: end.x,
            translate_x: Translate::for_axis(start.x, end.x),
            translate_y: Translate::for_axis(start.y, end.y),
            kind,
        }
    }

    /// The rectangle the shape covers once the translate correction is applied.
    pub fn screen_rect(&self) -> Rect {
        let x0 = self.left + self.translate_x.factor() * self.width;
        let y0 = self.top + self.translate_y.factor() * self.height;
        Rect::new(x0, y0, x0 + self.width, y0 + self.height)
    }

    /// Value of the CSS `transform` property.
    pub fn transform(&self) -> String {
        format!(
            "translate({}, {})",
            self.translate_x.as_str(),
            self.translate_y.as_str()
        )
    }

    /// Inline style declarations, ready to apply to an absolutely positioned element.
    pub fn css(&self) -> Vec<(&'static str, String)> {
        let mut decls = vec![
            ("position", "absolute".to_string()),
            ("border", BORDER.to_string()),
            ("user-select", "none".to_string()),
            ("width", format!("{}px", self.width)),
            ("height", format!("{}px", self.height)),
            ("top", format!("{}px", self.top)),
            ("left", format!("{}px", self.left)),
            ("transform", self.transform()),
        ];
        if self.kind == ShapeKind::Circle {
            decls.push(("border-radius", "50%".to_string()));
        }
        decls
    }

    /// The declarations joined into a `style` attribute value.
    pub fn to_css_string(&self) -> String {
        self.css()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Lengths are stored as CSS pixel strings, e.g. `"50px"`.
mod px {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{}px", value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let number = raw
            .strip_suffix("px")
            .ok_or_else(|| D::Error::custom(format!("expected a px length, got {:?}", raw)))?;
        number.parse::<f64>().map_err(D::Error::custom)
    }
}
