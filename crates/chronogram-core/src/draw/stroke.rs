//! Stroke definitions for lines and outlines.
//!
//! A [`StrokeDefinition`] bundles the color, width, and dash pattern a mark
//! is outlined with, and [`apply_stroke!`](crate::apply_stroke!) writes the
//! corresponding SVG attributes onto any element in one go. The terminology
//! follows SVG/CSS (`stroke`, `stroke-width`, `stroke-dasharray`).

use crate::color::Color;

/// The dash pattern of a stroke.
///
/// # SVG Mapping
///
/// - `Solid`: no `stroke-dasharray` attribute
/// - `Dashed`: `"3, 3"` - the pattern used for frame section dividers
/// - `Custom(pattern)`: the given dasharray string verbatim
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Short dashes with equal gaps (3px dash, 3px gap)
    Dashed,
    /// Custom SVG dasharray pattern, comma or space separated
    Custom(String),
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or `None` for solid
    /// lines.
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("3, 3".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use chronogram_core::color::Color;
/// use chronogram_core::draw::{StrokeDefinition, StrokeStyle};
///
/// // The lifeline stroke: thin and grey
/// let stroke = StrokeDefinition::new(Color::new("#999").unwrap(), 0.5);
///
/// // A dashed section divider
/// let divider = StrokeDefinition::dashed(Color::new("#D3CFC8").unwrap(), 1.0);
/// assert_eq!(*divider.style(), StrokeStyle::Dashed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
        }
    }
}

/// Apply all stroke attributes of a [`StrokeDefinition`] to an SVG element.
///
/// Sets `stroke`, `stroke-opacity`, `stroke-width`, and `stroke-dasharray`
/// (the last only for non-solid styles).
///
/// # Examples
///
/// ```
/// use chronogram_core::color::Color;
/// use chronogram_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("#666").unwrap(), 1.0);
/// let line = svg_element::Line::new().set("x1", 0).set("x2", 100);
/// let line = chronogram_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.color().to_string(), "black");
        assert_approx_eq!(f32, stroke.width(), 1.0);
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("#999").unwrap();

        let solid = StrokeDefinition::new(color, 0.5);
        assert_approx_eq!(f32, solid.width(), 0.5);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.0);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed);
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::default();
        stroke.set_color(Color::new("green").unwrap());
        stroke.set_width(2.5);
        stroke.set_style(StrokeStyle::Custom("10,5".to_string()));

        assert_eq!(stroke.color().to_string(), "green");
        assert_approx_eq!(f32, stroke.width(), 2.5);
        assert_eq!(*stroke.style(), StrokeStyle::Custom("10,5".to_string()));
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("3, 3".to_string()));
        assert_eq!(
            StrokeStyle::Custom("5,2".to_string()).to_svg_value(),
            Some("5,2".to_string())
        );
    }

    #[test]
    fn test_apply_stroke_sets_dasharray_only_when_dashed() {
        let solid = StrokeDefinition::default();
        let line = svg::node::element::Line::new();
        let rendered = apply_stroke!(line, &solid).to_string();
        assert!(!rendered.contains("stroke-dasharray"));

        let dashed = StrokeDefinition::dashed(Color::default(), 1.0);
        let line = svg::node::element::Line::new();
        let rendered = apply_stroke!(line, &dashed).to_string();
        assert!(rendered.contains("stroke-dasharray=\"3, 3\""));
    }
}
