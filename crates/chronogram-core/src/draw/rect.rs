//! Rectangle marks.
//!
//! [`RectSpec`] is the value record behind most box-shaped marks: note
//! rectangles, actor boxes, activation boxes, and frame bodies are all this
//! record with different fields overridden. Callers take the note-rect
//! defaults from [`RectSpec::note`], adjust in place, and draw.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::stroke::StrokeDefinition,
};

/// Describes a rectangle to render.
///
/// Plain caller-owned data: every field is public and meant to be overwritten
/// before drawing. No validation happens on draw - a negative width or height
/// passes straight through to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RectSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Color,
    pub stroke: StrokeDefinition,
    /// Horizontal corner radius.
    pub rx: f32,
    /// Vertical corner radius.
    pub ry: f32,
    /// Style class; `None` omits the attribute entirely.
    pub class: Option<String>,
}

impl RectSpec {
    /// Returns a fresh note rectangle: `#EDF2AE` fill, `#666` outline,
    /// 100×100, square corners, no class.
    ///
    /// Every call returns an independent record.
    pub fn note() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            fill: Color::new("#EDF2AE").expect("note fill is a valid color"),
            stroke: StrokeDefinition::new(
                Color::new("#666").expect("note outline is a valid color"),
                1.0,
            ),
            rx: 0.0,
            ry: 0.0,
            class: None,
        }
    }

    /// Renders this record to an SVG `<rect>` element.
    ///
    /// The returned element can be chained further with `.set(…)` before
    /// being appended.
    pub fn to_svg(&self) -> svg_element::Rectangle {
        let rect = svg_element::Rectangle::new()
            .set("x", self.x)
            .set("y", self.y)
            .set("width", self.width)
            .set("height", self.height)
            .set("fill", &self.fill)
            .set("fill-opacity", self.fill.alpha())
            .set("rx", self.rx)
            .set("ry", self.ry);

        let rect = crate::apply_stroke!(rect, &self.stroke);

        match &self.class {
            Some(class) => rect.set("class", class.as_str()),
            None => rect,
        }
    }
}

impl Default for RectSpec {
    fn default() -> Self {
        Self::note()
    }
}
