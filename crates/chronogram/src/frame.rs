//! Loop/alt frame drawing.
//!
//! A frame surrounds a span of the diagram with a translucent body, captions
//! it with a pennant label at the top-left corner, and optionally splits into
//! sections (alt/else branches) separated by dashed dividers with bracketed
//! titles.

use log::debug;
use svg::node::element as svg_element;

use chronogram_core::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RectSpec, RenderLayer, StrokeDefinition, TextSpec, draw_label},
    geometry::Bounds,
};

use crate::config::RenderConfig;

/// Caption inset used by the pennant label.
const LABEL_MARGIN: f32 = 17.0;

/// A frame region with its caption and optional internal sections.
///
/// `sections` holds the y coordinate of each divider; `section_titles` is the
/// parallel list of captions, where an empty string renders no caption.
#[derive(Debug, Clone, Default)]
pub struct FrameSpec {
    pub bounds: Bounds,
    pub title: String,
    pub sections: Vec<f32>,
    pub section_titles: Vec<String>,
}

/// Draws a frame: body, section dividers, pennant label, and section titles.
///
/// The body is a single translucent rectangle rather than four border lines,
/// which keeps the corners gap-free at any stroke width.
pub fn draw_frame(config: &RenderConfig, spec: &FrameSpec) -> LayeredOutput {
    debug!(title = spec.title.as_str(); "drawing frame");

    let mut output = LayeredOutput::new();
    let bounds = spec.bounds;

    let mut body = RectSpec::note();
    body.x = bounds.min_x();
    body.y = bounds.min_y();
    body.width = bounds.width();
    body.height = bounds.height();
    body.fill = Color::new("rgba(145, 122, 76, 0.05)").expect("frame fill is a valid color");
    body.stroke =
        StrokeDefinition::new(Color::new("#D3CFC8").expect("frame border is a valid color"), 1.0);
    body.class = None;
    output.add_to_layer(RenderLayer::Frame, Box::new(body.to_svg()));

    let divider_stroke = StrokeDefinition::dashed(
        Color::new("#D3CFC8").expect("divider stroke is a valid color"),
        1.0,
    );
    for section in &spec.sections {
        let line = svg_element::Line::new()
            .set("x1", bounds.min_x())
            .set("y1", *section)
            .set("x2", bounds.max_x())
            .set("y2", *section)
            .set("class", "loopLine");
        let line = apply_stroke!(line, &divider_stroke);
        output.add_to_layer(RenderLayer::Frame, Box::new(line));
    }

    let mut label = TextSpec::new(spec.title.clone());
    label.x = bounds.min_x();
    label.y = bounds.min_y();
    label.label_margin = LABEL_MARGIN;
    label.class = Some("labelText".to_string());
    output.add_to_layer(RenderLayer::Frame, Box::new(draw_label(&label)));

    for (section, title) in spec.sections.iter().zip(&spec.section_titles) {
        if title.is_empty() {
            continue;
        }
        let mut caption = TextSpec::new(format!("[ {title} ]"));
        // Aligned with the pennant caption's inset.
        caption.x = bounds.min_x() + 0.5 * LABEL_MARGIN;
        caption.y = section + 1.5 * config.box_margin();
        caption.class = Some("labelText".to_string());
        output.add_to_layer(RenderLayer::Text, Box::new(caption.to_svg()));
    }

    output
}
