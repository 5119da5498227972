//! Pennant labels for loop/alt frames.
//!
//! A pennant is a rectangle with its bottom-right corner cut at 45°, the
//! small flag that captions a frame ("loop", "alt", …). The outline is sized
//! to the caption it holds: the text is measured first, then the polygon is
//! generated to fit it plus fixed padding. Height is fixed regardless of
//! content.

use svg::node::element as svg_element;

use crate::{
    draw::text::{TextSpec, collapse_breaks},
    text::{self, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE},
};

/// Horizontal padding added around the measured caption width.
pub const PENNANT_PAD: f32 = 40.0;

/// Fixed pennant height.
pub const PENNANT_HEIGHT: f32 = 25.0;

/// Depth of the corner cut.
pub const PENNANT_CUT: f32 = 25.0;

/// Generates the five-point outline of a pennant as an SVG `points` string.
///
/// Points run top-left, top-right, bottom-right above the cut, cut corner,
/// bottom-left. The cut corner pulls in by `1.2 × cut` horizontally to keep
/// the diagonal visually 45° once stroked.
pub fn pennant_points(x: f32, y: f32, width: f32, height: f32, cut: f32) -> String {
    format!(
        "{},{} {},{} {},{} {},{} {},{}",
        x,
        y,
        x + width,
        y,
        x + width,
        y + height - cut,
        x + width - cut * 1.2,
        y + height,
        x,
        y + height
    )
}

/// Draws a pennant label: the fitted outline plus the caption inside it.
///
/// The caption is inset from the spec's position by `(0.5 × label_margin,
/// label_margin)`; the outline starts at the spec's position and extends to
/// the measured caption width plus [`PENNANT_PAD`], with a fixed
/// [`PENNANT_HEIGHT`]. Returns a `<g>` holding both marks.
pub fn draw_label(spec: &TextSpec) -> svg_element::Group {
    let caption = collapse_breaks(&spec.text);
    let measured = text::measure(&caption, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE);

    let outline = svg_element::Polygon::new()
        .set(
            "points",
            pennant_points(
                spec.x,
                spec.y,
                measured.width() + PENNANT_PAD,
                PENNANT_HEIGHT,
                PENNANT_CUT,
            ),
        )
        .set("class", "labelBox");

    let mut caption_spec = spec.clone();
    caption_spec.x += 0.5 * spec.label_margin;
    caption_spec.y += spec.label_margin;

    svg_element::Group::new()
        .add(outline)
        .add(caption_spec.to_svg())
}
