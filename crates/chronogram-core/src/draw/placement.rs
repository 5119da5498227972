//! Text-placement strategies for box captions.
//!
//! Centering text inside a box has no single portable answer in SVG, so the
//! caption drawer supports three strategies, selected from configuration per
//! draw call:
//!
//! - [`TextPlacement::Baseline`] (`"old"`): a single centered run with a
//!   fixed baseline adjustment. Approximate but works everywhere.
//! - [`TextPlacement::ForeignObject`] (`"fo"`): an embedded block-layout
//!   container for true centering, wrapped in a `<switch>` with the tspan
//!   strategy as a sibling fallback for canvases without `foreignObject`
//!   support.
//! - [`TextPlacement::Tspan`] (anything else): a nested run with
//!   baseline/alignment centering attributes. The modern default.

use std::{convert::Infallible, str};

use serde::{Deserialize, Deserializer};
use svg::{
    Node,
    node::{Text as SvgText, element as svg_element, element::Element},
};

use crate::draw::layer::SvgNode;

/// Vertical baseline adjustment used by the `Baseline` strategy.
const BASELINE_SHIFT: f32 = 5.0;

/// How a box caption is centered.
///
/// Unrecognized configuration strings select [`Tspan`](Self::Tspan), so a
/// typo degrades to the default rather than failing a render.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextPlacement {
    /// Single run with a fixed baseline shift (`"old"`)
    Baseline,
    /// `foreignObject` block layout with tspan fallback (`"fo"`)
    ForeignObject,
    /// Nested run with central baseline attributes (default)
    #[default]
    Tspan,
}

impl str::FromStr for TextPlacement {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "old" => Self::Baseline,
            "fo" => Self::ForeignObject,
            _ => Self::Tspan,
        })
    }
}

impl<'de> Deserialize<'de> for TextPlacement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or_default())
    }
}

/// Draws `content` centered in the box at `(x, y)` with the given size,
/// using the selected strategy. The optional class lands on the text mark
/// (and, for the `fo` strategy, on the block container as well).
pub fn place_text(
    placement: TextPlacement,
    content: &str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    class: Option<&str>,
) -> SvgNode {
    match placement {
        TextPlacement::Baseline => by_baseline(content, x, y, width, height, class),
        TextPlacement::ForeignObject => by_foreign_object(content, x, y, width, height, class),
        TextPlacement::Tspan => by_tspan(content, x, y, width, height, class),
    }
}

fn by_baseline(
    content: &str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    class: Option<&str>,
) -> SvgNode {
    let text = svg_element::Text::new("")
        .set("x", x + width / 2.0)
        .set("y", y + height / 2.0 + BASELINE_SHIFT)
        .set("text-anchor", "middle")
        .add(SvgText::new(content));

    Box::new(with_class(text, class))
}

fn by_tspan(
    content: &str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    class: Option<&str>,
) -> SvgNode {
    let span = svg_element::TSpan::new("")
        .set("x", x + width / 2.0)
        .set("dy", "0")
        .add(SvgText::new(content));

    let text = svg_element::Text::new("")
        .set("x", x + width / 2.0)
        .set("y", y + height / 2.0)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central")
        .set("alignment-baseline", "central")
        .add(span);

    Box::new(with_class(text, class))
}

fn by_foreign_object(
    content: &str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    class: Option<&str>,
) -> SvgNode {
    let mut cell = Element::new("div");
    cell.assign(
        "style",
        "display: table-cell; text-align: center; vertical-align: middle;",
    );
    cell.append(SvgText::new(content));

    let mut block = Element::new("div");
    block.assign("style", "display: table; height: 100%; width: 100%;");
    if let Some(class) = class {
        block.assign("class", class);
    }
    block.append(cell);

    let mut foreign = Element::new("foreignObject");
    foreign.assign("x", x);
    foreign.assign("y", y);
    foreign.assign("width", width);
    foreign.assign("height", height);
    foreign.append(block);

    let mut switch = Element::new("switch");
    switch.append(foreign);
    // Fallback for canvases that skip foreignObject.
    switch.append(by_tspan(content, x, y, width, height, class));

    Box::new(switch)
}

fn with_class(text: svg_element::Text, class: Option<&str>) -> svg_element::Text {
    match class {
        Some(class) => text.set("class", class),
        None => text,
    }
}
