//! Free-standing text marks.
//!
//! [`TextSpec`] describes a single run of text placed at absolute
//! coordinates. Diagram source text may carry `<br>`-style line-break markup;
//! this layer flattens each break to a single space before rendering, since a
//! lone `<text>` mark has no line wrapping.

use svg::node::{Text as SvgText, element as svg_element};

use crate::color::Color;

/// Horizontal anchoring of a text run, mapping to SVG `text-anchor`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Anchor at the start of the text (default)
    #[default]
    Start,
    /// Anchor at the center of the text
    Middle,
    /// Anchor at the end of the text
    End,
}

impl Anchor {
    /// Returns the SVG `text-anchor` value.
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Describes a text run to render.
///
/// Like [`RectSpec`](crate::draw::RectSpec), this is caller-owned data with
/// public fields, meant to be adjusted in place between draws.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub fill: Color,
    pub anchor: Anchor,
    /// Indent applied to the inner run: the tspan sits at `x + 2 × text_margin`.
    pub text_margin: f32,
    /// Inset used by the pennant label drawer when this spec captions a frame.
    pub label_margin: f32,
    /// Style class; `None` omits the attribute entirely.
    pub class: Option<String>,
}

impl TextSpec {
    /// Returns a fresh text record with the given content and the default
    /// styling: black fill, start anchor, zero margins, no class.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            text: text.into(),
            fill: Color::default(),
            anchor: Anchor::default(),
            text_margin: 0.0,
            label_margin: 0.0,
            class: None,
        }
    }

    /// Renders this record to an SVG `<text>` element containing one
    /// `<tspan>` with the break-collapsed content.
    pub fn to_svg(&self) -> svg_element::Text {
        let content = collapse_breaks(&self.text);

        let text = svg_element::Text::new("")
            .set("x", self.x)
            .set("y", self.y)
            .set("text-anchor", self.anchor.to_svg_value())
            .set("fill", &self.fill);

        let text = match &self.class {
            Some(class) => text.set("class", class.as_str()),
            None => text,
        };

        let span = svg_element::TSpan::new("")
            .set("x", self.x + self.text_margin * 2.0)
            .set("fill", &self.fill)
            .add(SvgText::new(content));

        text.add(span)
    }
}

/// Replaces every `<br>` and `<br/>` (any letter case) with a single space,
/// leaving all other content untouched.
pub fn collapse_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('<') {
        let (head, tail) = rest.split_at(pos);
        out.push_str(head);
        match break_tag_len(tail) {
            Some(len) => {
                out.push(' ');
                rest = &tail[len..];
            }
            None => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Length of the break tag at the start of `s`, if one is there.
fn break_tag_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.len() < 4 || bytes[0] != b'<' {
        return None;
    }
    if !bytes[1].eq_ignore_ascii_case(&b'b') || !bytes[2].eq_ignore_ascii_case(&b'r') {
        return None;
    }
    match bytes[3] {
        b'>' => Some(4),
        b'/' if bytes.len() >= 5 && bytes[4] == b'>' => Some(5),
        _ => None,
    }
}
