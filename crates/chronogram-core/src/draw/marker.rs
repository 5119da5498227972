//! Reusable marker definitions for message lines.
//!
//! Message connectors decorate their endpoints with markers defined once in
//! the document's `<defs>` section and referenced by id. Three markers exist:
//! the solid arrowhead for ordinary messages, a filled circle for the
//! async-sent notation, and a crossed arrowhead for failed/lost messages.
//!
//! Each definition must land in the document at most once - markers carry
//! fixed ids, and duplicate ids are undefined behavior for the consuming
//! canvas. Building the `<defs>` is the caller's job; [`MarkerKind::url`]
//! gives the matching reference for `marker-start`/`marker-end` attributes.

use svg::node::element as svg_element;

/// The marker shapes available to message lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Solid arrowhead for ordinary messages
    Arrowhead,
    /// Filled circle marking an async message as sent
    SequenceNumber,
    /// Crossed arrowhead for failed or lost messages
    Crosshead,
}

impl MarkerKind {
    /// Returns the fixed element id this marker is defined under.
    pub fn id(self) -> &'static str {
        match self {
            Self::Arrowhead => "arrowhead",
            Self::SequenceNumber => "sequencenumber",
            Self::Crosshead => "crosshead",
        }
    }

    /// Returns the `url(#…)` reference for stroke decoration attributes.
    pub fn url(self) -> String {
        format!("url(#{})", self.id())
    }

    /// Builds this marker's `<marker>` definition.
    pub fn definition(self) -> svg_element::Marker {
        match self {
            Self::Arrowhead => arrowhead(),
            Self::SequenceNumber => sequence_number(),
            Self::Crosshead => crosshead(),
        }
    }
}

fn arrowhead() -> svg_element::Marker {
    svg_element::Marker::new()
        .set("id", MarkerKind::Arrowhead.id())
        .set("refX", 7)
        .set("refY", 4)
        .set("markerWidth", 8)
        .set("markerHeight", 8)
        .set("orient", "auto")
        .add(svg_element::Path::new().set("d", "M 0,0 V 8 L 8,4 Z"))
}

fn sequence_number() -> svg_element::Marker {
    svg_element::Marker::new()
        .set("id", MarkerKind::SequenceNumber.id())
        .set("refX", 15)
        .set("refY", 15)
        .set("markerWidth", 60)
        .set("markerHeight", 40)
        .set("orient", "auto")
        .add(
            svg_element::Circle::new()
                .set("cx", 15)
                .set("cy", 15)
                .set("r", 6),
        )
}

fn crosshead() -> svg_element::Marker {
    let arrow = svg_element::Path::new()
        .set("fill", "black")
        .set("stroke", "#000000")
        .set("stroke-dasharray", "0, 0")
        .set("stroke-width", "1px")
        .set("d", "M 9,2 V 6 L16,4 Z");

    let cross = svg_element::Path::new()
        .set("fill", "none")
        .set("stroke", "#000000")
        .set("stroke-dasharray", "0, 0")
        .set("stroke-width", "1px")
        .set("d", "M 0,1 L 6,7 M 6,1 L 0,7");

    svg_element::Marker::new()
        .set("id", MarkerKind::Crosshead.id())
        .set("markerWidth", 15)
        .set("markerHeight", 8)
        .set("orient", "auto")
        .set("refX", 16)
        .set("refY", 4)
        .add(arrow)
        .add(cross)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_ids() {
        assert_eq!(MarkerKind::Arrowhead.id(), "arrowhead");
        assert_eq!(MarkerKind::SequenceNumber.id(), "sequencenumber");
        assert_eq!(MarkerKind::Crosshead.id(), "crosshead");
    }

    #[test]
    fn test_marker_urls_reference_ids() {
        assert_eq!(MarkerKind::Arrowhead.url(), "url(#arrowhead)");
        assert_eq!(MarkerKind::Crosshead.url(), "url(#crosshead)");
    }

    #[test]
    fn test_arrowhead_definition() {
        let rendered = MarkerKind::Arrowhead.definition().to_string();
        assert!(rendered.contains("id=\"arrowhead\""));
        assert!(rendered.contains("refX=\"7\""));
        assert!(rendered.contains("refY=\"4\""));
        assert!(rendered.contains("M 0,0 V 8 L 8,4 Z"));
    }

    #[test]
    fn test_sequence_number_definition_is_a_circle() {
        let rendered = MarkerKind::SequenceNumber.definition().to_string();
        assert!(rendered.contains("id=\"sequencenumber\""));
        assert!(rendered.contains("<circle"));
        assert!(rendered.contains("r=\"6\""));
    }

    #[test]
    fn test_crosshead_definition_has_arrow_and_cross() {
        let rendered = MarkerKind::Crosshead.definition().to_string();
        assert!(rendered.contains("id=\"crosshead\""));
        assert!(rendered.contains("M 9,2 V 6 L16,4 Z"));
        assert!(rendered.contains("M 0,1 L 6,7 M 6,1 L 0,7"));
        assert_eq!(rendered.matches("<path").count(), 2);
    }
}
