//! Actor avatar icons.
//!
//! Actors in a payment flow can render with a small avatar above their box
//! instead of a bare rectangle. The artwork for the closed set of roles ships
//! inside the crate and is embedded at compile time; [`draw_icon`] inlines
//! the markup verbatim into a positioned group. The table is trusted static
//! data - nothing here escapes or sanitizes it, so it must never hold
//! caller-supplied content.
//!
//! [`draw_image`] is the older variant that references external artwork by
//! URL instead of inlining it.

use std::fmt;
use std::str;

use serde::Deserialize;
use svg::node::{Blob, element as svg_element};
use thiserror::Error;

use crate::{draw::rect::RectSpec, geometry::Point};

/// The closed set of actor roles with bundled artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActorKind {
    /// A card/payment network
    CardNetwork,
    /// The paying consumer
    Consumer,
    /// A mobile device
    Smartphone,
    /// A backend server
    Server,
    /// The merchant
    Merchant,
    /// The issuing or acquiring bank
    Bank,
}

/// Error returned when a role name falls outside the [`ActorKind`] set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown actor role `{0}`")]
pub struct UnknownActorRole(pub String);

impl ActorKind {
    /// All roles, in declaration order.
    pub const ALL: [ActorKind; 6] = [
        Self::CardNetwork,
        Self::Consumer,
        Self::Smartphone,
        Self::Server,
        Self::Merchant,
        Self::Bank,
    ];

    /// Returns the role's canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CardNetwork => "card-network",
            Self::Consumer => "consumer",
            Self::Smartphone => "smartphone",
            Self::Server => "server",
            Self::Merchant => "merchant",
            Self::Bank => "bank",
        }
    }

    /// Returns the bundled artwork for this role as an SVG document string.
    pub fn artwork(self) -> &'static str {
        match self {
            Self::CardNetwork => include_str!("../../assets/icons/card-network.svg"),
            Self::Consumer => include_str!("../../assets/icons/consumer.svg"),
            Self::Smartphone => include_str!("../../assets/icons/smartphone.svg"),
            Self::Server => include_str!("../../assets/icons/server.svg"),
            Self::Merchant => include_str!("../../assets/icons/merchant.svg"),
            Self::Bank => include_str!("../../assets/icons/bank.svg"),
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for ActorKind {
    type Err = UnknownActorRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownActorRole(s.to_string()))
    }
}

/// Inlines a role's artwork into a group translated relative to the anchor
/// rectangle.
///
/// The group lands at `(rect.x + offset.x, rect.y + offset.y)`. The artwork
/// is injected raw; the caller is responsible for only requesting roles it
/// has verified against its configuration.
pub fn draw_icon(kind: ActorKind, rect: &RectSpec, offset: Point) -> svg_element::Group {
    svg_element::Group::new()
        .set(
            "transform",
            format!(
                "translate({}, {})",
                rect.x + offset.x(),
                rect.y + offset.y()
            ),
        )
        .add(Blob::new(kind.artwork()))
}

/// References external artwork by URL, at a fixed offset and 100×100 size
/// relative to the anchor rectangle.
pub fn draw_image(rect: &RectSpec, href: &str) -> svg_element::Image {
    // Half the fixed 100px artwork size, hoisted above the box.
    let image = svg_element::Image::new()
        .set("xlink:href", href)
        .set("x", rect.x + 50.0)
        .set("y", rect.y - 150.0)
        .set("width", "100px")
        .set("height", "100px");

    match &rect.class {
        Some(class) => image.set("class", class.as_str()),
        None => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_kind_round_trips_through_names() {
        for kind in ActorKind::ALL {
            assert_eq!(kind.as_str().parse::<ActorKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_actor_kind_rejects_unknown_names() {
        let err = "sorcerer".parse::<ActorKind>().unwrap_err();
        assert_eq!(err, UnknownActorRole("sorcerer".to_string()));
        assert!(err.to_string().contains("sorcerer"));
    }

    #[test]
    fn test_artwork_is_embedded_for_every_role() {
        for kind in ActorKind::ALL {
            let artwork = kind.artwork();
            assert!(artwork.contains("<svg"), "{kind} artwork missing <svg>");
            assert!(artwork.contains("</svg>"), "{kind} artwork unterminated");
        }
    }

    #[test]
    fn test_draw_icon_translates_relative_to_rect() {
        let mut rect = RectSpec::note();
        rect.x = 100.0;
        rect.y = 0.0;
        let rendered = draw_icon(ActorKind::Server, &rect, Point::new(62.0, 10.0)).to_string();
        assert!(rendered.contains("translate(162, 10)"));
        assert!(rendered.contains("<svg"));
    }

    #[test]
    fn test_draw_image_uses_fixed_offsets() {
        let mut rect = RectSpec::note();
        rect.x = 10.0;
        rect.y = 200.0;
        let rendered = draw_image(&rect, "https://icons.example/consumer.png").to_string();
        assert!(rendered.contains("x=\"60\""));
        assert!(rendered.contains("y=\"50\""));
        assert!(rendered.contains("width=\"100px\""));
        assert!(rendered.contains("xlink:href"));
    }

    #[test]
    fn test_draw_image_carries_class_when_set() {
        let mut rect = RectSpec::note();
        rect.class = Some("actor-image".to_string());
        let rendered = draw_image(&rect, "consumer.png").to_string();
        assert!(rendered.contains("class=\"actor-image\""));
    }
}
