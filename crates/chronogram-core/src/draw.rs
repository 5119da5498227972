//! Drawing primitives for sequence-diagram marks.
//!
//! Each drawer takes a plain value record describing a mark and produces SVG
//! nodes for the caller to append to its scene graph. Drawers never look at
//! one another's output; the only shared machinery is the layer system that
//! keeps z-ordering consistent when many marks are combined.

pub mod icon;
pub mod label;
pub mod layer;
pub mod marker;
pub mod placement;
pub mod rect;
pub mod stroke;
pub mod text;

pub use icon::{ActorKind, UnknownActorRole, draw_icon, draw_image};
pub use label::{draw_label, pennant_points};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use marker::MarkerKind;
pub use placement::{TextPlacement, place_text};
pub use rect::RectSpec;
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Anchor, TextSpec, collapse_breaks};
