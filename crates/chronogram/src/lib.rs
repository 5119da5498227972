//! Chronogram - a rendering layer for sequence-diagram primitives.
//!
//! Chronogram draws the marks a sequence diagram is made of - actor boxes
//! with lifelines and avatar icons, activation boxes, loop/alt frames with
//! pennant labels, and the arrowhead markers message lines reference. It is
//! purely presentational: a layout engine computes every coordinate and
//! style option, then calls the drawers here, which append SVG nodes to the
//! scene graph and hand them back for further chaining.
//!
//! # Examples
//!
//! ```
//! use chronogram::{RenderSession, config::RenderConfig, draw_actor};
//!
//! let config = RenderConfig::default();
//! let mut session = RenderSession::new();
//!
//! // The header occurrence (vertical position 0) also draws the lifeline.
//! let output = draw_actor(&mut session, &config, 0.0, 0.0, "Alice", None)
//!     .expect("default config has no colors to fail on");
//!
//! for node in output.render() {
//!     // append to an svg::Document
//!     let _ = node.to_string();
//! }
//! ```

pub mod config;

mod activation;
mod actor;
mod error;
mod frame;
mod session;

pub use chronogram_core::{color, draw, geometry, text};

pub use activation::{activation_class, draw_activation};
pub use actor::draw_actor;
pub use error::ChronogramError;
pub use frame::{FrameSpec, draw_frame};
pub use session::RenderSession;
