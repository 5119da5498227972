//! Chronogram core types and drawing primitives.
//!
//! This crate provides the foundational pieces used to render sequence-diagram
//! marks onto an SVG scene graph:
//!
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Geometry**: basic geometric types ([`geometry`] module)
//! - **Text metrics**: font-based text measurement ([`text`] module)
//! - **Draw**: the primitive drawers and their value records ([`draw`] module)
//!
//! Layout is deliberately absent: callers compute coordinates elsewhere and
//! hand them to the drawers here, which only produce SVG nodes.

pub mod color;
pub mod draw;
pub mod geometry;
pub mod text;
