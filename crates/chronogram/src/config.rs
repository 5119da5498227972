//! Configuration for the composite drawers.
//!
//! This module provides the configuration records a layout orchestrator
//! hands to the actor and frame drawers. All types implement
//! [`serde::Deserialize`] with per-field defaults, so a partial external
//! source yields a usable configuration.
//!
//! # Overview
//!
//! - [`RenderConfig`] - Top-level configuration: box geometry, margins, the
//!   text-placement strategy, and icon settings.
//! - [`IconConfig`] - Whether avatar icons render, which roles they render
//!   for, their background color, and their placement offsets.
//!
//! # Example
//!
//! ```
//! # use chronogram::config::RenderConfig;
//! let config = RenderConfig::default();
//! assert_eq!(config.width(), 150.0);
//! assert!(!config.actor_icons().enabled());
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use chronogram_core::{
    color::Color,
    draw::{ActorKind, TextPlacement},
    geometry::Point,
};

use crate::error::ChronogramError;

/// Top-level configuration for the drawing operations.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Width of an actor box.
    #[serde(default = "default_width")]
    width: f32,

    /// Height of an actor box.
    #[serde(default = "default_height")]
    height: f32,

    /// Margin used when positioning frame section titles.
    #[serde(default = "default_box_margin")]
    box_margin: f32,

    /// Strategy used to center descriptions in their boxes.
    #[serde(default)]
    text_placement: TextPlacement,

    /// Avatar icon settings.
    #[serde(default)]
    actor_icons: IconConfig,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`] with the given geometry and icon
    /// settings.
    pub fn new(
        width: f32,
        height: f32,
        box_margin: f32,
        text_placement: TextPlacement,
        actor_icons: IconConfig,
    ) -> Self {
        Self {
            width,
            height,
            box_margin,
            text_placement,
            actor_icons,
        }
    }

    /// Returns the actor box width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the actor box height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the frame section-title margin.
    pub fn box_margin(&self) -> f32 {
        self.box_margin
    }

    /// Returns the text-placement strategy.
    pub fn text_placement(&self) -> TextPlacement {
        self.text_placement
    }

    /// Returns the icon settings.
    pub fn actor_icons(&self) -> &IconConfig {
        &self.actor_icons
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            box_margin: default_box_margin(),
            text_placement: TextPlacement::default(),
            actor_icons: IconConfig::default(),
        }
    }
}

/// Avatar icon configuration.
///
/// Icons render for an actor only when the feature is enabled globally *and*
/// the actor's role is flagged on in [`roles`](Self::roles). The placement
/// offsets default to the values the current artwork was drawn for; older
/// deployments with different artwork override them here rather than
/// patching the drawers.
#[derive(Debug, Clone, Deserialize)]
pub struct IconConfig {
    /// Master switch for avatar icons.
    #[serde(default)]
    enabled: bool,

    /// Background color of the actor box behind an icon, as a color string.
    #[serde(default)]
    background: Option<String>,

    /// Per-role enable flags.
    #[serde(default)]
    roles: HashMap<ActorKind, bool>,

    /// Horizontal offset of the inlined artwork from the box corner.
    #[serde(default = "default_icon_offset_x")]
    offset_x: f32,

    /// Vertical offset of the inlined artwork from the box corner.
    #[serde(default = "default_icon_offset_y")]
    offset_y: f32,

    /// How far the description is pulled down to clear the artwork.
    #[serde(default = "default_text_pull")]
    text_pull: f32,
}

impl IconConfig {
    /// Creates a new [`IconConfig`] with the default placement offsets.
    pub fn new(enabled: bool, background: Option<String>, roles: HashMap<ActorKind, bool>) -> Self {
        Self {
            enabled,
            background,
            roles,
            ..Self::default()
        }
    }

    /// Returns whether avatar icons are enabled at all.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns whether an icon renders for the given role.
    pub fn enabled_for(&self, kind: ActorKind) -> bool {
        self.enabled && self.roles.get(&kind).copied().unwrap_or(false)
    }

    /// Returns the parsed background [`Color`], or `None` if no background
    /// is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ChronogramError::InvalidColor`] if the configured string
    /// cannot be parsed.
    pub fn background(&self) -> Result<Option<Color>, ChronogramError> {
        self.background
            .as_deref()
            .map(|color| Color::new(color).map_err(ChronogramError::InvalidColor))
            .transpose()
    }

    /// Returns the artwork offset from the box corner.
    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    /// Returns the description pull-down distance.
    pub fn text_pull(&self) -> f32 {
        self.text_pull
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            background: None,
            roles: HashMap::new(),
            offset_x: default_icon_offset_x(),
            offset_y: default_icon_offset_y(),
            text_pull: default_text_pull(),
        }
    }
}

fn default_width() -> f32 {
    150.0
}

fn default_height() -> f32 {
    65.0
}

fn default_box_margin() -> f32 {
    10.0
}

fn default_icon_offset_x() -> f32 {
    62.0
}

fn default_icon_offset_y() -> f32 {
    10.0
}

fn default_text_pull() -> f32 {
    40.0
}
