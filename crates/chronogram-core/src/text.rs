//! Font-based text measurement.
//!
//! The label drawer sizes its pennant outline to the text it contains, which
//! requires knowing how wide a string renders before the SVG is ever
//! rasterized. This module supplies that oracle through cosmic-text: a
//! process-wide [`FontSystem`] is initialized once and reused for every
//! measurement, since discovering system fonts is expensive.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use crate::geometry::Size;

/// Font family used for label text when the caller does not control fonts
/// through a stylesheet.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Font size in points matching the default label styling.
pub const DEFAULT_FONT_SIZE: u16 = 12;

static MEASURER: OnceLock<Measurer> = OnceLock::new();

/// Measures the rendered size of `content` in the given font.
///
/// Multi-line content (separated by `\n`) is measured as a block: the width
/// is the widest line, the height is the sum of line heights. Empty content
/// measures as zero.
pub fn measure(content: &str, font_family: &str, font_size: u16) -> Size {
    MEASURER
        .get_or_init(Measurer::new)
        .measure(content, font_family, font_size)
}

/// Owns the shared font system behind [`measure`].
struct Measurer {
    font_system: Mutex<FontSystem>,
}

impl Measurer {
    fn new() -> Self {
        info!("Initializing font system for text measurement");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn measure(&self, content: &str, font_family: &str, font_size: u16) -> Size {
        if content.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .expect("failed to lock font system");

        // Points to pixels at standard DPI, with an approximate line height.
        let font_size_px = font_size as f32 * 1.33;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(font_family));

        // Unconstrained size so the text flows naturally; advanced shaping
        // accounts for kerning and ligatures.
        buffer.set_size(None, None);
        buffer.set_text(content, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            // No usable fonts on this system; fall back to a rough estimate
            // so callers still get a plausible box.
            max_width = content.len() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        } else {
            for run in &layout_runs {
                if let Some(last) = run.glyphs.last() {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        }

        Size::new(max_width, total_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty() {
        let size = measure("", DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE);
        assert_eq!(size.width(), 0.0);
        assert_eq!(size.height(), 0.0);
    }

    #[test]
    fn test_measure_has_positive_dimensions() {
        let size = measure("Hello World", DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE);
        assert!(size.width() > 0.0, "width should be positive");
        assert!(size.height() > 0.0, "height should be positive");
    }

    #[test]
    fn test_measure_longer_text_is_wider() {
        let short = measure("loop", DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE);
        let long = measure(
            "a considerably longer frame caption",
            DEFAULT_FONT_FAMILY,
            DEFAULT_FONT_SIZE,
        );
        assert!(
            long.width() > short.width(),
            "longer text ({}) should measure wider than shorter text ({})",
            long.width(),
            short.width()
        );
    }

    #[test]
    fn test_measure_larger_font_is_larger() {
        let small = measure("alt", DEFAULT_FONT_FAMILY, 12);
        let large = measure("alt", DEFAULT_FONT_FAMILY, 24);
        assert!(large.width() > small.width());
        assert!(large.height() > small.height());
    }
}
