//! Activation box drawing.
//!
//! An activation box overlays a lifeline for the span during which the actor
//! is actively processing. Nested activations on the same lifeline are told
//! apart visually by cycling through three style classes with nesting depth.

use chronogram_core::{
    draw::{LayeredOutput, RectSpec, RenderLayer},
    geometry::Bounds,
};

/// Returns the style class for an activation at the given nesting depth:
/// `activation0`, `activation1`, or `activation2`.
pub fn activation_class(depth: u32) -> String {
    format!("activation{}", depth % 3)
}

/// Draws an activation box spanning the bounds horizontally, from the
/// bounds' top edge down to `stop_y`.
pub fn draw_activation(bounds: Bounds, stop_y: f32, depth: u32) -> LayeredOutput {
    let mut rect = RectSpec::note();
    rect.x = bounds.min_x();
    rect.y = bounds.min_y();
    rect.width = bounds.max_x() - bounds.min_x();
    rect.height = stop_y - bounds.min_y();
    rect.class = Some(activation_class(depth));

    let mut output = LayeredOutput::new();
    output.add_to_layer(RenderLayer::Activation, Box::new(rect.to_svg()));
    output
}

#[cfg(test)]
mod tests {
    use chronogram_core::geometry::{Point, Size};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_activation_class_cycles() {
        assert_eq!(activation_class(0), "activation0");
        assert_eq!(activation_class(1), "activation1");
        assert_eq!(activation_class(2), "activation2");
        assert_eq!(activation_class(3), "activation0");
        assert_eq!(activation_class(7), "activation1");
    }

    #[test]
    fn test_draw_activation_geometry() {
        let bounds =
            Bounds::new_from_top_left(Point::new(95.0, 100.0), Size::new(10.0, 300.0));
        let rendered: String = draw_activation(bounds, 240.0, 0)
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert!(rendered.contains("x=\"95\""));
        assert!(rendered.contains("y=\"100\""));
        assert!(rendered.contains("width=\"10\""));
        // Height follows the stop coordinate, not the bounds' own bottom.
        assert!(rendered.contains("height=\"140\""));
        assert!(rendered.contains("class=\"activation0\""));
        assert!(rendered.contains("data-layer=\"activation\""));
    }

    proptest! {
        /// The class is always one of exactly three values, for any depth.
        #[test]
        fn activation_class_is_always_one_of_three(depth in any::<u32>()) {
            let class = activation_class(depth);
            prop_assert!(
                class == "activation0" || class == "activation1" || class == "activation2"
            );
        }

        /// Consecutive depths never share a class.
        #[test]
        fn consecutive_depths_differ(depth in 0u32..10_000) {
            prop_assert_ne!(activation_class(depth), activation_class(depth + 1));
        }
    }
}
