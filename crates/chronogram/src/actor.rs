//! Actor drawing: header box, avatar icon, and lifeline.

use log::debug;
use svg::node::element as svg_element;

use chronogram_core::{
    apply_stroke,
    color::Color,
    draw::{
        ActorKind, LayeredOutput, RectSpec, RenderLayer, StrokeDefinition, draw_icon, place_text,
    },
};

use crate::{config::RenderConfig, error::ChronogramError, session::RenderSession};

/// Where a lifeline starts, just under the top of the document.
const LIFELINE_TOP: f32 = 5.0;

/// How far down a lifeline extends; the consuming layout clips or trims it.
const LIFELINE_BOTTOM: f32 = 2000.0;

/// Draws an actor at the given left offset and vertical position.
///
/// A vertical position of zero marks the actor's topmost (header) occurrence:
/// only then is the full-height lifeline drawn, carrying the session's next
/// sequential id. The header box is a rounded rectangle; when icons are
/// enabled and the role is registered in the configuration, the box gets the
/// icon background and artwork, and the description is pulled down to clear
/// it. The description is centered with the configured placement strategy.
///
/// # Errors
///
/// Fails only if the configured icon background color cannot be parsed.
pub fn draw_actor(
    session: &mut RenderSession,
    config: &RenderConfig,
    left: f32,
    vertical_pos: f32,
    description: &str,
    role: Option<ActorKind>,
) -> Result<LayeredOutput, ChronogramError> {
    debug!(left, vertical_pos; "drawing actor");

    let mut output = LayeredOutput::new();
    let center = left + config.width() / 2.0;

    if vertical_pos == 0.0 {
        let stroke = StrokeDefinition::new(
            Color::new("#999").expect("lifeline stroke is a valid color"),
            0.5,
        );
        let line = svg_element::Line::new()
            .set("id", session.next_lifeline_id())
            .set("x1", center)
            .set("y1", LIFELINE_TOP)
            .set("x2", center)
            .set("y2", LIFELINE_BOTTOM)
            .set("class", "actor-line");
        let line = apply_stroke!(line, &stroke);
        output.add_to_layer(RenderLayer::Lifeline, Box::new(line));
    }

    let mut rect = RectSpec::note();
    rect.x = left;
    rect.y = vertical_pos;
    rect.fill = Color::new("#eaeaea").expect("actor fill is a valid color");
    rect.width = config.width();
    rect.height = config.height();
    rect.class = Some("actor".to_string());
    rect.rx = 3.0;
    rect.ry = 3.0;

    let icons = config.actor_icons();
    let mut text_y = rect.y;

    match role.filter(|kind| icons.enabled_for(*kind)) {
        Some(kind) => {
            rect.class = Some("actor-image".to_string());
            if let Some(background) = icons.background()? {
                rect.fill = background;
            }
            output.add_to_layer(RenderLayer::Content, Box::new(rect.to_svg()));
            output.add_to_layer(
                RenderLayer::Content,
                Box::new(draw_icon(kind, &rect, icons.offset())),
            );
            // Clear the artwork before centering the description.
            text_y += icons.text_pull();
        }
        None => {
            output.add_to_layer(RenderLayer::Content, Box::new(rect.to_svg()));
        }
    }

    let placed = place_text(
        config.text_placement(),
        description,
        rect.x,
        text_y,
        rect.width,
        rect.height,
        Some("actor"),
    );
    output.add_to_layer(RenderLayer::Text, placed);

    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chronogram_core::draw::TextPlacement;

    use super::*;
    use crate::config::IconConfig;

    fn render(output: LayeredOutput) -> String {
        output.render().iter().map(|n| n.to_string()).collect()
    }

    fn icon_config(roles: &[ActorKind]) -> RenderConfig {
        let roles = roles.iter().map(|kind| (*kind, true)).collect();
        let icons = IconConfig::new(true, Some("#f4f4f4".to_string()), roles);
        RenderConfig::new(150.0, 65.0, 10.0, TextPlacement::Tspan, icons)
    }

    #[test]
    fn test_header_actor_draws_lifeline_with_sequential_ids() {
        let mut session = RenderSession::new();
        let config = RenderConfig::default();

        let first = render(draw_actor(&mut session, &config, 0.0, 0.0, "Alice", None).unwrap());
        assert!(first.contains("id=\"actor0\""));
        assert!(first.contains("class=\"actor-line\""));
        // Lifeline sits at the box's horizontal center.
        assert!(first.contains("x1=\"75\""));

        let second = render(draw_actor(&mut session, &config, 200.0, 0.0, "Bob", None).unwrap());
        assert!(second.contains("id=\"actor1\""));
        assert_eq!(session.lifelines_issued(), 2);
    }

    #[test]
    fn test_repeated_actor_skips_lifeline() {
        let mut session = RenderSession::new();
        let config = RenderConfig::default();

        let repeated =
            render(draw_actor(&mut session, &config, 0.0, 480.0, "Alice", None).unwrap());
        assert!(!repeated.contains("<line"));
        assert_eq!(session.lifelines_issued(), 0);
    }

    #[test]
    fn test_plain_actor_is_one_rect_and_one_text() {
        let mut session = RenderSession::new();
        let config = RenderConfig::default();

        let rendered =
            render(draw_actor(&mut session, &config, 0.0, 120.0, "Alice", None).unwrap());
        assert_eq!(rendered.matches("<rect").count(), 1);
        assert_eq!(rendered.matches("<text").count(), 1);
        assert!(!rendered.contains("<image"));
        assert!(rendered.contains("class=\"actor\""));
        assert!(!rendered.contains("actor-image"));
    }

    #[test]
    fn test_icon_actor_draws_artwork_and_shifts_description() {
        let mut session = RenderSession::new();
        let config = icon_config(&[ActorKind::Consumer]);

        let rendered = render(
            draw_actor(
                &mut session,
                &config,
                0.0,
                120.0,
                "Consumer",
                Some(ActorKind::Consumer),
            )
            .unwrap(),
        );
        assert!(rendered.contains("class=\"actor-image\""));
        assert!(rendered.contains("<svg"));
        assert!(rendered.contains("translate(62, 130)"));

        // Tspan placement centers at y + height/2; the pull-down moves it
        // from 152.5 to 192.5.
        assert!(rendered.contains("y=\"192.5\""));

        let plain = render(
            draw_actor(&mut session, &RenderConfig::default(), 0.0, 120.0, "Consumer", None)
                .unwrap(),
        );
        assert!(plain.contains("y=\"152.5\""));
    }

    #[test]
    fn test_unregistered_role_falls_back_to_plain_box() {
        let mut session = RenderSession::new();
        let config = icon_config(&[ActorKind::Consumer]);

        let rendered = render(
            draw_actor(
                &mut session,
                &config,
                0.0,
                120.0,
                "Acquirer",
                Some(ActorKind::Bank),
            )
            .unwrap(),
        );
        assert!(!rendered.contains("actor-image"));
        assert!(!rendered.contains("<svg"));
        assert_eq!(rendered.matches("<rect").count(), 1);
    }

    #[test]
    fn test_bad_background_color_is_an_error() {
        let mut session = RenderSession::new();
        let roles = HashMap::from([(ActorKind::Server, true)]);
        let icons = IconConfig::new(true, Some("not-a-color".to_string()), roles);
        let config = RenderConfig::new(150.0, 65.0, 10.0, TextPlacement::Tspan, icons);

        let result = draw_actor(
            &mut session,
            &config,
            0.0,
            120.0,
            "API",
            Some(ActorKind::Server),
        );
        assert!(matches!(result, Err(ChronogramError::InvalidColor(_))));
    }
}
