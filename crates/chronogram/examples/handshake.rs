//! Example: assembling a small payment handshake scene.
//!
//! This example plays the role of the layout orchestrator: it picks
//! coordinates by hand, calls the drawers, and folds their output into an
//! `svg::Document` together with the marker definitions a message line
//! references.

use std::collections::HashMap;

use svg::node::element as svg_element;

use chronogram::{
    FrameSpec, RenderSession,
    config::{IconConfig, RenderConfig},
    draw::{ActorKind, LayeredOutput, MarkerKind, TextPlacement},
    draw_activation, draw_actor, draw_frame,
    geometry::{Bounds, Point},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let roles = HashMap::from([(ActorKind::Consumer, true), (ActorKind::Server, true)]);
    let icons = IconConfig::new(true, Some("#f4f4f4".to_string()), roles);
    let config = RenderConfig::new(150.0, 65.0, 10.0, TextPlacement::Tspan, icons);

    let mut session = RenderSession::new();
    let mut output = LayeredOutput::new();

    // Two header actors, 250 units apart.
    output.merge(draw_actor(
        &mut session,
        &config,
        0.0,
        0.0,
        "Consumer",
        Some(ActorKind::Consumer),
    )?);
    output.merge(draw_actor(
        &mut session,
        &config,
        250.0,
        0.0,
        "API Server",
        Some(ActorKind::Server),
    )?);

    // The server is busy while answering.
    let activation = Bounds::from_corners(Point::new(320.0, 140.0), Point::new(330.0, 260.0));
    output.merge(draw_activation(activation, 240.0, 0));

    // A retry loop around the exchange.
    let frame = FrameSpec {
        bounds: Bounds::from_corners(Point::new(-20.0, 110.0), Point::new(420.0, 280.0)),
        title: "loop".to_string(),
        sections: vec![200.0],
        section_titles: vec!["until authorized".to_string()],
    };
    output.merge(draw_frame(&config, &frame));

    // Marker definitions land once in <defs>; message lines reference them.
    let defs = svg_element::Definitions::new()
        .add(MarkerKind::Arrowhead.definition())
        .add(MarkerKind::SequenceNumber.definition())
        .add(MarkerKind::Crosshead.definition());

    let request = svg_element::Line::new()
        .set("x1", 75)
        .set("y1", 150)
        .set("x2", 320)
        .set("y2", 150)
        .set("stroke", "black")
        .set("marker-end", MarkerKind::Arrowhead.url());

    let mut document = svg::Document::new()
        .set("viewBox", "-40 -10 500 320")
        .add(defs);
    for node in output.render() {
        document = document.add(node);
    }
    document = document.add(request);

    svg::save("handshake.svg", &document)?;
    println!("wrote handshake.svg");

    Ok(())
}
