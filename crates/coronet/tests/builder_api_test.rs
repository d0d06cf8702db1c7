//! Integration tests for the DiagramRenderer API
//!
//! These tests verify that the public API works and is usable.

use coronet::{
    DiagramRenderer,
    color::Color,
    config::AppConfig,
    diagram::{Diagram, Edge, Node},
    draw::Band,
    geometry::Point,
    identifier::Id,
};

fn band(proportion: f32, color: &str) -> Band {
    Band::new(proportion, Color::new(color).unwrap()).unwrap()
}

fn sprinkler_diagram() -> Diagram {
    let mut diagram = Diagram::new();

    diagram
        .add_node(
            Node::new(Id::new("rain"), Point::new(0.0, 0.0), 25.0)
                .unwrap()
                .with_label("Rain")
                .with_primary([band(0.3, "steelblue"), band(0.7, "lightgray")].into_iter().collect()),
        )
        .expect("rain node");

    diagram
        .add_node(
            Node::new(Id::new("sprinkler"), Point::new(150.0, 0.0), 25.0)
                .unwrap()
                .with_label("Sprinkler")
                .with_secondary([band(0.45, "goldenrod")].into_iter().collect()),
        )
        .expect("sprinkler node");

    diagram
        .add_node(
            Node::new(Id::new("wet_grass"), Point::new(75.0, 130.0), 25.0)
                .unwrap()
                .with_label("Wet grass"),
        )
        .expect("wet grass node");

    diagram
        .add_edge(Edge::new(Id::new("rain"), Id::new("wet_grass"), 0.9).unwrap())
        .expect("rain edge");
    diagram
        .add_edge(Edge::new(Id::new("sprinkler"), Id::new("wet_grass"), 0.6).unwrap())
        .expect("sprinkler edge");

    diagram
}

#[test]
fn test_renderer_api_exists() {
    // Just verify the API compiles and can be constructed
    let _renderer = DiagramRenderer::default();
}

#[test]
fn test_render_complete_diagram() {
    let renderer = DiagramRenderer::default();
    let svg = renderer
        .render_svg(&sprinkler_diagram())
        .expect("Failed to render diagram");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("clipPath"), "Bands should be clipped");
    assert!(svg.contains("<marker"), "Arrowheads should be defined");
    assert!(svg.contains("Wet grass"), "Labels should be rendered");
}

#[test]
fn test_render_with_config() {
    let json = r#"{
        "bands": { "orientation": "horizontal" },
        "style": { "background_color": "white" }
    }"#;
    let config: AppConfig = serde_json::from_str(json).expect("valid config");

    let renderer = DiagramRenderer::new(config);
    let svg = renderer
        .render_svg(&sprinkler_diagram())
        .expect("Failed to render with config");

    assert!(svg.contains("<svg"));
    assert!(svg.contains("<rect"), "Background rectangle expected");
}

#[test]
fn test_blocked_edge_renders_dashed_with_bar() {
    let mut diagram = sprinkler_diagram();
    diagram
        .add_edge(
            Edge::new(Id::new("rain"), Id::new("sprinkler"), 0.5)
                .unwrap()
                .with_blocked(true),
        )
        .expect("blocked edge");

    let renderer = DiagramRenderer::default();
    let svg = renderer.render_svg(&diagram).expect("Failed to render");

    assert!(svg.contains("stroke-dasharray"), "Blocked edge is dashed");
    // Two active edges plus the blocked edge's line and its bar.
    assert_eq!(svg.matches("<line").count(), 4);
}

#[test]
fn test_zero_strength_edge_is_silent() {
    let mut diagram = sprinkler_diagram();
    diagram
        .add_edge(Edge::new(Id::new("wet_grass"), Id::new("rain"), 0.0).unwrap())
        .expect("zero-strength edge");

    let renderer = DiagramRenderer::default();
    let svg = renderer.render_svg(&diagram).expect("Failed to render");

    // Only the two active edges are drawn.
    assert_eq!(svg.matches("<line").count(), 2);
}

#[test]
fn test_renderer_reusability() {
    let renderer = DiagramRenderer::default();

    let svg1 = renderer
        .render_svg(&sprinkler_diagram())
        .expect("Failed to render first diagram");
    let svg2 = renderer
        .render_svg(&sprinkler_diagram())
        .expect("Failed to render second diagram");

    assert_eq!(svg1, svg2, "Identical inputs render identically");
}
