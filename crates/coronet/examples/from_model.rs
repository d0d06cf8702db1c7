//! Example: Building and rendering a diagram programmatically
//!
//! This example constructs a small influence diagram directly from the
//! model types and writes the rendered SVG to a file.

use std::rc::Rc;

use coronet::{
    DiagramRenderer,
    color::Color,
    diagram::{Diagram, Edge, Node},
    draw::{ArrowDefinition, Band, BandStack, DiskDefinition},
    geometry::Point,
    identifier::Id,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building diagram from the model...\n");

    // Shared visual definitions for nodes and edges.
    let mut disk_def = DiskDefinition::new();
    disk_def.set_fill(Color::new("#f4f4f4")?);
    let disk_def = Rc::new(disk_def);

    let mut arrow_def = ArrowDefinition::new();
    arrow_def.set_color(Color::new("#333333")?);
    let arrow_def = Rc::new(arrow_def);

    // Band stacks: proportions of each node's disk area.
    let rain_bands: BandStack = [
        Band::new(0.35, Color::new("steelblue")?)?,
        Band::new(0.65, Color::new("lightsteelblue")?)?,
    ]
    .into_iter()
    .collect();

    let sprinkler_bands: BandStack = [Band::new(0.2, Color::new("goldenrod")?)?]
        .into_iter()
        .collect();

    let grass_bands: BandStack = [
        Band::new(0.6, Color::new("seagreen")?)?,
        Band::new(0.4, Color::new("palegreen")?)?,
    ]
    .into_iter()
    .collect();

    // Nodes at caller-supplied positions.
    let mut diagram = Diagram::new();
    diagram.add_node(
        Node::new(Id::new("rain"), Point::new(60.0, 40.0), 28.0)?
            .with_label("Rain")
            .with_primary(rain_bands)
            .with_definition(Rc::clone(&disk_def)),
    )?;
    diagram.add_node(
        Node::new(Id::new("sprinkler"), Point::new(220.0, 40.0), 28.0)?
            .with_label("Sprinkler")
            .with_primary(sprinkler_bands)
            .with_definition(Rc::clone(&disk_def)),
    )?;
    diagram.add_node(
        Node::new(Id::new("wet_grass"), Point::new(140.0, 180.0), 28.0)?
            .with_label("Wet grass")
            .with_primary(grass_bands)
            .with_definition(Rc::clone(&disk_def)),
    )?;

    // Edges: strength scales stroke width; one path is blocked.
    diagram.add_edge(
        Edge::new(Id::new("rain"), Id::new("wet_grass"), 0.9)?
            .with_definition(Rc::clone(&arrow_def)),
    )?;
    diagram.add_edge(
        Edge::new(Id::new("sprinkler"), Id::new("wet_grass"), 0.5)?
            .with_definition(Rc::clone(&arrow_def)),
    )?;
    diagram.add_edge(
        Edge::new(Id::new("rain"), Id::new("sprinkler"), 0.4)?
            .with_blocked(true)
            .with_definition(Rc::clone(&arrow_def)),
    )?;

    // Render to SVG.
    println!("Rendering to SVG...");
    let renderer = DiagramRenderer::default();
    let svg = renderer.render_svg(&diagram)?;

    println!("SVG generated successfully!");
    println!("SVG length: {} bytes", svg.len());

    let output_path = "from_model_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
