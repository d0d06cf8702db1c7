//! SVG document assembly.
//!
//! [`SvgExporter`] walks a [`Diagram`] and produces a complete
//! `svg::Document`: arrowhead marker definitions, an optional background
//! rectangle, then the merged layered output of every node and edge,
//! emitted bottom-to-top. The viewBox is computed from the merged node
//! bounds plus a fixed margin.

use log::debug;
use svg::Document;
use svg::node::element as svg_element;

use coronet_core::{
    color::Color,
    draw::{ArrowDrawer, Drawable, LayeredOutput, Orientation, Text, TextDefinition},
    geometry::{Bounds, Point},
};

use crate::{
    diagram::{Diagram, Node},
    error::CoronetError,
};

/// Margin added around the diagram content on every side.
const MARGIN: f32 = 50.0;

/// Vertical distance from a disk's bottom edge to its label baseline.
const LABEL_OFFSET: f32 = 16.0;

/// Renders diagrams to SVG documents.
pub struct SvgExporter {
    orientation: Orientation,
    background: Option<Color>,
    text_definition: TextDefinition,
}

impl SvgExporter {
    /// Creates an exporter with the given band orientation and optional
    /// background color.
    pub fn new(orientation: Orientation, background: Option<Color>) -> Self {
        Self {
            orientation,
            background,
            text_definition: TextDefinition::default(),
        }
    }

    /// Renders a diagram to a complete SVG document.
    ///
    /// The render is pure with respect to the diagram: repeated calls with
    /// the same input produce identical documents.
    ///
    /// # Errors
    ///
    /// Returns [`CoronetError::UnknownNode`] if an edge references a node
    /// that is not in the diagram.
    pub fn render_document(&self, diagram: &Diagram) -> Result<Document, CoronetError> {
        let mut arrow_drawer = ArrowDrawer::new();
        let mut output = LayeredOutput::new();

        for node in diagram.nodes() {
            output.merge(self.render_node(node));
        }
        debug!(node_count = diagram.nodes().count(); "Nodes rendered");

        let mut drawn_edges = 0;
        for edge in diagram.edges() {
            let from = diagram
                .node(edge.from())
                .ok_or(CoronetError::UnknownNode(edge.from()))?;
            let to = diagram
                .node(edge.to())
                .ok_or(CoronetError::UnknownNode(edge.to()))?;

            let edge_output = arrow_drawer.draw_edge(
                edge.definition(),
                from.disk().center(),
                to.disk().center(),
                from.disk().radius(),
                to.disk().radius(),
                edge.strength(),
                edge.blocked(),
            );
            if !edge_output.is_empty() {
                drawn_edges += 1;
            }
            output.merge(edge_output);
        }
        debug!(edge_count = diagram.edges().len(), drawn_edges = drawn_edges; "Edges rendered");

        let bounds = diagram_bounds(diagram).expand(MARGIN);
        let mut document = Document::new()
            .set(
                "viewBox",
                (bounds.min_x(), bounds.min_y(), bounds.width(), bounds.height()),
            )
            .set("width", bounds.width())
            .set("height", bounds.height());

        if !arrow_drawer.is_empty() {
            document = document.add(arrow_drawer.marker_definitions());
        }

        if let Some(background) = self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("fill", background.to_string());
            document = document.add(rect);
        }

        for layer_group in output.render() {
            document = document.add(layer_group);
        }

        Ok(document)
    }

    fn render_node(&self, node: &Node) -> LayeredOutput {
        let disk = node.disk();
        let clip_id = format!("disk-clip-{}", node.id().to_id_safe_string());

        let mut output = node.definition().render_banded(
            disk,
            &clip_id,
            self.orientation,
            node.primary(),
            node.secondary(),
        );

        if let Some(label) = node.label() {
            let anchor = Point::new(
                disk.center().x(),
                disk.center().y() + disk.radius() + LABEL_OFFSET,
            );
            let text = Text::new(&self.text_definition, label);
            output.merge(text.render_to_layers(anchor));
        }

        output
    }
}

/// The union of all node disk bounds, or a zero-sized bounds for an empty
/// diagram.
fn diagram_bounds(diagram: &Diagram) -> Bounds {
    diagram
        .nodes()
        .map(|node| node.disk().bounds())
        .reduce(|acc, bounds| acc.merge(&bounds))
        .unwrap_or_default()
}
