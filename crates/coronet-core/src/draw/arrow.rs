//! Edge arrows with strength-scaled strokes and blocked-state styling.
//!
//! This module renders diagram edges: a padded line capped with an
//! arrowhead marker, stroke width scaled linearly with edge strength, and
//! for blocked edges a dashed, muted stroke with a perpendicular
//! cancellation bar across the midpoint.
//!
//! Arrowhead markers are SVG `<marker>` definitions shared per stroke
//! color. [`ArrowDrawer`] collects the colors in use while edges are drawn
//! and emits the matching `<defs>` once per document, the same way node
//! clip paths are emitted per disk.

use std::collections::HashMap;

use log::debug;
use svg::{self, node::element as svg_element};

use crate::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, StrokeStyle},
    geometry::{Point, shorten_line},
};

/// Defines the visual properties of diagram edges.
///
/// An edge's stroke width is `base_width + strength * width_scale`; its
/// line is padded by `gap` past each node boundary, with additional room
/// for the arrowhead at the destination end.
#[derive(Debug, Clone)]
pub struct ArrowDefinition {
    color: Color,
    base_width: f32,
    width_scale: f32,
    gap: f32,
    head_length: f32,
    bar_half_length: f32,
    blocked_opacity: f32,
}

impl ArrowDefinition {
    /// Creates an ArrowDefinition with default values.
    /// Use setter methods to configure the edge properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stroke and arrowhead color for active edges.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width of a zero-strength edge (were it drawn).
    pub fn base_width(&self) -> f32 {
        self.base_width
    }

    /// Returns the stroke width added per unit of strength.
    pub fn width_scale(&self) -> f32 {
        self.width_scale
    }

    /// Returns the padding between a node boundary and the line end.
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Returns the length reserved for the arrowhead at the destination.
    pub fn head_length(&self) -> f32 {
        self.head_length
    }

    /// Returns half the length of the blocked-edge cancellation bar.
    pub fn bar_half_length(&self) -> f32 {
        self.bar_half_length
    }

    /// Returns the opacity applied to blocked edges.
    pub fn blocked_opacity(&self) -> f32 {
        self.blocked_opacity
    }

    /// Sets the edge color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the base stroke width.
    pub fn set_base_width(&mut self, base_width: f32) {
        self.base_width = base_width;
    }

    /// Sets the per-strength stroke width scale.
    pub fn set_width_scale(&mut self, width_scale: f32) {
        self.width_scale = width_scale;
    }

    /// Returns the stroke width for an edge of the given strength.
    pub fn stroke_width(&self, strength: f32) -> f32 {
        self.base_width + strength * self.width_scale
    }
}

impl Default for ArrowDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            base_width: 1.0,
            width_scale: 3.0,
            gap: 4.0,
            head_length: 10.0,
            bar_half_length: 7.0,
            blocked_opacity: 0.45,
        }
    }
}

/// Manages edge rendering and SVG arrowhead marker generation.
///
/// The drawer collects the stroke colors of the edges it draws so that the
/// necessary marker definitions can be emitted once, then referenced by
/// each edge via `marker-end`.
#[derive(Debug, Default)]
pub struct ArrowDrawer {
    markers: HashMap<String, Color>,
}

impl ArrowDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one edge between two disk nodes.
    ///
    /// `strength == 0` is a valid no-op: the returned output is empty and
    /// no marker is registered. Otherwise the center-to-center segment is
    /// shortened so the visible line stops short of both the node
    /// boundaries and the arrowhead, and for blocked edges a perpendicular
    /// cancellation bar is drawn across the midpoint.
    ///
    /// # Panics
    ///
    /// Panics if the two centers coincide; distinct endpoints are a caller
    /// precondition.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_edge(
        &mut self,
        definition: &ArrowDefinition,
        from_center: Point,
        to_center: Point,
        from_radius: f32,
        to_radius: f32,
        strength: f32,
        blocked: bool,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if strength == 0.0 {
            return output;
        }

        let color = if blocked {
            definition.color().with_alpha(definition.blocked_opacity())
        } else {
            definition.color()
        };
        let marker_id = self.register_marker(color);

        let (start, end) = shorten_line(
            from_center,
            to_center,
            from_radius + definition.gap(),
            to_radius + definition.gap() + definition.head_length(),
        );

        let mut stroke = StrokeDefinition::new(color, definition.stroke_width(strength));
        if blocked {
            stroke.set_style(StrokeStyle::Dashed);
        }

        let line = svg_element::Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y());
        let line = apply_stroke!(line, &stroke).set("marker-end", format!("url(#{marker_id})"));
        output.add_to_layer(RenderLayer::Arrow, Box::new(line));

        if blocked {
            output.add_to_layer(
                RenderLayer::Arrow,
                Box::new(blocked_bar(definition, &stroke, start, end)),
            );
        }

        output
    }

    /// Generates SVG marker definitions for all collected colors.
    pub fn marker_definitions(&self) -> Box<dyn svg::Node> {
        let mut defs = svg_element::Definitions::new();
        // Deterministic output: markers sorted by id.
        let mut ids: Vec<&String> = self.markers.keys().collect();
        ids.sort();
        for id in ids {
            defs = defs.add(arrowhead_marker(id, self.markers[id]));
        }
        defs.into()
    }

    /// Returns `true` if no edge has registered a marker yet.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    fn register_marker(&mut self, color: Color) -> String {
        let id = marker_id(color);
        if self.markers.insert(id.clone(), color).is_none() {
            debug!(marker_id = id.as_str(); "Registered arrowhead marker");
        }
        id
    }
}

/// Marker ids carry the color and its alpha so active and blocked edges of
/// the same palette color resolve to distinct arrowheads.
fn marker_id(color: Color) -> String {
    format!(
        "arrowhead-{}-a{}",
        color.to_id_safe_string(),
        (color.alpha() * 100.0).round() as u32
    )
}

fn arrowhead_marker(id: &str, color: Color) -> svg_element::Marker {
    svg_element::Marker::new()
        .set("id", id)
        .set("viewBox", "0 0 10 10")
        .set("refX", 9)
        .set("refY", 5)
        .set("markerWidth", 6)
        .set("markerHeight", 6)
        .set("orient", "auto")
        .add(
            svg_element::Path::new()
                .set("d", "M 0 0 L 10 5 L 0 10 z")
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha()),
        )
}

/// The cancellation mark across a blocked edge: a short bar through the
/// padded segment's midpoint, perpendicular to the edge direction.
fn blocked_bar(
    definition: &ArrowDefinition,
    line_stroke: &StrokeDefinition,
    start: Point,
    end: Point,
) -> svg_element::Line {
    let midpoint = start.midpoint(end);
    let offset = end
        .sub_point(start)
        .unit_perpendicular()
        .scale(definition.bar_half_length());
    let bar_start = midpoint.add_point(offset);
    let bar_end = midpoint.sub_point(offset);

    // Same color and width as the line, but always solid.
    let bar_stroke = StrokeDefinition::new(line_stroke.color(), line_stroke.width());

    let bar = svg_element::Line::new()
        .set("x1", bar_start.x())
        .set("y1", bar_start.y())
        .set("x2", bar_end.x())
        .set("y2", bar_end.y());
    apply_stroke!(bar, &bar_stroke)
}
