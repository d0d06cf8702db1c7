//! Layer-based rendering system for SVG output.
//!
//! This module provides a type-safe layer system that allows drawable
//! components to specify which z-order layer their SVG elements should be
//! rendered to. Band fills must sit beneath node outlines, and edge
//! geometry beneath labels; the layer enum encodes that ordering once.
//!
//! # Overview
//!
//! The layer system consists of:
//! - [`RenderLayer`]: An enum defining available rendering layers in order
//! - [`LayeredOutput`]: A structure for collecting SVG nodes by layer
//!
//! # Example
//!
//! ```
//! # use coronet_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! let band = Rectangle::new().set("fill", "steelblue");
//! output.add_to_layer(RenderLayer::Band, Box::new(band));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 1);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant
/// declaration. The `Ord` derive uses declaration order, so the first
/// variant renders first (bottom), and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Diagram background and node base fills - renders first
    Background,
    /// Area-proportional band rectangles, clipped to their disk
    Band,
    /// Node outline circles, drawn unclipped above the bands
    Outline,
    /// Edge lines, arrowheads, and blocked-edge cancellation bars
    Arrow,
    /// Text labels
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Band => "band",
            Self::Outline => "outline",
            Self::Arrow => "arrow",
            Self::Text => "text",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// This struct collects SVG nodes and organizes them by layer. When
/// rendered, nodes are emitted in layer order (bottom to top), ensuring
/// correct z-ordering regardless of the order drawables were visited in.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes are appended to the layer in the order they are added.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    ///
    /// Nodes from the other output are appended to existing layers in this
    /// output. This is how outputs from multiple drawables are combined.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    ///
    /// An edge with strength zero renders to an empty output; the exporter
    /// uses this to skip it entirely.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a
    /// `data-layer` attribute identifying the layer. Empty layers are
    /// skipped. Layers are rendered from bottom to top based on the `Ord`
    /// implementation of `RenderLayer`.
    ///
    /// # Returns
    ///
    /// A vector of SVG group nodes, one per non-empty layer, in rendering
    /// order.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order within each layer.
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
