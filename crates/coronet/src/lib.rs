//! Coronet - Render influence diagrams with area-proportional disk nodes.
//!
//! A Coronet diagram is a directed graph drawn as SVG: each node is a
//! circular disk subdivided into color bands whose *areas* encode
//! proportions of a categorical quantity, and each edge is an arrow whose
//! stroke width encodes strength and whose style encodes a blocked/active
//! state. Node positions are supplied by the caller; Coronet does no graph
//! layout.

pub mod config;
pub mod diagram;

mod error;
mod export;

pub use coronet_core::{color, draw, geometry, identifier, partition};

pub use error::CoronetError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use config::AppConfig;
use diagram::Diagram;
use export::SvgExporter;

/// Renders [`Diagram`]s to SVG under a given configuration.
///
/// # Examples
///
/// ```
/// use coronet::{DiagramRenderer, diagram::{Diagram, Node, Edge}};
/// use coronet::geometry::Point;
/// use coronet::identifier::Id;
///
/// let mut diagram = Diagram::new();
/// diagram.add_node(Node::new(Id::new("a"), Point::new(0.0, 0.0), 20.0)?)?;
/// diagram.add_node(Node::new(Id::new("b"), Point::new(120.0, 0.0), 20.0)?)?;
/// diagram.add_edge(Edge::new(Id::new("a"), Id::new("b"), 0.8)?)?;
///
/// let renderer = DiagramRenderer::default();
/// let svg = renderer.render_svg(&diagram)?;
/// assert!(svg.contains("<svg"));
/// # Ok::<(), coronet::CoronetError>(())
/// ```
#[derive(Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render a diagram to an SVG string.
    ///
    /// Rendering is side-effect free and idempotent: repeated calls with
    /// the same diagram produce identical output.
    ///
    /// # Errors
    ///
    /// Returns [`CoronetError`] for invalid configuration or a diagram
    /// whose edges reference unknown nodes.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, CoronetError> {
        info!("Rendering diagram to SVG");
        trace!(diagram:?; "Diagram model");

        let background = self
            .config
            .style()
            .background_color()
            .map_err(CoronetError::Config)?;
        let orientation = self.config.bands().orientation();

        let exporter = SvgExporter::new(orientation, background);
        let document = exporter.render_document(diagram)?;

        debug!("SVG document assembled");
        Ok(document.to_string())
    }

    /// Render a diagram and write the SVG to a file.
    ///
    /// # Errors
    ///
    /// Returns [`CoronetError::Io`] if the file cannot be written, or any
    /// error from [`render_svg`](Self::render_svg).
    pub fn render_to_file(
        &self,
        diagram: &Diagram,
        path: impl AsRef<Path>,
    ) -> Result<(), CoronetError> {
        let svg = self.render_svg(diagram)?;
        info!(path = path.as_ref().display().to_string(); "Writing SVG file");
        fs::write(path, svg)?;
        Ok(())
    }
}
