//! Drawable Components for Diagram Rendering
//!
//! This module provides the drawable abstractions for rendering influence
//! diagram elements: banded disk nodes, weighted arrows with blocked
//! markers, strokes, labels, and the layered SVG output they are collected
//! into.

mod arrow;
mod band;
mod disk;
mod layer;
mod stroke;
mod text;

pub use arrow::{ArrowDefinition, ArrowDrawer};
pub use band::{Band, BandSpan, BandStack, Orientation, band_spans};
pub use disk::{Disk, DiskDefinition};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle};
pub use text::{Text, TextDefinition};

use crate::geometry::Point;

/// A drawable diagram element.
///
/// Implementors render themselves into a [`LayeredOutput`] at the given
/// position; the exporter merges the outputs of all drawables and emits the
/// layers in z-order.
pub trait Drawable: std::fmt::Debug {
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
