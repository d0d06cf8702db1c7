//! Export backends for rendered diagrams.
//!
//! SVG is currently the only backend; it lives in [`svg`].

pub mod svg;

pub use self::svg::SvgExporter;
