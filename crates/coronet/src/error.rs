//! Error types for Coronet operations.
//!
//! This module provides the main error type [`CoronetError`] which wraps
//! the error conditions that can occur while building and rendering a
//! diagram. All of them indicate caller misuse or an I/O failure; the
//! render path itself has no recoverable error states.

use std::io;

use thiserror::Error;

use coronet_core::{GeometryError, identifier::Id};

/// The main error type for Coronet operations.
#[derive(Debug, Error)]
pub enum CoronetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("invalid edge strength {0}: must lie in [0, 1]")]
    InvalidStrength(f32),

    #[error("edge references unknown node `{0}`")]
    UnknownNode(Id),

    #[error("edge from `{0}` to itself has no direction")]
    SelfEdge(Id),

    #[error("duplicate node id `{0}`")]
    DuplicateNode(Id),

    #[error("invalid configuration: {0}")]
    Config(String),
}
