//! Error types for geometric precondition violations.
//!
//! These errors are raised at construction time, before any drawing happens.
//! A value that made it past its constructor is valid for every draw call:
//! the render path itself has no recoverable failure mode.

use thiserror::Error;

/// Precondition violations in diagram geometry.
///
/// Saturation inside the partition engine (fractions clamped to `[0, 1]`,
/// heights clamped to `[0, 2r]`) is part of the designed contract and does
/// not produce these errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid disk radius {0}: must be positive and finite")]
    InvalidRadius(f32),

    #[error("invalid band proportion {0}: must lie in [0, 1]")]
    InvalidProportion(f32),
}
