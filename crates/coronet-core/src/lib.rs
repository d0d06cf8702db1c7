//! Coronet Core Types and Definitions
//!
//! This crate provides the foundational types for rendering Coronet influence
//! diagrams. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types and line padding ([`geometry`] module)
//! - **Partition**: The disk area-partition engine ([`partition`] module)
//! - **Draw**: Visual definitions for diagram elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod identifier;
pub mod partition;

pub use error::GeometryError;
