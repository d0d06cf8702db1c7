//! Proportion-weighted color bands stacked inside a disk node.
//!
//! A [`Band`] declares a fraction of the disk's *area* and a fill color. A
//! [`BandStack`] is an ordered sequence of bands growing inward from one
//! disk edge; [`band_spans`] converts a stack into concrete linear extents
//! using the area-partition engine, so a band's on-screen area matches its
//! declared proportion.
//!
//! Each disk carries up to two stacks: a primary stack growing from one
//! edge and a secondary stack growing from the opposite edge, selected by
//! [`Orientation`]. The stacks are independent; if their combined
//! proportions exceed 1 they overlap and the last-drawn wins.

use std::str::FromStr;

use serde::Deserialize;

use crate::{color::Color, error::GeometryError, partition::height_for_fraction};

/// Bands with a proportion below this threshold are not emitted.
const MIN_PROPORTION: f32 = 0.001;

/// Spans thinner than this many units are not emitted.
///
/// Together with [`MIN_PROPORTION`] this is a rendering-fidelity tradeoff,
/// not a correctness requirement: sub-pixel slivers add document weight
/// without being visible.
const MIN_EXTENT: f32 = 0.5;

/// Axis along which band stacks grow inside a disk.
///
/// `Vertical` stacks grow from the bottom (primary) and top (secondary)
/// edges; `Horizontal` stacks grow from the left (primary) and right
/// (secondary) edges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            _ => Err(format!(
                "invalid orientation `{s}`, valid values: vertical, horizontal"
            )),
        }
    }
}

/// A proportion-weighted colored region stacked inside a node's disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    proportion: f32,
    fill: Color,
}

impl Band {
    /// Creates a band covering the given fraction of the disk's area.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidProportion`] unless the proportion
    /// is a finite value in `[0, 1]`. Out-of-range proportions are caller
    /// misuse, not something to clamp silently.
    pub fn new(proportion: f32, fill: Color) -> Result<Self, GeometryError> {
        if !proportion.is_finite() || !(0.0..=1.0).contains(&proportion) {
            return Err(GeometryError::InvalidProportion(proportion));
        }
        Ok(Self { proportion, fill })
    }

    /// Returns the declared area fraction of this band.
    pub fn proportion(&self) -> f32 {
        self.proportion
    }

    /// Returns the fill color of this band.
    pub fn fill(&self) -> Color {
        self.fill
    }
}

/// An ordered sequence of bands growing inward from one disk edge.
///
/// Order is significant: it is the stacking order. The cumulative
/// proportion is clamped to 1 at lookup time; pushing bands beyond a total
/// of 1 is accepted and silently truncated by the inverse-area lookup.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BandStack {
    bands: Vec<Band>,
}

impl BandStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a band to the stack.
    pub fn push(&mut self, band: Band) {
        self.bands.push(band);
    }

    /// Returns the bands in stacking order.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Returns `true` if the stack contains no bands.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl FromIterator<Band> for BandStack {
    fn from_iter<I: IntoIterator<Item = Band>>(iter: I) -> Self {
        Self {
            bands: iter.into_iter().collect(),
        }
    }
}

/// A resolved linear extent for one band, measured from the stack's growth
/// edge toward the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSpan {
    start: f32,
    end: f32,
    fill: Color,
}

impl BandSpan {
    /// Distance from the growth edge where this span begins.
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Distance from the growth edge where this span ends.
    pub fn end(&self) -> f32 {
        self.end
    }

    /// Thickness of this span along the stacking axis.
    pub fn extent(&self) -> f32 {
        self.end - self.start
    }

    /// Fill color of the band this span renders.
    pub fn fill(&self) -> Color {
        self.fill
    }
}

/// Resolves a band stack into linear spans for a disk of the given radius.
///
/// A single fold with accumulator `(cumulative_fraction, previous_extent)`:
/// each band advances the cumulative fraction (clamped to 1 before the
/// inverse-area lookup) and spans from the previous extent to the new one.
/// Spans below the visibility thresholds are dropped from the output but
/// still advance the accumulator, so later bands stay area-accurate.
pub fn band_spans(stack: &BandStack, radius: f32) -> Vec<BandSpan> {
    let mut spans = Vec::with_capacity(stack.bands().len());
    let mut cumulative = 0.0_f32;
    let mut previous_extent = 0.0_f32;

    for band in stack.bands() {
        cumulative += band.proportion();
        let extent = height_for_fraction(cumulative.min(1.0), radius);

        if band.proportion() >= MIN_PROPORTION && extent - previous_extent >= MIN_EXTENT {
            spans.push(BandSpan {
                start: previous_extent,
                end: extent,
                fill: band.fill(),
            });
        }

        previous_extent = extent;
    }

    spans
}
