//! Configuration types for Coronet diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are styled. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining band and style settings.
//! - [`BandConfig`] - Controls the default band [`Orientation`] for disk nodes.
//! - [`StyleConfig`] - Controls visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use coronet::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use coronet_core::{color::Color, draw::Orientation};

/// Top-level application configuration combining band and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Band configuration section.
    #[serde(default)]
    bands: BandConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified band and style
    /// configurations.
    pub fn new(bands: BandConfig, style: StyleConfig) -> Self {
        Self { bands, style }
    }

    /// Returns the band configuration.
    pub fn bands(&self) -> &BandConfig {
        &self.bands
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Band stacking configuration for disk nodes.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BandConfig {
    /// Default [`Orientation`] for band stacks.
    #[serde(default)]
    orientation: Orientation,
}

impl BandConfig {
    /// Creates a new [`BandConfig`] with the specified orientation.
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    /// Returns the default band [`Orientation`].
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Controls appearance options such as background color. Fields that are
/// not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background [`Color`] for diagrams, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.bands().orientation(), Orientation::Vertical);
        assert_eq!(config.style().background_color().unwrap(), None);
    }

    #[test]
    fn test_deserialize_config() {
        let json = r##"{
            "bands": { "orientation": "horizontal" },
            "style": { "background_color": "#fafafa" }
        }"##;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.bands().orientation(), Orientation::Horizontal);
        assert!(config.style().background_color().unwrap().is_some());
    }

    #[test]
    fn test_invalid_background_color_is_reported() {
        let json = r#"{ "style": { "background_color": "no-such-color" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(config.style().background_color().is_err());
    }
}
