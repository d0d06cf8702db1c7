//! Text labels for diagram nodes.
//!
//! Labels are rendered as anchored SVG `<text>` elements positioned by the
//! caller (typically centered beneath a node's disk). There is no text
//! measurement: nodes have fixed radii, so labels never influence layout.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Defines the visual style for text labels.
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in pixels.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the text color, or `None` for the SVG default.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Sets the font family.
    pub fn set_font_family(&mut self, font_family: impl Into<String>) {
        self.font_family = font_family.into();
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, font_size: u16) {
        self.font_size = font_size;
    }

    /// Sets the text color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size: 12,
            color: None,
        }
    }
}

/// A renderable text element combining content with a [`TextDefinition`].
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: String,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: impl Into<String>) -> Self {
        Self {
            definition,
            content: content.into(),
        }
    }

    /// Returns the text content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut text = svg_element::Text::new(self.content.clone())
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(color) = self.definition.color() {
            text = text.set("fill", color.to_string());
        }

        output.add_to_layer(RenderLayer::Text, Box::new(text));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let definition = TextDefinition::default();
        assert_eq!(definition.font_family(), "sans-serif");
        assert_eq!(definition.font_size(), 12);
        assert!(definition.color().is_none());
    }

    #[test]
    fn test_text_render() {
        let mut definition = TextDefinition::new();
        definition.set_font_size(14);
        definition.set_color(Some(Color::new("navy").unwrap()));

        let text = Text::new(&definition, "Rain");
        let output = text.render_to_layers(Point::new(40.0, 80.0));

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered.contains("Rain"));
        assert!(rendered.contains("text-anchor"));
        assert!(rendered.contains("navy"));
        assert!(rendered.contains(r#"data-layer="text""#));
    }

    #[test]
    fn test_text_content_accessor() {
        let definition = TextDefinition::default();
        let text = Text::new(&definition, "Sprinkler");
        assert_eq!(text.content(), "Sprinkler");
    }
}
