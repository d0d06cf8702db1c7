//! Banded disk nodes.
//!
//! A node is a circular disk subdivided into color bands whose areas match
//! their declared proportions. This module provides [`Disk`] (validated
//! center + radius) and [`DiskDefinition`] (base fill and outline style),
//! and composes the band rectangles computed by
//! [`band_spans`](crate::draw::band_spans) into clipped SVG output.
//!
//! Render order per node:
//!
//! 1. Base fill circle covering the whole disk (fallback beneath the bands)
//! 2. Band rectangles for the primary then secondary stack, clipped to the
//!    disk boundary
//! 3. Outline circle, unclipped, to crisp the boundary

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{
        BandSpan, BandStack, LayeredOutput, Orientation, RenderLayer, StrokeDefinition, band_spans,
    },
    error::GeometryError,
    geometry::{Bounds, Point, Size},
};

/// A circular node disk: center and radius. Immutable per draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    center: Point,
    radius: f32,
}

impl Disk {
    /// Creates a disk at the given center.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRadius`] unless the radius is finite
    /// and strictly positive.
    pub fn new(center: Point, radius: f32) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the disk.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the radius of the disk.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the axis-aligned bounding box of the disk.
    pub fn bounds(&self) -> Bounds {
        self.center
            .to_bounds(Size::new(2.0 * self.radius, 2.0 * self.radius))
    }
}

/// Visual definition shared by disk nodes: base fill and outline stroke.
#[derive(Debug, Clone)]
pub struct DiskDefinition {
    fill: Color,
    stroke: StrokeDefinition,
}

impl DiskDefinition {
    /// Creates a definition with default styling (white fill, 2px black
    /// outline).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the base fill color drawn beneath the bands.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns the outline stroke definition.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Sets the base fill color.
    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    /// Sets the outline stroke.
    pub fn set_stroke(&mut self, stroke: StrokeDefinition) {
        self.stroke = stroke;
    }

    /// Renders a banded disk to layered SVG output.
    ///
    /// The primary stack grows inward from the bottom (vertical) or left
    /// (horizontal) edge; the secondary stack grows from the opposite edge.
    /// The two stacks are independent passes over the same disk: if their
    /// combined proportions exceed 1 they overlap and the secondary stack,
    /// drawn second, wins.
    ///
    /// `clip_id` must be unique per node within the document; the band
    /// rectangles are clipped to the disk boundary through it.
    pub fn render_banded(
        &self,
        disk: Disk,
        clip_id: &str,
        orientation: Orientation,
        primary: &BandStack,
        secondary: &BandStack,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let base = svg_element::Circle::new()
            .set("cx", disk.center().x())
            .set("cy", disk.center().y())
            .set("r", disk.radius())
            .set("fill", self.fill.to_string());
        output.add_to_layer(RenderLayer::Background, Box::new(base));

        let primary_spans = band_spans(primary, disk.radius());
        let secondary_spans = band_spans(secondary, disk.radius());

        if !primary_spans.is_empty() || !secondary_spans.is_empty() {
            let clip_circle = svg_element::Circle::new()
                .set("cx", disk.center().x())
                .set("cy", disk.center().y())
                .set("r", disk.radius());
            let clip_path = svg_element::ClipPath::new()
                .set("id", clip_id.to_string())
                .add(clip_circle);
            output.add_to_layer(RenderLayer::Band, Box::new(clip_path));

            let mut band_group =
                svg_element::Group::new().set("clip-path", format!("url(#{clip_id})"));
            for span in &primary_spans {
                band_group = band_group.add(span_rectangle(disk, orientation, false, span));
            }
            for span in &secondary_spans {
                band_group = band_group.add(span_rectangle(disk, orientation, true, span));
            }
            output.add_to_layer(RenderLayer::Band, Box::new(band_group));
        }

        let outline = svg_element::Circle::new()
            .set("cx", disk.center().x())
            .set("cy", disk.center().y())
            .set("r", disk.radius())
            .set("fill", "none");
        let outline = apply_stroke!(outline, &self.stroke);
        output.add_to_layer(RenderLayer::Outline, Box::new(outline));

        output
    }
}

impl Default for DiskDefinition {
    fn default() -> Self {
        Self {
            fill: Color::new("white").expect("'white' is a valid CSS color"),
            stroke: StrokeDefinition::solid(Color::default(), 2.0),
        }
    }
}

/// Computes the rectangle for one span: `(x, y, width, height)`.
///
/// `from_far_edge` selects the secondary growth edge (top for vertical,
/// right for horizontal). Rectangles span the full disk diameter across the
/// stacking axis; the clip path trims them to the circle.
fn span_rect_coords(
    disk: Disk,
    orientation: Orientation,
    from_far_edge: bool,
    span: &BandSpan,
) -> (f32, f32, f32, f32) {
    let center = disk.center();
    let r = disk.radius();

    match (orientation, from_far_edge) {
        // Primary vertical stack grows upward from the bottom edge.
        (Orientation::Vertical, false) => (
            center.x() - r,
            center.y() + r - span.end(),
            2.0 * r,
            span.extent(),
        ),
        // Secondary vertical stack grows downward from the top edge.
        (Orientation::Vertical, true) => (
            center.x() - r,
            center.y() - r + span.start(),
            2.0 * r,
            span.extent(),
        ),
        // Primary horizontal stack grows rightward from the left edge.
        (Orientation::Horizontal, false) => (
            center.x() - r + span.start(),
            center.y() - r,
            span.extent(),
            2.0 * r,
        ),
        // Secondary horizontal stack grows leftward from the right edge.
        (Orientation::Horizontal, true) => (
            center.x() + r - span.end(),
            center.y() - r,
            span.extent(),
            2.0 * r,
        ),
    }
}

fn span_rectangle(
    disk: Disk,
    orientation: Orientation,
    from_far_edge: bool,
    span: &BandSpan,
) -> svg_element::Rectangle {
    let (x, y, width, height) = span_rect_coords(disk, orientation, from_far_edge, span);
    svg_element::Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("fill", span.fill().to_string())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::Band;

    fn color(name: &str) -> Color {
        Color::new(name).unwrap()
    }

    fn single_band_stack(proportion: f32) -> BandStack {
        [Band::new(proportion, color("teal")).unwrap()]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_disk_new_validates_radius() {
        let center = Point::new(0.0, 0.0);
        assert!(Disk::new(center, 10.0).is_ok());
        assert_eq!(
            Disk::new(center, 0.0),
            Err(GeometryError::InvalidRadius(0.0))
        );
        assert_eq!(
            Disk::new(center, -3.0),
            Err(GeometryError::InvalidRadius(-3.0))
        );
        assert!(Disk::new(center, f32::NAN).is_err());
        assert!(Disk::new(center, f32::INFINITY).is_err());
    }

    #[test]
    fn test_disk_bounds() {
        let disk = Disk::new(Point::new(100.0, 50.0), 10.0).unwrap();
        let bounds = disk.bounds();
        assert_eq!(bounds.min_x(), 90.0);
        assert_eq!(bounds.min_y(), 40.0);
        assert_eq!(bounds.max_x(), 110.0);
        assert_eq!(bounds.max_y(), 60.0);
    }

    #[test]
    fn test_full_band_rect_covers_bounding_box() {
        // A single primary band of proportion 1.0 spans the whole disk
        // bounding box.
        let disk = Disk::new(Point::new(0.0, 0.0), 10.0).unwrap();
        let spans = band_spans(&single_band_stack(1.0), disk.radius());
        assert_eq!(spans.len(), 1);

        let (x, y, width, height) =
            span_rect_coords(disk, Orientation::Vertical, false, &spans[0]);
        assert_approx_eq!(f32, x, -10.0);
        assert_approx_eq!(f32, y, -10.0, epsilon = 1e-3);
        assert_approx_eq!(f32, width, 20.0);
        assert_approx_eq!(f32, height, 20.0, epsilon = 1e-3);
    }

    #[test]
    fn test_vertical_primary_grows_from_bottom() {
        let disk = Disk::new(Point::new(0.0, 0.0), 10.0).unwrap();
        let spans = band_spans(&single_band_stack(0.3), disk.radius());
        let (_, y, _, height) = span_rect_coords(disk, Orientation::Vertical, false, &spans[0]);

        // The rectangle's bottom edge sits on the disk's bottom edge.
        assert_approx_eq!(f32, y + height, 10.0, epsilon = 1e-3);
    }

    #[test]
    fn test_vertical_secondary_grows_from_top() {
        let disk = Disk::new(Point::new(0.0, 0.0), 10.0).unwrap();
        let spans = band_spans(&single_band_stack(0.3), disk.radius());
        let (_, y, _, _) = span_rect_coords(disk, Orientation::Vertical, true, &spans[0]);

        assert_approx_eq!(f32, y, -10.0);
    }

    #[test]
    fn test_horizontal_stacks_grow_from_left_and_right() {
        let disk = Disk::new(Point::new(0.0, 0.0), 10.0).unwrap();
        let spans = band_spans(&single_band_stack(0.3), disk.radius());

        let (x, _, width, height) =
            span_rect_coords(disk, Orientation::Horizontal, false, &spans[0]);
        assert_approx_eq!(f32, x, -10.0);
        assert_approx_eq!(f32, height, 20.0);

        let (x, _, width2, _) = span_rect_coords(disk, Orientation::Horizontal, true, &spans[0]);
        assert_approx_eq!(f32, x + width2, 10.0, epsilon = 1e-3);
        assert_approx_eq!(f32, width, width2);
    }

    #[test]
    fn test_render_banded_structure() {
        let disk = Disk::new(Point::new(50.0, 50.0), 20.0).unwrap();
        let definition = DiskDefinition::new();

        let primary: BandStack = [
            Band::new(0.3, color("red")).unwrap(),
            Band::new(0.2, color("blue")).unwrap(),
        ]
        .into_iter()
        .collect();
        let secondary = single_band_stack(0.25);

        let output = definition.render_banded(
            disk,
            "disk-clip-test",
            Orientation::Vertical,
            &primary,
            &secondary,
        );

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();

        // Base fill, clip path, three band rects, outline.
        assert_eq!(rendered.matches("<rect").count(), 3);
        assert_eq!(rendered.matches("<clipPath").count(), 1);
        assert!(rendered.contains("url(#disk-clip-test)"));
        // Base fill + clip circle + outline.
        assert_eq!(rendered.matches("<circle").count(), 3);
    }

    #[test]
    fn test_render_banded_without_bands_has_no_clip() {
        let disk = Disk::new(Point::new(0.0, 0.0), 10.0).unwrap();
        let output = DiskDefinition::new().render_banded(
            disk,
            "disk-clip-plain",
            Orientation::Vertical,
            &BandStack::new(),
            &BandStack::new(),
        );

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(!rendered.contains("clipPath"));
        assert_eq!(rendered.matches("<rect").count(), 0);
        // Base fill and outline are still drawn.
        assert_eq!(rendered.matches("<circle").count(), 2);
    }
}
