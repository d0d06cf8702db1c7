//! Basic geometric types and segment operations.
//!
//! Provides [`Point`], [`Size`], and [`Bounds`] plus the line-padding
//! operation [`shorten_line`] used to pull edge segments back from node
//! boundaries and arrowheads.

/// Segments shorter than this are considered degenerate: they have no
/// usable direction vector.
const DEGENERATE_LENGTH: f32 = 0.001;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the unit vector perpendicular to this one (rotated 90°
    /// counter-clockwise).
    ///
    /// # Panics
    ///
    /// Panics if this vector is shorter than the degeneracy threshold:
    /// a zero-length vector has no perpendicular.
    pub fn unit_perpendicular(self) -> Self {
        let length = self.hypot();
        assert!(
            length > DEGENERATE_LENGTH,
            "cannot take the perpendicular of a degenerate vector"
        );
        Self {
            x: -self.y / length,
            y: self.x / length,
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Merges two bounds to create a larger bounds that contains both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds outward by the given margin on every side
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}

/// Moves each endpoint of the segment `start -> end` inward along the
/// segment direction by the respective pad distance, preserving direction.
///
/// This is how edges are pulled back from node boundaries (`pad_start`) and
/// make room for arrowheads (`pad_end`).
///
/// # Panics
///
/// Panics if the endpoints coincide (segment shorter than the degeneracy
/// threshold): callers must supply distinct endpoints.
pub fn shorten_line(start: Point, end: Point, pad_start: f32, pad_end: f32) -> (Point, Point) {
    let direction = end.sub_point(start);
    let length = direction.hypot();
    assert!(
        length > DEGENERATE_LENGTH,
        "cannot shorten a degenerate segment"
    );

    let unit = direction.scale(1.0 / length);
    (
        start.add_point(unit.scale(pad_start)),
        end.sub_point(unit.scale(pad_end)),
    )
}

/// Shortens a segment by the same pad distance at both ends.
pub fn shorten_line_uniform(start: Point, end: Point, pad: f32) -> (Point, Point) {
    shorten_line(start, end, pad, pad)
}
