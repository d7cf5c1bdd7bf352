//! Geometric primitives for plotting.
//!
//! Provides the point type shared by input and screen space, and the
//! per-axis bounds folded over a point sequence.

/// A 2D point with floating-point coordinates.
///
/// Used both for input points (arbitrary reals, as read) and for screen
/// points (rescaled into `[0, width] x [0, height]`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Minimum and maximum observed value on each axis.
///
/// Starts out empty (`+inf` minima, `-inf` maxima) and only ever widens.
/// Once at least one point is included, `min_x <= max_x` and `min_y <= max_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x seen.
    pub min_x: f64,
    /// Largest x seen.
    pub max_x: f64,
    /// Smallest y seen.
    pub min_y: f64,
    /// Largest y seen.
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    /// Bounds containing no points.
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Fold a point sequence into its bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use ascii_plot::geometry::{Bounds, Point};
    ///
    /// let b = Bounds::from_points(&[Point::new(1.0, -2.0), Point::new(-3.0, 4.0)]);
    /// assert_eq!((b.min_x, b.max_x), (-3.0, 1.0));
    /// assert_eq!((b.min_y, b.max_y), (-2.0, 4.0));
    /// ```
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        points.iter().fold(Self::EMPTY, |bounds, &p| bounds.include(p))
    }

    /// Return new bounds widened to contain `p`.
    #[must_use]
    pub fn include(self, p: Point) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            max_x: self.max_x.max(p.x),
            min_y: self.min_y.min(p.y),
            max_y: self.max_y.max(p.y),
        }
    }

    /// True when no point has been included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// The `(min, max)` pair on the x axis.
    #[must_use]
    pub const fn x_extent(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    /// The `(min, max)` pair on the y axis.
    #[must_use]
    pub const fn y_extent(&self) -> (f64, f64) {
        (self.min_y, self.max_y)
    }

    /// Check if a point lies inside the bounds (edges included).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
