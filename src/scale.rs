//! Scale functions for data-to-screen mappings.
//!
//! Each axis is rescaled independently with an affine transform from the
//! observed data extent onto `[0, width]` or `[0, height]`. Screen units on
//! the two axes are not comparable; no aspect ratio is preserved.

use tracing::debug;

use crate::geometry::{Bounds, Point};

/// Map `t` from the range `[in_start, in_end]` onto `[out_start, out_end]`.
///
/// Values outside the input range are extrapolated, not clamped. The result
/// is exact at both ends: `in_start` maps to `out_start` and `in_end` maps to
/// `out_end`. When `in_start == in_end` the result is not finite.
///
/// ```
/// use ascii_plot::scale::map_range;
///
/// assert_eq!(map_range(-2.0, 2.0, 0.0, 80.0, 0.0), 40.0);
/// assert_eq!(map_range(-2.0, 2.0, 0.0, 80.0, 2.0), 80.0);
/// ```
#[must_use]
pub fn map_range(in_start: f64, in_end: f64, out_start: f64, out_end: f64, t: f64) -> f64 {
    out_start + (out_end - out_start) * ((t - in_start) / (in_end - in_start))
}

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
///
/// A degenerate domain (`min == max`) places every value at the middle of
/// the range instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Create a new linear scale.
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    /// True when the domain collapses to a single value.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.domain_min == self.domain_max
    }

    /// Midpoint of the range.
    #[must_use]
    pub fn range_mid(&self) -> f64 {
        self.range_min + (self.range_max - self.range_min) / 2.0
    }

    /// Invert the scale (range to domain).
    ///
    /// A degenerate scale inverts every value to its single domain value.
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.domain_min;
        }
        map_range(self.range_min, self.range_max, self.domain_min, self.domain_max, value)
    }

    /// Position of `value` within the domain, 0.0 at `min` and 1.0 at `max`.
    fn fraction(&self, value: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if span.is_finite() {
            return (value - self.domain_min) / span;
        }
        // span overflowed f64; halving is exact and brings it back in range
        (value / 2.0 - self.domain_min / 2.0) / (self.domain_max / 2.0 - self.domain_min / 2.0)
    }
}

impl Scale<f64, f64> for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.range_mid();
        }
        self.range_min + (self.range_max - self.range_min) * self.fraction(value)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}

/// Maps input points into screen space `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapper {
    x: LinearScale,
    y: LinearScale,
}

impl ScreenMapper {
    /// Create a mapper from data bounds onto a `width` x `height` screen.
    #[must_use]
    pub fn new(bounds: &Bounds, width: usize, height: usize) -> Self {
        let x = LinearScale::new(bounds.x_extent(), (0.0, width as f64));
        let y = LinearScale::new(bounds.y_extent(), (0.0, height as f64));

        if !bounds.is_empty() {
            if x.is_degenerate() {
                debug!(x = bounds.min_x, "all points share one x value, centering horizontally");
            }
            if y.is_degenerate() {
                debug!(y = bounds.min_y, "all points share one y value, centering vertically");
            }
        }

        Self { x, y }
    }

    /// Map one input point to screen space.
    #[must_use]
    pub fn map(&self, p: Point) -> Point {
        Point::new(self.x.scale(p.x), self.y.scale(p.y))
    }

    /// Map a point sequence, preserving order and count.
    #[must_use]
    pub fn map_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.map(p)).collect()
    }
}
