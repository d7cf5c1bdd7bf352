//! Scatter plot implementation.
//!
//! Maps input points onto a `width` x `height` screen and rasterizes them
//! into a [`CharGrid`] of `(height + 1)` rows by `(width + 1)` columns.

use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::{Bounds, Point};
use crate::grid::{Cell, CharGrid};
use crate::scale::ScreenMapper;

/// Builder for creating scatter plots.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    points: Vec<Point>,
    bounds: Bounds,
    width: usize,
    height: usize,
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterPlot {
    /// Default screen width in characters.
    pub const DEFAULT_WIDTH: usize = 80;
    /// Default screen height in lines.
    pub const DEFAULT_HEIGHT: usize = 24;

    /// Create a new scatter plot builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            bounds: Bounds::EMPTY,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }

    /// Set the points to plot. Bounds are recomputed from them.
    #[must_use]
    pub fn points(mut self, points: &[Point]) -> Self {
        self.bounds = Bounds::from_points(points);
        self.points = points.to_vec();
        self
    }

    /// Set the screen extent. The grid has one more column and row than this.
    #[must_use]
    pub fn dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Get the number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Bounds over the plotted points.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The mapper from data space to screen space.
    #[must_use]
    pub fn mapper(&self) -> ScreenMapper {
        ScreenMapper::new(&self.bounds, self.width, self.height)
    }

    /// Every point rescaled into `[0, width] x [0, height]`, in input order.
    #[must_use]
    pub fn screen_points(&self) -> Vec<Point> {
        if self.points.is_empty() {
            return Vec::new();
        }
        self.mapper().map_all(&self.points)
    }

    /// Rasterize the plot into an existing grid.
    ///
    /// Screen coordinates are truncated, not rounded. Several points landing
    /// in one cell collapse into a single plotted cell.
    pub fn render(&self, grid: &mut CharGrid) {
        let max_x = grid.width() - 1;
        let max_y = grid.height() - 1;

        for p in self.screen_points() {
            debug_assert!(p.is_finite(), "mapped point {p:?} is not finite");
            let (col, row) = (to_cell(p.x, max_x), to_cell(p.y, max_y));
            trace!(x = p.x, y = p.y, col, row, "plot");
            grid.set(col, row, Cell::Plotted);
        }
    }

    /// Render to a new grid of `(height + 1)` rows by `(width + 1)` columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be allocated.
    pub fn to_grid(&self) -> Result<CharGrid> {
        let mut grid = CharGrid::new(self.width + 1, self.height + 1)?;
        debug!(columns = grid.width(), rows = grid.height(), points = self.point_count(), "rasterizing");
        self.render(&mut grid);
        Ok(grid)
    }
}

/// Truncate a screen coordinate to a cell index, clamped to `0..=max`.
fn to_cell(v: f64, max: usize) -> usize {
    // `as` saturates and sends NaN to 0
    (v.clamp(0.0, max as f64) as usize).min(max)
}
