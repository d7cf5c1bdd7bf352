//! Character grid the scatter plot is rasterized into.
//!
//! Rows are stored bottom-up: row 0 holds the lowest screen y. Renderers
//! that print top-down walk the rows in reverse (see [`CharGrid::rows_top_down`]).

use crate::error::{Error, Result};

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nothing plotted here.
    #[default]
    Empty,
    /// At least one point maps to this cell.
    Plotted,
}

/// Fixed-size 2D grid of [`Cell`]s in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    /// Columns per row.
    width: usize,
    /// Number of rows.
    height: usize,
    cells: Vec<Cell>,
}

impl CharGrid {
    /// Create a grid of `width` columns by `height` rows, all empty.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero, or if the cell buffer
    /// cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use ascii_plot::grid::{Cell, CharGrid};
    ///
    /// let grid = CharGrid::new(81, 25).unwrap();
    /// assert_eq!(grid.width(), 81);
    /// assert_eq!(grid.height(), 25);
    /// assert_eq!(grid.get(0, 0), Some(Cell::Empty));
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = || Error::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        let count = width.checked_mul(height).ok_or_else(invalid)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|_| invalid())?;
        cells.resize(count, Cell::Empty);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Get a row of cells, bottom row first.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate over rows from the top of the plot (highest y) down.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width).rev()
    }

    /// Get the cell at column `x`, row `y`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[self.index(x, y)])
    }

    /// Set the cell at column `x`, row `y`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Reset every cell to [`Cell::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of plotted cells.
    #[must_use]
    pub fn plotted_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Plotted).count()
    }

    /// Column/row positions of every plotted cell, bottom row first.
    #[must_use]
    pub fn plotted_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == Cell::Plotted)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}
