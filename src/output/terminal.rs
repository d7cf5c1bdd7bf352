//! Terminal output encoder.
//!
//! Renders a [`CharGrid`] as text framed by a box-drawn border. Rows are
//! printed highest-y first so the plot reads in Cartesian orientation.
//!
//! For a grid of `W` columns and `H` rows the output is `H + 2` lines, each
//! `W + 2` characters wide:
//!
//! ```text
//! ┏━━━━━┓
//! ┃....#┃
//! ┃..#..┃
//! ┃#....┃
//! ┗━━━━━┛
//! ```

use std::io::{self, Write};

use crate::grid::{Cell, CharGrid};
use crate::theme::{BorderSet, Theme};

/// Terminal encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct TerminalEncoder {
    theme: Theme,
}

impl TerminalEncoder {
    /// Create a new terminal encoder with the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render a grid to a string, one `\n`-terminated line per row.
    ///
    /// Holds the whole plot in memory; [`write_to`](Self::write_to) streams
    /// it line by line instead.
    #[must_use]
    pub fn render(&self, grid: &CharGrid) -> String {
        let mut output = String::with_capacity(self.line_capacity(grid) * (grid.height() + 2));

        let border = &self.theme.border;
        self.push_rule(&mut output, border.top_left, border.top_right, grid.width());
        for row in grid.rows_top_down() {
            self.push_row(&mut output, row);
        }
        self.push_rule(&mut output, border.bottom_left, border.bottom_right, grid.width());

        output
    }

    /// Write the bordered grid to `out`, one line at a time.
    ///
    /// Only a single line is buffered, so memory use does not grow with the
    /// number of rows.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, grid: &CharGrid, out: &mut W) -> io::Result<()> {
        let border = &self.theme.border;
        let mut line = String::with_capacity(self.line_capacity(grid));

        self.push_rule(&mut line, border.top_left, border.top_right, grid.width());
        out.write_all(line.as_bytes())?;

        for row in grid.rows_top_down() {
            line.clear();
            self.push_row(&mut line, row);
            out.write_all(line.as_bytes())?;
        }

        line.clear();
        self.push_rule(&mut line, border.bottom_left, border.bottom_right, grid.width());
        out.write_all(line.as_bytes())
    }

    /// Bytes needed for the longest output line.
    fn line_capacity(&self, grid: &CharGrid) -> usize {
        let Theme { empty, plotted, border } = self.theme;
        let cell = empty.len_utf8().max(plotted.len_utf8()).max(border.horizontal.len_utf8());
        // two border glyphs of at most 4 bytes each, plus the newline
        grid.width() * cell + 9
    }

    fn push_row(&self, output: &mut String, row: &[Cell]) {
        let vertical = self.theme.border.vertical;
        output.push(vertical);
        output.extend(row.iter().map(|&cell| self.glyph(cell)));
        output.push(vertical);
        output.push('\n');
    }

    fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.theme.empty,
            Cell::Plotted => self.theme.plotted,
        }
    }

    fn push_rule(&self, output: &mut String, left: char, right: char, width: usize) {
        let BorderSet { horizontal, .. } = self.theme.border;
        output.push(left);
        output.extend(std::iter::repeat(horizontal).take(width));
        output.push(right);
        output.push('\n');
    }
}
