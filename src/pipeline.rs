//! End-to-end plotting pipeline: read, map, rasterize, print.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::grid::CharGrid;
use crate::input::read_points;
use crate::output::TerminalEncoder;
use crate::plots::ScatterPlot;
use crate::theme::Theme;

/// Options for one plotting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    /// Screen width; the plot is `width + 1` characters wide inside the border.
    pub width: usize,
    /// Screen height; the plot is `height + 1` lines tall inside the border.
    pub height: usize,
    /// Markers and border characters.
    pub theme: Theme,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: ScatterPlot::DEFAULT_WIDTH,
            height: ScatterPlot::DEFAULT_HEIGHT,
            theme: Theme::default(),
        }
    }
}

/// Read every point from `input` and rasterize it.
///
/// The whole stream is consumed before anything is plotted.
///
/// # Errors
///
/// Returns the first input error; no grid is produced in that case.
pub fn plot_reader<R: BufRead>(input: R, config: &PlotConfig) -> Result<CharGrid> {
    let data = read_points(input)?;
    ScatterPlot::new().points(data.points()).dimensions(config.width, config.height).to_grid()
}

/// Read points from `input` and write the bordered plot to `output`.
///
/// Nothing is written to `output` if the input is rejected.
///
/// # Errors
///
/// Returns input errors from [`plot_reader`] and any write error.
///
/// # Example
///
/// ```
/// use ascii_plot::pipeline::{run, PlotConfig};
///
/// let config = PlotConfig { width: 2, height: 1, ..PlotConfig::default() };
/// let mut out = Vec::new();
/// run("0 0\n2 1\n".as_bytes(), &mut out, &config).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "┏━━━┓\n┃..#┃\n┃#..┃\n┗━━━┛\n");
/// ```
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, config: &PlotConfig) -> Result<()> {
    let grid = plot_reader(input, config)?;
    debug!(plotted = grid.plotted_count(), "rendering");

    TerminalEncoder::new().theme(config.theme).write_to(&grid, output)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = PlotConfig::default();
        assert_eq!((config.width, config.height), (80, 24));
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn test_plot_reader() {
        let config = PlotConfig { width: 10, height: 10, ..PlotConfig::default() };
        let grid = plot_reader("0 0\n10 10\n5 5\n".as_bytes(), &config).unwrap();
        assert_eq!(grid.plotted_cells(), vec![(0, 0), (5, 5), (10, 10)]);
    }

    #[test]
    fn test_error_writes_nothing() {
        let mut out = Vec::new();
        let err = run("1 2\n1 2 3\n".as_bytes(), &mut out, &PlotConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 2, found: 3 }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_input_default_frame() {
        let mut out = Vec::new();
        run("".as_bytes(), &mut out, &PlotConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 27);
        assert_eq!(rows[1], format!("┃{}┃", ".".repeat(81)));
        assert!(!text.contains('#'));
    }
}
