//! Coordinate input reader.
//!
//! Reads whitespace-separated `x y` pairs, one per line. Any malformed line
//! aborts the whole read; there is no skipping of bad rows.

use std::io::BufRead;

use tracing::debug;

use crate::error::{Axis, Error, Result};
use crate::geometry::{Bounds, Point};

/// Points read from an input stream, in input order, with their bounds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    points: Vec<Point>,
    bounds: Bounds,
}

impl Dataset {
    /// Build a dataset from points already in memory.
    #[must_use]
    pub fn from_points(points: Vec<Point>) -> Self {
        let bounds = Bounds::from_points(&points);
        Self { points, bounds }
    }

    /// The points in input order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Bounds over all points.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no point was read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Read every coordinate pair from `reader` until end of stream.
///
/// Blank and whitespace-only lines are skipped. Reading zero points is not
/// an error. Bytes that are not valid UTF-8 are decoded lossily, so they
/// surface as an invalid coordinate on their line.
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] for a line without exactly two tokens,
/// [`Error::InvalidCoordinate`] for a token that is not a finite number, and
/// [`Error::Io`] if the stream cannot be read.
///
/// # Example
///
/// ```
/// use ascii_plot::input::read_points;
///
/// let data = read_points("1 10\n-2 -2\n5.1 -3\n".as_bytes()).unwrap();
/// assert_eq!(data.len(), 3);
/// assert_eq!(data.bounds().x_extent(), (-2.0, 5.1));
/// ```
pub fn read_points<R: BufRead>(reader: R) -> Result<Dataset> {
    let mut points = Vec::new();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        if let Some(point) = parse_line(idx + 1, &String::from_utf8_lossy(&line))? {
            points.push(point);
        }
    }

    let data = Dataset::from_points(points);
    debug!(points = data.len(), bounds = ?data.bounds(), "read input");
    Ok(data)
}

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// See [`read_points`].
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Point>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Ok(None),
        [x, y] => {
            let x = parse_coordinate(line_no, Axis::X, x)?;
            let y = parse_coordinate(line_no, Axis::Y, y)?;
            Ok(Some(Point::new(x, y)))
        }
        _ => Err(Error::MalformedLine {
            line: line_no,
            found: tokens.len(),
        }),
    }
}

fn parse_coordinate(line: usize, axis: Axis, token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidCoordinate {
            line,
            axis,
            literal: token.to_string(),
        }),
    }
}
