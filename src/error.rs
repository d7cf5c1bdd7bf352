//! Error types for ascii-plot operations.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Coordinate axis, used to name the offending value in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors that can occur while reading, plotting or printing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (reading input, writing output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An input line did not hold exactly two values.
    #[error("line {line}: expected exactly two values per row, found {found}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// Number of whitespace-separated tokens on the line.
        found: usize,
    },

    /// A token could not be parsed as a finite real number.
    #[error("line {line}: invalid {axis}-coordinate '{literal}'")]
    InvalidCoordinate {
        /// 1-based line number.
        line: usize,
        /// Axis the token was read for.
        axis: Axis,
        /// The token as it appeared in the input.
        literal: String,
    },

    /// Invalid dimensions for a character grid.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Number of columns.
        width: usize,
        /// Number of rows.
        height: usize,
    },
}
