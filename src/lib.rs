//! # ascii-plot
//!
//! Render coordinate pairs as a bordered ASCII scatter plot.
//!
//! The crate is a single linear pipeline:
//!
//! 1. [`input`] reads `x y` pairs and folds them into [`geometry::Bounds`].
//! 2. [`scale`] rescales each axis independently onto screen space.
//! 3. [`plots::ScatterPlot`] truncates screen points into a [`grid::CharGrid`].
//! 4. [`output::TerminalEncoder`] prints the grid inside a box-drawn border.
//!
//! ## Quick Start
//!
//! ```rust
//! use ascii_plot::prelude::*;
//!
//! let grid = ScatterPlot::new()
//!     .points(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(5.0, 5.0)])
//!     .dimensions(10, 10)
//!     .to_grid()?;
//!
//! assert_eq!(grid.plotted_count(), 3);
//! print!("{}", TerminalEncoder::new().render(&grid));
//! # Ok::<(), ascii_plot::Error>(())
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, bounds).
pub mod geometry;

/// Character grid the plot is rasterized into.
pub mod grid;

/// Scale functions for data-to-screen mappings.
pub mod scale;

/// Marker and border character themes.
pub mod theme;

// ============================================================================
// Pipeline Modules
// ============================================================================

/// Coordinate input reader.
pub mod input;

/// High-level plot types.
pub mod plots;

/// Output encoders (terminal).
pub mod output;

/// Read-map-rasterize-print pipeline.
pub mod pipeline;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for ascii-plot operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use ascii_plot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Axis, Error, Result};
    pub use crate::geometry::{Bounds, Point};
    pub use crate::grid::{Cell, CharGrid};
    pub use crate::input::{read_points, Dataset};
    pub use crate::output::TerminalEncoder;
    pub use crate::pipeline::{run, PlotConfig};
    pub use crate::plots::ScatterPlot;
    pub use crate::scale::{map_range, LinearScale, Scale, ScreenMapper};
    pub use crate::theme::{BorderSet, BorderStyle, Theme};
}
