//! High-level plot types.
//!
//! Provides ready-to-use plot types with builder APIs.

mod scatter;

pub use scatter::ScatterPlot;
