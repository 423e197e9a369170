//! Error types for grid construction and path search.

use gridstar_core::Point;
use std::fmt;

/// Errors arising from grid configuration or a path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A point lies outside the `[0, width) × [0, height)` grid.
    OutOfBounds {
        /// The offending point.
        point: Point,
        /// Grid width.
        width: i32,
        /// Grid height.
        height: i32,
    },
    /// Attempted to build a grid with no cells.
    EmptyGrid {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// The frontier ran dry before the goal was reached.
    NoPathFound {
        /// Where the search started.
        start: Point,
        /// The unreachable goal.
        goal: Point,
    },
    /// Route reconstruction found no closed predecessor for a cell.
    ///
    /// This signals broken frontier bookkeeping, not a caller mistake.
    BrokenTrail {
        /// The cell the backward walk got stuck on.
        at: Point,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "point {point} out of bounds: x in [0, {width}), y in [0, {height})"
                )
            }
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have at least one cell, got {width}x{height}")
            }
            Self::NoPathFound { start, goal } => {
                write!(f, "no path from {start} to {goal}")
            }
            Self::BrokenTrail { at } => {
                write!(f, "route reconstruction found no predecessor for {at}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
