//! **gridstar-core** — geometry primitives for grid path search.
//!
//! This crate provides the types shared across the *gridstar* workspace:
//! integer [`Point`]s (which double as axial hex coordinates with a derived
//! cube `z`) and half-open [`Range`] rectangles.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
