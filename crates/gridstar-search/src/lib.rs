//! A* path search on square and hexagonal grids.
//!
//! A [`SearchEngine`] owns a bounded grid and its obstacle flags and answers
//! [`find_path`](SearchEngine::find_path) queries between two cells:
//!
//! - **Square** grids are 4-connected and guided by Manhattan distance.
//! - **Hex** grids use axial coordinates with a derived cube `z`, are
//!   6-connected and guided by `max(|dx|, |dy|, |dz|)`.
//!
//! Every step costs 1. Routes include both endpoints and number their cells
//! by steps from the start.
//!
//! # Strategies
//!
//! | Knob | Default | Alternative |
//! |---|---|---|
//! | [`Relaxation`] | [`Overwrite`](Relaxation::Overwrite): last G assigned to an open cell wins | [`Improve`](Relaxation::Improve): G is only lowered (optimal routes) |
//! | [`Reconstruction`] | [`ParentLinks`](Reconstruction::ParentLinks) | [`MinCostWalk`](Reconstruction::MinCostWalk): lowest-G closed neighbour walk |
//!
//! A [`Search`] can also be driven one step at a time to inspect the
//! frontier between expansions.

mod config;
mod distance;
mod engine;
mod error;
mod frontier;
mod grid;
mod hops;
mod neighbors;
mod reconstruct;
mod route;
mod search;
mod topology;

pub use config::{Reconstruction, Relaxation, SearchConfig};
pub use distance::{cube, manhattan};
pub use engine::SearchEngine;
pub use error::SearchError;
pub use grid::GridIndex;
pub use hops::UNREACHABLE;
pub use neighbors::Neighbors;
pub use route::{Coordinate, Route};
pub use search::{Search, SearchState};
pub use topology::Topology;
