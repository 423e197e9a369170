//! Search configuration.

use crate::topology::Topology;

/// How the frontier updates the cost of a cell that is already open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relaxation {
    /// Every rediscovery overwrites G, even with a larger value; the last
    /// assignment wins.
    #[default]
    Overwrite,
    /// G is only ever lowered.
    Improve,
}

/// How a route is rebuilt once the goal has been reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reconstruction {
    /// Follow the parent recorded each time a cell's G was written.
    #[default]
    ParentLinks,
    /// Walk back from the goal, each time stepping to the adjoining closed
    /// cell with the lowest G. When several share the lowest G the first in
    /// neighbour order is taken, so the route is deterministic but not
    /// necessarily the only optimal one.
    MinCostWalk,
}

/// Configuration for a [`SearchEngine`](crate::SearchEngine).
///
/// ```
/// use gridstar_search::{Reconstruction, SearchConfig, Topology};
///
/// let cfg = SearchConfig {
///     topology: Topology::Hex,
///     reconstruction: Reconstruction::MinCostWalk,
///     ..SearchConfig::default()
/// };
/// assert_eq!(cfg.topology, Topology::Hex);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub topology: Topology,
    pub relaxation: Relaxation,
    pub reconstruction: Reconstruction,
}

impl SearchConfig {
    /// Default configuration for the given topology.
    pub fn for_topology(topology: Topology) -> Self {
        Self {
            topology,
            ..Self::default()
        }
    }
}
