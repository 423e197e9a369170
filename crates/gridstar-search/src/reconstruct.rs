//! Backward route reconstruction.
//!
//! Both strategies return flat cell indices ordered from start to goal,
//! endpoints included.

use crate::error::SearchError;
use crate::frontier::{Frontier, NO_PARENT};
use crate::grid::GridIndex;
use crate::neighbors::Neighbors;
use crate::topology::Topology;

/// Follow recorded parents from `goal` back to `start`.
pub(crate) fn parent_links(
    grid: &GridIndex,
    frontier: &Frontier,
    start: usize,
    goal: usize,
) -> Result<Vec<usize>, SearchError> {
    let mut trail = vec![goal];
    let mut ci = goal;
    while ci != start {
        let pi = frontier.parent(ci);
        // A chain longer than the grid has looped.
        if pi == NO_PARENT || trail.len() > grid.len() {
            return Err(SearchError::BrokenTrail { at: grid.point(ci) });
        }
        trail.push(pi);
        ci = pi;
    }
    trail.reverse();
    Ok(trail)
}

/// Walk back from `goal`, each time stepping to the adjoining closed cell
/// with the lowest G that is not on the trail yet, until `start` is picked.
///
/// The picked cells go into the frontier's result set, which is then stably
/// ordered by G. Ties take the first cell in neighbour order.
pub(crate) fn min_cost_walk(
    grid: &GridIndex,
    topology: Topology,
    frontier: &mut Frontier,
    start: usize,
    goal: usize,
) -> Result<Vec<usize>, SearchError> {
    frontier.clear_result();
    if start == goal {
        return Ok(vec![start]);
    }

    let mut nb = Neighbors::new();
    let mut ci = goal;
    loop {
        let cp = grid.point(ci);
        let best = nb
            .adjacent(topology, cp, |p| grid.contains(p))
            .iter()
            .filter_map(|&p| grid.idx(p))
            .filter(|&i| i != goal && frontier.is_closed(i) && !frontier.in_result(i))
            .min_by_key(|&i| frontier.g(i));
        let Some(prev) = best else {
            return Err(SearchError::BrokenTrail { at: cp });
        };
        frontier.add_result(prev);
        if prev == start {
            break;
        }
        ci = prev;
    }

    let mut trail = frontier.result().to_vec();
    trail.sort_by_key(|&i| frontier.g(i));
    trail.push(goal);
    Ok(trail)
}
