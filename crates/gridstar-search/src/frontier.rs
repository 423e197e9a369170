//! Open/closed bookkeeping for a single search.
//!
//! All per-search state lives in side tables indexed by the grid's flat
//! cell index, so the open, closed and result sets only ever hold keys into
//! the [`GridIndex`], never cell objects of their own.

use std::cmp::Reverse;

use gridstar_core::Point;

use crate::config::Relaxation;
use crate::grid::GridIndex;
use crate::hops::UNREACHABLE;
use crate::neighbors::Neighbors;
use crate::topology::Topology;

/// Parent sentinel for cells that were never reached from another cell.
pub(crate) const NO_PARENT: usize = usize::MAX;

pub(crate) struct Frontier {
    relaxation: Relaxation,
    // G value per cell, `UNREACHABLE` until first discovered
    g: Vec<u32>,
    parent: Vec<usize>,
    open: Vec<usize>,
    in_open: Vec<bool>,
    closed: Vec<usize>,
    in_closed: Vec<bool>,
    result: Vec<usize>,
    in_result: Vec<bool>,
    nbuf: Neighbors,
}

impl Frontier {
    pub(crate) fn new(len: usize, relaxation: Relaxation) -> Self {
        Self {
            relaxation,
            g: vec![UNREACHABLE; len],
            parent: vec![NO_PARENT; len],
            open: Vec::new(),
            in_open: vec![false; len],
            closed: Vec::new(),
            in_closed: vec![false; len],
            result: Vec::new(),
            in_result: vec![false; len],
            nbuf: Neighbors::new(),
        }
    }

    /// Put the start cell on the frontier with G = 0.
    pub(crate) fn seed(&mut self, start: usize) {
        self.g[start] = 0;
        self.parent[start] = NO_PARENT;
        if !self.in_open[start] {
            self.in_open[start] = true;
            self.open.push(start);
        }
    }

    /// Record that `cell` can be reached from `from` at cost `g`.
    ///
    /// Whether an already open cell takes the new cost depends on the
    /// relaxation policy. A cell is listed in open at most once.
    pub(crate) fn discover(&mut self, cell: usize, from: usize, g: u32) {
        debug_assert!(!self.in_closed[cell], "closed cells are never reopened");
        let write = match self.relaxation {
            Relaxation::Overwrite => true,
            Relaxation::Improve => g < self.g[cell],
        };
        if write {
            self.g[cell] = g;
            self.parent[cell] = from;
        }
        if !self.in_open[cell] {
            self.in_open[cell] = true;
            self.open.push(cell);
        }
    }

    /// Discover every in-grid, passable, unclosed neighbour of `cell` at one
    /// step beyond it. Returns how many neighbours were touched.
    pub(crate) fn expand(&mut self, grid: &GridIndex, topology: Topology, cell: usize) -> usize {
        let next_g = self.g[cell] + 1;
        let cp = grid.point(cell);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut touched = 0;
        for &np in nbuf.adjacent(topology, cp, |p| grid.contains(p)) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if grid.is_obstacle(np) || self.in_closed[ni] {
                continue;
            }
            self.discover(ni, cell, next_g);
            touched += 1;
        }
        self.nbuf = nbuf;
        touched
    }

    /// The open cell with the lowest F = G + H, or `None` once open is empty.
    ///
    /// Ties on F go to the larger G. The open list is stably re-sorted in
    /// place, so remaining ties keep their discovery order across calls.
    pub(crate) fn select_best(
        &mut self,
        grid: &GridIndex,
        topology: Topology,
        goal: Point,
    ) -> Option<usize> {
        let g = &self.g;
        self.open.sort_by_cached_key(|&i| {
            let gi = g[i];
            (gi + topology.estimate(grid.point(i), goal), Reverse(gi))
        });
        self.open.first().copied()
    }

    /// Move `cell` from open to closed.
    pub(crate) fn close(&mut self, cell: usize) {
        if self.in_open[cell] {
            self.in_open[cell] = false;
            self.open.retain(|&i| i != cell);
        }
        if !self.in_closed[cell] {
            self.in_closed[cell] = true;
            self.closed.push(cell);
        }
    }

    // -----------------------------------------------------------------------
    // Result set used by the backward walk
    // -----------------------------------------------------------------------

    pub(crate) fn add_result(&mut self, cell: usize) {
        if !self.in_result[cell] {
            self.in_result[cell] = true;
            self.result.push(cell);
        }
    }

    pub(crate) fn clear_result(&mut self) {
        for &i in &self.result {
            self.in_result[i] = false;
        }
        self.result.clear();
    }

    #[inline]
    pub(crate) fn in_result(&self, cell: usize) -> bool {
        self.in_result[cell]
    }

    #[inline]
    pub(crate) fn result(&self) -> &[usize] {
        &self.result
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn g(&self, cell: usize) -> u32 {
        self.g[cell]
    }

    #[inline]
    pub(crate) fn parent(&self, cell: usize) -> usize {
        self.parent[cell]
    }

    #[inline]
    pub(crate) fn is_open(&self, cell: usize) -> bool {
        self.in_open[cell]
    }

    #[inline]
    pub(crate) fn is_closed(&self, cell: usize) -> bool {
        self.in_closed[cell]
    }

    #[inline]
    pub(crate) fn open_len(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub(crate) fn closed(&self) -> &[usize] {
        &self.closed
    }
}
