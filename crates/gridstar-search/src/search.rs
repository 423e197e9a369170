//! The search driver: a small state machine stepping the frontier until the
//! goal is selected or nothing is left to expand.

use gridstar_core::Point;

use crate::config::{Reconstruction, SearchConfig};
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::grid::GridIndex;
use crate::hops::UNREACHABLE;
use crate::reconstruct;
use crate::route::{Coordinate, Route};

/// Where a [`Search`] stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// Open holds only the start (or nothing, if the start is blocked).
    Seeded,
    /// At least one selection has run and the goal is not reached yet.
    Expanding,
    /// The goal was the best open cell. Terminal.
    Found,
    /// Open ran dry before the goal was reached. Terminal.
    Exhausted,
}

impl SearchState {
    /// Whether no further step can change the state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }
}

/// One A* search over a borrowed [`GridIndex`].
///
/// Each search owns its frontier tables, so independent searches over the
/// same grid do not interfere. The grid is borrowed immutably: obstacles
/// cannot change while a search is alive.
pub struct Search<'g> {
    grid: &'g GridIndex,
    config: SearchConfig,
    start: Point,
    goal: Point,
    start_idx: usize,
    goal_idx: usize,
    frontier: Frontier,
    state: SearchState,
    expansions: usize,
}

impl<'g> Search<'g> {
    /// Seed a search from `start` towards `goal`.
    ///
    /// Returns [`SearchError::OutOfBounds`] if either point lies outside the
    /// grid. A blocked start is not seeded, so the first step exhausts.
    pub fn new(
        grid: &'g GridIndex,
        config: SearchConfig,
        start: Point,
        goal: Point,
    ) -> Result<Self, SearchError> {
        let start_idx = grid.checked_idx(start)?;
        let goal_idx = grid.checked_idx(goal)?;

        let mut frontier = Frontier::new(grid.len(), config.relaxation);
        if grid.passable(start) {
            frontier.seed(start_idx);
        }

        Ok(Self {
            grid,
            config,
            start,
            goal,
            start_idx,
            goal_idx,
            frontier,
            state: SearchState::Seeded,
            expansions: 0,
        })
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Select the best open cell and either finish or expand it.
    ///
    /// Terminal states are sticky: stepping a finished search is a no-op.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }

        let topology = self.config.topology;
        let Some(current) = self.frontier.select_best(self.grid, topology, self.goal) else {
            self.state = SearchState::Exhausted;
            return self.state;
        };

        // The goal is closed but never expanded.
        self.frontier.close(current);
        if current == self.goal_idx {
            self.state = SearchState::Found;
            return self.state;
        }

        let touched = self.frontier.expand(self.grid, topology, current);
        self.expansions += 1;
        log::trace!(
            "expanded {} (g={}), {} neighbours, {} open",
            self.grid.point(current),
            self.frontier.g(current),
            touched,
            self.frontier.open_len()
        );

        self.state = SearchState::Expanding;
        self.state
    }

    /// Step until a terminal state is reached.
    pub fn run(&mut self) -> SearchState {
        while !self.state.is_terminal() {
            self.step();
        }
        self.state
    }

    /// Rebuild the route once the goal has been found.
    ///
    /// Returns [`SearchError::NoPathFound`] unless the search is in
    /// [`SearchState::Found`]. The route starts at the start cell and ends
    /// at the goal cell.
    ///
    /// Each cell's G is its step index on the route, so G grows by exactly
    /// one per step whichever reconstruction is configured.
    pub fn route(&mut self) -> Result<Route, SearchError> {
        if self.state != SearchState::Found {
            return Err(SearchError::NoPathFound {
                start: self.start,
                goal: self.goal,
            });
        }

        let trail = match self.config.reconstruction {
            Reconstruction::ParentLinks => {
                reconstruct::parent_links(self.grid, &self.frontier, self.start_idx, self.goal_idx)?
            }
            Reconstruction::MinCostWalk => reconstruct::min_cost_walk(
                self.grid,
                self.config.topology,
                &mut self.frontier,
                self.start_idx,
                self.goal_idx,
            )?,
        };

        // Frontier G can overshoot the step count under Overwrite.
        Ok(Route::new(
            trail
                .into_iter()
                .zip(0u32..)
                .map(|(i, g)| Coordinate::new(self.grid.point(i), g))
                .collect(),
        ))
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Number of cells expanded so far (the goal is never counted).
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Number of cells waiting in open.
    pub fn open_len(&self) -> usize {
        self.frontier.open_len()
    }

    /// Number of closed cells.
    pub fn closed_len(&self) -> usize {
        self.frontier.closed().len()
    }

    /// Closed cells in the order they were closed.
    pub fn closed(&self) -> impl Iterator<Item = Point> + '_ {
        self.frontier.closed().iter().map(|&i| self.grid.point(i))
    }

    /// Cost so far recorded for `p`, or `None` if it was never reached.
    pub fn g(&self, p: Point) -> Option<u32> {
        let i = self.grid.idx(p)?;
        let g = self.frontier.g(i);
        (g != UNREACHABLE).then_some(g)
    }

    pub fn is_open(&self, p: Point) -> bool {
        self.grid.idx(p).is_some_and(|i| self.frontier.is_open(i))
    }

    pub fn is_closed(&self, p: Point) -> bool {
        self.grid.idx(p).is_some_and(|i| self.frontier.is_closed(i))
    }
}
