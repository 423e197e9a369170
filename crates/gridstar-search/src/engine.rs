use gridstar_core::Point;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::grid::GridIndex;
use crate::route::Route;
use crate::search::{Search, SearchState};
use crate::topology::Topology;

/// Grid plus search configuration: the public entry point.
///
/// ```
/// use gridstar_core::Point;
/// use gridstar_search::{SearchEngine, SearchError, Topology};
///
/// let mut engine = SearchEngine::new(Topology::Square, 3, 3)?;
/// engine.mark_obstacles([Point::new(1, 1)])?;
/// let route = engine.find_path(Point::new(0, 0), Point::new(2, 2))?;
/// assert_eq!(route.steps(), 4);
/// # Ok::<(), SearchError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SearchEngine {
    grid: GridIndex,
    config: SearchConfig,
}

impl SearchEngine {
    /// Allocate a `width × height` grid searched with the default strategies.
    pub fn new(topology: Topology, width: i32, height: i32) -> Result<Self, SearchError> {
        Self::with_config(width, height, SearchConfig::for_topology(topology))
    }

    /// Allocate a `width × height` grid with an explicit configuration.
    pub fn with_config(width: i32, height: i32, config: SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            grid: GridIndex::new(width, height)?,
            config,
        })
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn topology(&self) -> Topology {
        self.config.topology
    }

    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    /// Flag cells as impassable. Chainable through `?`.
    ///
    /// Fails with [`SearchError::OutOfBounds`] without touching the grid if
    /// any point lies outside.
    pub fn mark_obstacles<I>(&mut self, cells: I) -> Result<&mut Self, SearchError>
    where
        I: IntoIterator<Item = Point>,
    {
        self.grid.mark_obstacles(cells)?;
        Ok(self)
    }

    /// Flag a single cell as impassable.
    pub fn mark_obstacle(&mut self, p: Point) -> Result<&mut Self, SearchError> {
        self.grid.mark_obstacle(p)?;
        Ok(self)
    }

    /// Make every cell passable again.
    pub fn clear_obstacles(&mut self) -> &mut Self {
        self.grid.clear_obstacles();
        self
    }

    /// Heuristic distance between two points for this engine's topology.
    pub fn estimate(&self, a: Point, b: Point) -> u32 {
        self.config.topology.estimate(a, b)
    }

    /// Start a steppable search from `start` to `goal`.
    pub fn search(&self, start: Point, goal: Point) -> Result<Search<'_>, SearchError> {
        Search::new(&self.grid, self.config, start, goal)
    }

    /// Find a route from `start` to `goal`, both included.
    ///
    /// Fails with [`SearchError::OutOfBounds`] if either point lies outside
    /// the grid, and with [`SearchError::NoPathFound`] when every reachable
    /// cell has been expanded without meeting the goal (this includes a
    /// blocked start or goal).
    pub fn find_path(&self, start: Point, goal: Point) -> Result<Route, SearchError> {
        let mut search = self.search(start, goal)?;
        log::debug!(
            "searching {:?} {}x{} from {} to {}",
            self.config.topology,
            self.grid.width(),
            self.grid.height(),
            start,
            goal
        );

        let state = search.run();
        log::debug!(
            "search {:?} after {} expansions ({} closed)",
            state,
            search.expansions(),
            search.closed_len()
        );

        match state {
            SearchState::Found => {
                let route = search.route()?;
                log::debug!("route of {} steps: {}", route.steps(), route);
                Ok(route)
            }
            _ => Err(SearchError::NoPathFound { start, goal }),
        }
    }
}
