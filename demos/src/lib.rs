//! Shared demo scenarios used by the `findpath` binary.
//!
//! Demonstrates: square and hex searches, obstacle configuration, the
//! unreachable-goal outcome, and seeded random maps.

use std::fmt::Write as _;

use gridstar_core::Point;
use gridstar_search::{Route, SearchConfig, SearchEngine, SearchError, Topology};
use rand::{RngExt, SeedableRng};

/// A grid, its obstacles, and the two endpoints to connect.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: String,
    pub config: SearchConfig,
    pub width: i32,
    pub height: i32,
    pub obstacles: Vec<Point>,
    pub start: Point,
    pub goal: Point,
}

impl Scenario {
    fn new(name: &str, topology: Topology, width: i32, height: i32) -> Self {
        Self {
            name: name.to_string(),
            config: SearchConfig::for_topology(topology),
            width,
            height,
            obstacles: Vec::new(),
            start: Point::ZERO,
            goal: Point::ZERO,
        }
    }

    fn between(mut self, start: (i32, i32), goal: (i32, i32)) -> Self {
        self.start = start.into();
        self.goal = goal.into();
        self
    }

    fn blocked(mut self, cells: &[(i32, i32)]) -> Self {
        self.obstacles = cells.iter().map(|&c| c.into()).collect();
        self
    }

    /// Build the engine for this scenario.
    pub fn engine(&self) -> Result<SearchEngine, SearchError> {
        let mut engine = SearchEngine::with_config(self.width, self.height, self.config)?;
        engine.mark_obstacles(self.obstacles.iter().copied())?;
        Ok(engine)
    }

    /// Build the engine and search it.
    pub fn run(&self) -> Result<(SearchEngine, Route), SearchError> {
        let engine = self.engine()?;
        let route = engine.find_path(self.start, self.goal)?;
        Ok((engine, route))
    }
}

/// The fixed demo scenarios.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("square 3x3, open", Topology::Square, 3, 3).between((0, 0), (2, 2)),
        Scenario::new("square 3x3, wall on row 1", Topology::Square, 3, 3)
            .between((0, 0), (0, 2))
            .blocked(&[(0, 1), (1, 1), (2, 1)]),
        Scenario::new("hex 3x3, open", Topology::Hex, 3, 3).between((0, 0), (2, 0)),
        Scenario::new("hex 7x7, three obstacles", Topology::Hex, 7, 7)
            .between((0, 1), (5, 2))
            .blocked(&[(1, 2), (2, 1), (3, 0)]),
        Scenario::new("square 7x7, four obstacles", Topology::Square, 7, 7)
            .between((1, 3), (5, 2))
            .blocked(&[(1, 2), (3, 2), (3, 4), (4, 3)]),
    ]
}

/// A `width × height` map where each cell is blocked with probability
/// `density` percent, with endpoints drawn from the free cells.
pub fn random_scenario(seed: u64, topology: Topology, width: i32, height: i32, density: u32) -> Scenario {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut s = Scenario::new(&format!("{topology:?} {width}x{height}, seed {seed}"), topology, width, height);

    let mut free = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let p = Point::new(x, y);
            if rng.random_range(0..100) < density {
                s.obstacles.push(p);
            } else {
                free.push(p);
            }
        }
    }
    if free.is_empty() {
        // Everything blocked: reopen the origin so there is something to ask.
        s.obstacles.retain(|&p| p != Point::ZERO);
        free.push(Point::ZERO);
    }
    s.start = free[rng.random_range(0..free.len())];
    s.goal = free[rng.random_range(0..free.len())];
    s
}

/// ASCII rendering of a grid and an optional route.
///
/// `#` obstacle, `S` start, `G` goal, `*` route, `.` free. Hex rows are
/// indented by half a cell per row so that neighbours line up.
pub fn render(engine: &SearchEngine, start: Point, goal: Point, route: Option<&Route>) -> String {
    let grid = engine.grid();
    let on_route = |p: Point| route.is_some_and(|r| r.iter().any(|c| c.pos() == p));
    let mut out = String::new();
    for y in 0..grid.height() {
        if engine.topology() == Topology::Hex {
            out.push_str(&" ".repeat(y as usize));
        }
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if grid.is_obstacle(p) {
                '#'
            } else if on_route(p) {
                '*'
            } else {
                '.'
            };
            if x > 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        let _ = writeln!(out);
    }
    out
}

/// Install `env_logger`, filtered by `GRIDSTAR_LOG` (default `warn`).
///
/// Fails if a logger is already installed.
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("GRIDSTAR_LOG", "warn")).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_scenarios_behave() {
        let results: Vec<_> = scenarios().iter().map(|s| s.run().map(|(_, r)| r.steps())).collect();
        assert_eq!(results[0], Ok(4));
        assert!(matches!(results[1], Err(SearchError::NoPathFound { .. })));
        assert_eq!(results[2], Ok(2));
        assert!(results[3].is_ok());
        assert!(results[4].is_ok());
    }

    #[test]
    fn random_scenarios_are_reproducible() {
        let a = random_scenario(7, Topology::Hex, 10, 6, 25);
        let b = random_scenario(7, Topology::Hex, 10, 6, 25);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!((a.start, a.goal), (b.start, b.goal));
        assert!(!a.obstacles.contains(&a.start));
    }

    #[test]
    fn fully_blocked_random_map_keeps_one_cell() {
        let s = random_scenario(1, Topology::Square, 4, 4, 100);
        assert_eq!(s.start, Point::ZERO);
        assert_eq!(s.obstacles.len(), 15);
        assert_eq!(s.run().map(|(_, r)| r.len()), Ok(1));
    }

    #[test]
    fn render_marks_route() {
        let s = &scenarios()[0];
        let (engine, route) = s.run().unwrap();
        let map = render(&engine, s.start, s.goal, Some(&route));
        assert_eq!(map.lines().count(), 3);
        assert_eq!(map.matches('*').count(), 3);
        assert!(map.starts_with('S'));
    }

    #[test]
    fn render_indents_hex_rows() {
        let s = &scenarios()[2];
        let engine = s.engine().unwrap();
        let map = render(&engine, s.start, s.goal, None);
        let lines: Vec<_> = map.lines().collect();
        assert_eq!(lines[0], "S . G");
        assert_eq!(lines[2], "  . . .");
    }

    #[test]
    fn logging_installs_once() {
        // Tests share one process, so only the second call is certain to fail.
        let _ = init_logging();
        assert!(init_logging().is_err());
    }
}
