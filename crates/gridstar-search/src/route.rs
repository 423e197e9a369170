use std::fmt;

use gridstar_core::Point;

/// A cell on a returned route together with its cost from the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pos: Point,
    g: u32,
}

impl Coordinate {
    pub(crate) fn new(pos: Point, g: u32) -> Self {
        Self { pos, g }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    /// Derived cube coordinate; only meaningful on hex grids.
    #[inline]
    pub fn z(&self) -> i32 {
        self.pos.z()
    }

    /// Steps from the start along the route.
    #[inline]
    pub fn g(&self) -> u32 {
        self.g
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} g={}", self.pos, self.g)
    }
}

/// An ordered route from a start cell to a goal cell, both included.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    cells: Vec<Coordinate>,
}

impl Route {
    /// Wrap a non-empty start-to-goal sequence.
    pub(crate) fn new(cells: Vec<Coordinate>) -> Self {
        debug_assert!(!cells.is_empty(), "a route always holds its start");
        Self { cells }
    }

    /// All cells, start first.
    #[inline]
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Cell positions, start first.
    pub fn points(&self) -> Vec<Point> {
        self.cells.iter().map(Coordinate::pos).collect()
    }

    /// The cells strictly between start and goal.
    pub fn interior(&self) -> &[Coordinate] {
        match self.cells.len() {
            0..=2 => &[],
            n => &self.cells[1..n - 1],
        }
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a route holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, i.e. `len() - 1`.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&Coordinate> {
        self.cells.first()
    }

    pub fn goal(&self) -> Option<&Coordinate> {
        self.cells.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", c.pos)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(pts: &[(i32, i32)]) -> Route {
        Route::new(
            pts.iter()
                .enumerate()
                .map(|(g, &(x, y))| Coordinate::new(Point::new(x, y), g as u32))
                .collect(),
        )
    }

    #[test]
    fn endpoints_and_interior() {
        let r = route(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(r.len(), 5);
        assert_eq!(r.steps(), 4);
        assert_eq!(r.start().map(Coordinate::pos), Some(Point::new(0, 0)));
        assert_eq!(r.goal().map(|c| c.g()), Some(4));
        assert_eq!(r.interior().len(), 3);
        assert_eq!(r.interior()[0].pos(), Point::new(1, 0));
    }

    #[test]
    fn short_routes_have_no_interior() {
        assert!(route(&[(1, 1)]).interior().is_empty());
        assert!(route(&[(1, 1), (1, 2)]).interior().is_empty());
        assert_eq!(route(&[(1, 1)]).steps(), 0);
    }

    #[test]
    fn coordinate_accessors() {
        let c = Coordinate::new(Point::new(2, 3), 7);
        assert_eq!((c.x(), c.y(), c.z(), c.g()), (2, 3, -5, 7));
        assert_eq!(c.to_string(), "(2, 3) g=7");
    }

    #[test]
    fn display_joins_points() {
        let r = route(&[(0, 0), (1, 0)]);
        assert_eq!(r.to_string(), "(0, 0) -> (1, 0)");
        assert_eq!(r.points(), vec![Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!((&r).into_iter().count(), 2);
    }
}
