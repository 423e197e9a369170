use gridstar_core::{Point, Range};

use crate::error::SearchError;

// ---------------------------------------------------------------------------
// GridIndex
// ---------------------------------------------------------------------------

/// Dense index of every cell in a `width × height` rectangle.
///
/// Each cell is keyed by its row-major flat index, so there is exactly one
/// key per in-bounds `(x, y)` and out-of-bounds points never resolve. The
/// index owns the obstacle flags; per-search state (G values, open/closed
/// membership) lives in side tables keyed by the same flat index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridIndex {
    rng: Range,
    width: usize,
    blocked: Vec<bool>,
}

impl GridIndex {
    /// Build the index for `[0, width) × [0, height)`.
    ///
    /// Returns [`SearchError::EmptyGrid`] if either side is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self, SearchError> {
        if width <= 0 || height <= 0 {
            return Err(SearchError::EmptyGrid { width, height });
        }
        let rng = Range::with_size(width, height);
        Ok(Self {
            rng,
            width: width as usize,
            blocked: vec![false; rng.len()],
        })
    }

    /// The grid rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Whether `p` is a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    /// Resolve `(x, y)` to a grid cell, or `None` if it lies outside.
    #[inline]
    pub fn lookup(&self, x: i32, y: i32) -> Option<Point> {
        let p = Point::new(x, y);
        self.contains(p).then_some(p)
    }

    /// Fail with [`SearchError::OutOfBounds`] unless `p` is inside the grid.
    pub fn check_bounds(&self, p: Point) -> Result<(), SearchError> {
        self.checked_idx(p).map(|_| ())
    }

    // -----------------------------------------------------------------------
    // Obstacles
    // -----------------------------------------------------------------------

    /// Flag `p` as impassable.
    pub fn mark_obstacle(&mut self, p: Point) -> Result<(), SearchError> {
        let i = self.checked_idx(p)?;
        self.blocked[i] = true;
        Ok(())
    }

    /// Flag every point as impassable.
    ///
    /// All points are validated first: on error no flag has been written.
    pub fn mark_obstacles<I>(&mut self, points: I) -> Result<(), SearchError>
    where
        I: IntoIterator<Item = Point>,
    {
        let points: Vec<Point> = points.into_iter().collect();
        for &p in &points {
            self.check_bounds(p)?;
        }
        for p in points {
            self.mark_obstacle(p)?;
        }
        Ok(())
    }

    /// Make `p` passable again.
    pub fn clear_obstacle(&mut self, p: Point) -> Result<(), SearchError> {
        let i = self.checked_idx(p)?;
        self.blocked[i] = false;
        Ok(())
    }

    /// Make every cell passable.
    pub fn clear_obstacles(&mut self) {
        self.blocked.fill(false);
    }

    /// Whether `p` is flagged as an obstacle. Points outside are not.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.blocked[i])
    }

    /// Whether `p` is inside the grid and not an obstacle.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| !self.blocked[i])
    }

    /// Number of cells flagged as obstacles.
    pub fn obstacle_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Obstacle cells in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.rng.iter().filter(|&p| self.is_obstacle(p))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Like [`idx`](Self::idx), but reports the miss as an error.
    #[inline]
    pub(crate) fn checked_idx(&self, p: Point) -> Result<usize, SearchError> {
        self.idx(p).ok_or(SearchError::OutOfBounds {
            point: p,
            width: self.width(),
            height: self.height(),
        })
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            GridIndex::new(0, 3),
            Err(SearchError::EmptyGrid {
                width: 0,
                height: 3
            })
        );
        assert!(GridIndex::new(4, -1).is_err());
    }

    #[test]
    fn one_key_per_cell() {
        let g = GridIndex::new(4, 3).unwrap();
        assert_eq!(g.len(), 12);
        let mut seen = vec![false; g.len()];
        for p in g.range() {
            let i = g.idx(p).unwrap();
            assert!(!seen[i], "duplicate key for {p}");
            seen[i] = true;
            assert_eq!(g.point(i), p);
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn out_of_bounds_never_resolves() {
        let g = GridIndex::new(4, 3).unwrap();
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(4, 0),
            Point::new(0, 3),
        ] {
            assert_eq!(g.idx(p), None);
            assert_eq!(g.lookup(p.x, p.y), None);
            assert!(!g.passable(p));
        }
        assert_eq!(g.lookup(3, 2), Some(Point::new(3, 2)));
    }

    #[test]
    fn mark_and_clear_obstacles() {
        let mut g = GridIndex::new(5, 5).unwrap();
        g.mark_obstacles([Point::new(1, 2), Point::new(3, 0)]).unwrap();
        assert!(g.is_obstacle(Point::new(1, 2)));
        assert!(!g.passable(Point::new(3, 0)));
        assert_eq!(g.obstacle_count(), 2);
        assert_eq!(
            g.obstacles().collect::<Vec<_>>(),
            vec![Point::new(3, 0), Point::new(1, 2)]
        );

        g.clear_obstacle(Point::new(1, 2)).unwrap();
        assert!(g.passable(Point::new(1, 2)));
        g.clear_obstacles();
        assert_eq!(g.obstacle_count(), 0);
    }

    #[test]
    fn out_of_bounds_obstacle_is_an_error() {
        let mut g = GridIndex::new(3, 3).unwrap();
        let err = g.mark_obstacle(Point::new(3, 1)).unwrap_err();
        assert_eq!(
            err,
            SearchError::OutOfBounds {
                point: Point::new(3, 1),
                width: 3,
                height: 3
            }
        );
    }

    #[test]
    fn mark_obstacles_is_all_or_nothing() {
        let mut g = GridIndex::new(3, 3).unwrap();
        let res = g.mark_obstacles([Point::new(0, 0), Point::new(9, 9)]);
        assert!(res.is_err());
        assert_eq!(g.obstacle_count(), 0);
    }
}
