use std::collections::VecDeque;

use gridstar_core::Point;

use crate::grid::GridIndex;
use crate::neighbors::Neighbors;
use crate::topology::Topology;

/// Sentinel value meaning "unreachable" in a hop map.
pub const UNREACHABLE: u32 = u32::MAX;

impl GridIndex {
    /// Breadth-first hop counts from `source` to every cell.
    ///
    /// The map is indexed row-major like the grid. Obstacles and cells cut
    /// off from `source` hold [`UNREACHABLE`]; so does every cell when
    /// `source` itself is outside the grid or blocked.
    pub fn hop_map(&self, topology: Topology, source: Point) -> Vec<u32> {
        let mut map = vec![UNREACHABLE; self.len()];
        let Some(si) = self.idx(source).filter(|_| self.passable(source)) else {
            return map;
        };
        map[si] = 0;

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);
        let mut nb = Neighbors::new();

        while let Some(ci) = queue.pop_front() {
            let next = map[ci] + 1;
            let cp = self.point(ci);
            for &np in nb.adjacent(topology, cp, |p| self.passable(p)) {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if map[ni] != UNREACHABLE {
                    continue;
                }
                map[ni] = next;
                queue.push_back(ni);
            }
        }

        map
    }

    /// Fewest steps between two cells, or `None` if they are not connected.
    pub fn hops(&self, topology: Topology, from: Point, to: Point) -> Option<u32> {
        let ti = self.idx(to)?;
        let d = self.hop_map(topology, from)[ti];
        (d != UNREACHABLE).then_some(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_square_grid_matches_manhattan() {
        let g = GridIndex::new(5, 4).unwrap();
        let map = g.hop_map(Topology::Square, Point::new(0, 0));
        for p in g.range() {
            let i = g.idx(p).unwrap();
            assert_eq!(map[i], Topology::Square.estimate(Point::ZERO, p));
        }
    }

    #[test]
    fn wall_disconnects() {
        let mut g = GridIndex::new(3, 3).unwrap();
        g.mark_obstacles((0..3).map(|x| Point::new(x, 1))).unwrap();
        assert_eq!(g.hops(Topology::Square, Point::new(0, 0), Point::new(0, 2)), None);
        assert_eq!(g.hops(Topology::Hex, Point::new(0, 0), Point::new(0, 2)), None);
        assert_eq!(
            g.hops(Topology::Square, Point::new(0, 0), Point::new(2, 0)),
            Some(2)
        );
    }

    #[test]
    fn blocked_or_outside_source() {
        let mut g = GridIndex::new(3, 3).unwrap();
        g.mark_obstacle(Point::new(1, 1)).unwrap();
        assert!(g
            .hop_map(Topology::Hex, Point::new(1, 1))
            .iter()
            .all(|&d| d == UNREACHABLE));
        assert!(g
            .hop_map(Topology::Hex, Point::new(-1, 1))
            .iter()
            .all(|&d| d == UNREACHABLE));
    }

    #[test]
    fn hex_diagonal_is_one_hop() {
        let g = GridIndex::new(4, 4).unwrap();
        assert_eq!(g.hops(Topology::Hex, Point::new(0, 3), Point::new(3, 0)), Some(3));
        assert_eq!(g.hops(Topology::Square, Point::new(0, 3), Point::new(3, 0)), Some(6));
    }
}
