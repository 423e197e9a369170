//! Grid connectivity: which cells touch and how far apart they are.

use gridstar_core::Point;

use crate::distance;

/// Square offsets: up, down, left, right.
const SQUARE_OFFSETS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Cube directions with `z` implied, in the order neighbours are visited.
const HEX_OFFSETS: [Point; 6] = [
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(-1, 1),
    Point::new(1, 0),
    Point::new(1, -1),
    Point::new(0, 1),
];

/// Cell connectivity of a grid.
///
/// The offset order is fixed: it decides which cell wins when the frontier
/// or the backward walk meets a tie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// Rectangular cells, 4-connected. Heuristic: Manhattan distance.
    #[default]
    Square,
    /// Hexagonal cells in axial coordinates, 6-connected.
    /// Heuristic: `max(|dx|, |dy|, |dz|)`.
    Hex,
}

impl Topology {
    /// Relative positions of the adjoining cells.
    #[inline]
    pub fn offsets(self) -> &'static [Point] {
        match self {
            Self::Square => &SQUARE_OFFSETS,
            Self::Hex => &HEX_OFFSETS,
        }
    }

    /// Number of neighbours of an interior cell.
    #[inline]
    pub fn degree(self) -> usize {
        self.offsets().len()
    }

    /// Heuristic estimate of the hop count from `from` to `to`.
    ///
    /// Never overestimates on an obstacle-free grid, so it is admissible.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> u32 {
        match self {
            Self::Square => distance::manhattan(from, to),
            Self::Hex => distance::cube(from, to),
        }
    }

    /// Whether `a` and `b` are one step apart.
    #[inline]
    pub fn is_adjacent(self, a: Point, b: Point) -> bool {
        self.offsets().contains(&(b - a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_steps() {
        for topo in [Topology::Square, Topology::Hex] {
            for &d in topo.offsets() {
                assert_eq!(topo.estimate(Point::ZERO, d), 1, "{topo:?} offset {d}");
            }
        }
        assert_eq!(Topology::Square.degree(), 4);
        assert_eq!(Topology::Hex.degree(), 6);
    }

    #[test]
    fn offsets_are_symmetric() {
        for topo in [Topology::Square, Topology::Hex] {
            for &d in topo.offsets() {
                assert!(topo.offsets().contains(&(Point::ZERO - d)));
            }
        }
    }

    #[test]
    fn adjacency() {
        let p = Point::new(3, 3);
        assert!(Topology::Square.is_adjacent(p, Point::new(3, 4)));
        assert!(!Topology::Square.is_adjacent(p, Point::new(4, 4)));
        assert!(Topology::Hex.is_adjacent(p, Point::new(4, 2)));
        assert!(Topology::Hex.is_adjacent(p, Point::new(2, 4)));
        assert!(!Topology::Hex.is_adjacent(p, Point::new(4, 4)));
        assert!(!Topology::Hex.is_adjacent(p, p));
    }

    #[test]
    fn hex_estimate_matches_scenario() {
        assert_eq!(Topology::Hex.estimate(Point::new(0, 0), Point::new(2, 0)), 2);
        assert_eq!(Topology::Square.estimate(Point::new(0, 0), Point::new(2, 2)), 4);
    }
}
