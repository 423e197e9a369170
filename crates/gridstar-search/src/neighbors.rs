use gridstar_core::Point;
use smallvec::SmallVec;

use crate::topology::Topology;

/// Cached neighbour computation helper.
///
/// Enumerates the 4 (square) or 6 (hex) cells adjoining a point, in the
/// topology's fixed order, keeping only those accepted by a predicate.
/// This is a pure topology function: obstacle and closed-state filtering are
/// left to the caller.
#[derive(Debug, Default)]
pub struct Neighbors {
    buf: SmallVec<[Point; 6]>,
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the neighbours of `p` under `topology` for which `keep` returns
    /// `true`.
    pub fn adjacent(
        &mut self,
        topology: Topology,
        p: Point,
        keep: impl Fn(Point) -> bool,
    ) -> &[Point] {
        self.buf.clear();
        for &d in topology.offsets() {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Range;
    use proptest::prelude::*;

    fn inside(rng: Range) -> impl Fn(Point) -> bool {
        move |p| rng.contains(p)
    }

    #[test]
    fn square_order_and_interior() {
        let mut nb = Neighbors::new();
        let got = nb.adjacent(Topology::Square, Point::new(1, 1), |_| true).to_vec();
        assert_eq!(
            got,
            vec![
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn square_corner_is_clipped() {
        let mut nb = Neighbors::new();
        let got = nb.adjacent(Topology::Square, Point::new(0, 0), inside(Range::with_size(3, 3)));
        assert_eq!(got, &[Point::new(0, 1), Point::new(1, 0)]);
    }

    #[test]
    fn hex_interior_has_six() {
        let mut nb = Neighbors::new();
        let got = nb.adjacent(Topology::Hex, Point::new(2, 2), |_| true).to_vec();
        assert_eq!(
            got,
            vec![
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(1, 3),
                Point::new(3, 2),
                Point::new(3, 1),
                Point::new(2, 3),
            ]
        );
    }

    #[test]
    fn hex_corners_are_clipped() {
        let rng = Range::with_size(5, 5);
        let mut nb = Neighbors::new();
        // (0,0): only (+1,0) and (0,+1) stay inside.
        assert_eq!(
            nb.adjacent(Topology::Hex, Point::new(0, 0), inside(rng)),
            &[Point::new(1, 0), Point::new(0, 1)]
        );
        // (4,0): the (-1,0), (-1,+1) and (0,+1) steps stay inside.
        assert_eq!(
            nb.adjacent(Topology::Hex, Point::new(4, 0), inside(rng)),
            &[Point::new(3, 0), Point::new(3, 1), Point::new(4, 1)]
        );
    }

    #[test]
    fn predicate_filters() {
        let mut nb = Neighbors::new();
        let got = nb.adjacent(Topology::Square, Point::new(1, 1), |p| p.x != 0);
        assert_eq!(got.len(), 3);
        assert!(!got.contains(&Point::new(0, 1)));
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(
            w in 1i32..8,
            h in 1i32..8,
            x in 0i32..8,
            y in 0i32..8,
            hex in any::<bool>(),
        ) {
            let rng = Range::with_size(w, h);
            let p = Point::new(x % w, y % h);
            let topo = if hex { Topology::Hex } else { Topology::Square };
            let mut nb = Neighbors::new();
            let around = nb.adjacent(topo, p, inside(rng)).to_vec();
            for n in around {
                prop_assert!(rng.contains(n));
                let back = nb.adjacent(topo, n, inside(rng)).to_vec();
                prop_assert!(
                    back.contains(&p),
                    "neighbour symmetry violated: {} in N({}) but not the reverse",
                    n, p,
                );
            }
        }
    }
}
