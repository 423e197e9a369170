use gridstar_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    (a.x - b.x).unsigned_abs() + (a.y - b.y).unsigned_abs()
}

/// Hex distance: the largest absolute difference over the three cube axes.
#[inline]
pub fn cube(a: Point, b: Point) -> u32 {
    let (ax, ay, az) = a.cube();
    let (bx, by, bz) = b.cube();
    (ax - bx)
        .unsigned_abs()
        .max((ay - by).unsigned_abs())
        .max((az - bz).unsigned_abs())
}
