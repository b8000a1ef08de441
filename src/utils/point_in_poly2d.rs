use crate::math::Point;

/// Tests if the given point is inside an arbitrary closed polygon with arbitrary orientation,
/// using a counting winding strategy.
///
/// The polygon is assumed to be closed, i.e., first and last point of the polygon are implicitly
/// assumed to be connected by an edge. Points exactly on the boundary may be reported either way;
/// use [`point_on_poly2d_boundary`] to detect them first.
pub fn point_in_poly2d(pt: &Point, poly: &[Point]) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut winding = 0i32;

    for (i, a) in poly.iter().enumerate() {
        let b = poly[(i + 1) % poly.len()];
        let seg_dir = b - a;
        let dpt = pt - a;
        let perp = dpt.perp(&seg_dir);
        winding += match (a.y <= pt.y, b.y > pt.y) {
            (true, true) if perp < 0.0 => 1,
            (false, false) if perp > 0.0 => -1,
            _ => 0,
        };
    }

    winding != 0
}

/// Tests if the given point lies exactly on one of the edges of the closed polygon `poly`.
pub fn point_on_poly2d_boundary(pt: &Point, poly: &[Point]) -> bool {
    (0..poly.len()).any(|i| {
        let a = poly[i];
        let b = poly[(i + 1) % poly.len()];
        (b - a).perp(&(pt - a)) == 0.0
            && pt.x >= a.x.min(b.x)
            && pt.x <= a.x.max(b.x)
            && pt.y >= a.y.min(b.y)
            && pt.y <= a.y.max(b.y)
    })
}
