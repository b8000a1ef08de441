use na::Point2;
use shape45::shape::{Polygon, Shape45, VertexLoop, Winding};
use shape45::transformation::TriangulationError;

fn square_with_hole() -> Shape45 {
    Shape45::new(
        Polygon::from_coords([(0, 0), (6, 0), (6, 6), (0, 6)]),
        vec![Shape45::from_coords([(1, 4), (1, 5), (3, 5), (3, 4)])],
    )
}

#[test]
fn square_with_square_hole() {
    let shape = square_with_hole();
    assert!(shape.is_valid());

    let triangles = shape.triangulate().unwrap();
    // 4 + 4 vertices spliced into one loop (6 triangles) plus 2 bridge triangles.
    assert_eq!(triangles.len(), 8);
    assert!(triangles.iter().all(|t| t.orientation() == Winding::Ccw));

    let area2: i64 = triangles.iter().map(|t| t.signed_area2()).sum();
    assert_eq!(area2, 2 * (36 - 2));
    assert_eq!(shape.area(), 34.0);

    let hole = shape.sub_shape(0).unwrap().outline();
    for t in &triangles {
        // The hole interior is free of triangles.
        assert!(!hole.contains_point(&t.centroid(), false), "{:?}", t);
        assert!(!t.contains_point(&Point2::new(2.0, 4.5), false));
        assert!(!t.contains_point(&Point2::new(1.5, 4.25), false));
    }
}

#[test]
fn two_holes_and_an_island() {
    let island = Shape45::from_coords([(2, 2), (3, 2), (3, 3), (2, 3)]);
    let hole_a = Shape45::new(
        Polygon::from_coords([(1, 1), (1, 4), (4, 4), (4, 1)]),
        vec![island],
    );
    let hole_b = Shape45::from_coords([(6, 1), (6, 4), (8, 4), (8, 1)]);
    let shape = Shape45::new(
        Polygon::from_coords([(0, 0), (10, 0), (10, 10), (0, 10)]),
        vec![hole_a, hole_b],
    );
    assert!(shape.is_valid());

    let triangles = shape.triangulate().unwrap();
    // (12 + 2 * 2 - 2) for the frame, 2 for the island.
    assert_eq!(triangles.len(), 16);
    let area2: i64 = triangles.iter().map(|t| t.signed_area2()).sum();
    assert_eq!(area2, 2 * (100 - 9 - 6 + 1));
    assert_eq!(shape.area(), 86.0);
}

#[test]
fn convex_outline_with_hole_is_bridged() {
    // A convex outline must not be fanned over its hole.
    let octagon = Polygon::from_coords([
        (2, 0),
        (6, 0),
        (8, 2),
        (8, 6),
        (6, 8),
        (2, 8),
        (0, 6),
        (0, 2),
    ]);
    let diamond = Shape45::from_coords([(4, 3), (3, 4), (4, 5), (5, 4)]);
    let shape = Shape45::new(octagon, vec![diamond]);
    assert!(shape.outline().is_convex());
    assert!(shape.is_valid());

    let triangles = shape.triangulate().unwrap();
    assert_eq!(triangles.len(), 12);
    assert!(triangles
        .iter()
        .all(|t| !t.contains_point(&Point2::new(4.0, 4.0), true)));
}

#[test]
fn unbridgeable_hole_is_reported() {
    let shape = Shape45::new(
        Polygon::from_coords([(0, 0), (4, 0), (4, 4), (0, 4)]),
        vec![Shape45::from_coords([(-1, -1), (-1, 5), (5, 5), (5, -1)])],
    );
    assert_eq!(
        shape.triangulate(),
        Err(TriangulationError::NoBridge { sub_shape: 0 })
    );
}
