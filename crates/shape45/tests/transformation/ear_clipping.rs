use shape45::shape::{GridPoint, Polygon, Triangle, VertexLoop, Winding};
use shape45::transformation::{ear_clipping, EarClippingParams, TriangulationError};

fn random_skyline(rng: &mut oorandom::Rand32) -> Polygon {
    let columns = rng.rand_range(1..9) as i64;
    let heights: Vec<i64> = (0..columns).map(|_| rng.rand_range(1..5) as i64).collect();

    let mut coords = vec![(0, 0), (columns, 0)];
    for i in (0..columns).rev() {
        let h = heights[i as usize];
        coords.push((i + 1, h));
        coords.push((i, h));
    }
    coords.dedup();
    Polygon::from_coords(coords)
}

fn assert_triangulation(poly: &Polygon, triangles: &[Triangle]) {
    assert_eq!(triangles.len(), poly.num_vertices() - 2, "{:?}", poly);
    assert!(triangles.iter().all(|t| t.orientation() == Winding::Ccw));

    let area2: i64 = triangles.iter().map(|t| t.signed_area2()).sum();
    assert_eq!(area2, poly.signed_area2());

    let mut used: Vec<GridPoint> = triangles.iter().flat_map(|t| t.vertices().to_vec()).collect();
    used.sort();
    used.dedup();
    let mut expected = poly.vertices().to_vec();
    expected.sort();
    assert_eq!(used, expected);
}

#[test]
fn random_skylines() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..200 {
        let poly = random_skyline(&mut rng);
        let triangles = poly.triangulate().unwrap();
        assert_triangulation(&poly, &triangles);

        let rotated = poly.rotated_vertex_order(rng.rand_range(0..16) as isize);
        let triangles = rotated.triangulate().unwrap();
        assert_triangulation(&rotated, &triangles);
    }
}

#[test]
fn compliant_polygons() {
    let polygons = [
        // Octagon.
        Polygon::from_coords([
            (1, 0),
            (3, 0),
            (4, 1),
            (4, 3),
            (3, 4),
            (1, 4),
            (0, 3),
            (0, 1),
        ]),
        // Arrow pointing right.
        Polygon::from_coords([
            (0, 1),
            (3, 1),
            (3, 0),
            (5, 2),
            (3, 4),
            (3, 3),
            (0, 3),
        ]),
        // Sawtooth.
        Polygon::from_coords([
            (0, 0),
            (8, 0),
            (8, 2),
            (7, 1),
            (6, 2),
            (5, 1),
            (4, 2),
            (3, 1),
            (2, 2),
            (1, 1),
            (0, 2),
        ]),
    ];

    for poly in &polygons {
        assert!(poly.is_valid());
        assert!(poly.is_45_compliant());
        let triangles = ear_clipping(poly.vertices(), &EarClippingParams::default()).unwrap();
        assert_triangulation(poly, &triangles);
    }
}

#[test]
fn convex_polygons_use_a_fan() {
    let octagon = Polygon::from_coords([
        (1, 0),
        (3, 0),
        (4, 1),
        (4, 3),
        (3, 4),
        (1, 4),
        (0, 3),
        (0, 1),
    ]);
    assert!(octagon.is_convex());
    let triangles = octagon.triangulate().unwrap();
    assert!(triangles.iter().all(|t| t.a() == GridPoint::new(1, 0)));
    assert_triangulation(&octagon, &triangles);
}

#[test]
fn rejected_inputs() {
    let square = Polygon::from_coords([(0, 0), (2, 0), (2, 2), (0, 2)]);
    assert_eq!(
        square.reversed().triangulate(),
        Err(TriangulationError::NotCounterClockwise)
    );
    assert_eq!(
        Polygon::from_coords([(0, 0), (2, 0)]).triangulate(),
        Err(TriangulationError::TooFewVertices(2))
    );
}
