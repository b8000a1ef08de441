use shape45::shape::{Polygon, VertexLoop, Winding};

/// A random counter-clockwise "skyline": unit-width columns of random heights
/// standing on the `x` axis. Equal neighboring heights leave collinear vertices.
pub fn random_skyline(rng: &mut oorandom::Rand32) -> Polygon {
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

fn fixed_polygons() -> Vec<Polygon> {
    vec![
        Polygon::from_coords([(0, 0), (4, 0), (4, 2), (2, 2), (2, 4), (0, 4)]),
        Polygon::from_coords([(0, 0), (2, 0), (4, 0), (4, 2), (0, 2)]),
        Polygon::from_coords([
            (2, 0),
            (4, 0),
            (6, 2),
            (6, 4),
            (4, 6),
            (3, 3),
            (2, 6),
            (0, 4),
            (0, 2),
        ]),
        Polygon::from_coords([
            (2, 2),
            (2, -2),
            (4, -2),
            (4, 4),
            (-4, 4),
            (-4, -2),
            (-2, -2),
            (-2, 2),
        ]),
    ]
}

fn check_invariance(poly: &Polygon) {
    let winding = poly.winding();
    let n = poly.num_vertices() as isize;

    for k in -n..=n {
        assert_eq!(poly.rotated_vertex_order(k).winding(), winding);
    }

    assert_eq!(poly.reversed().winding(), winding.opposite());
    assert_eq!(poly.reversed().reversed(), *poly);
    assert_eq!(poly.rotated90().winding(), winding);
    assert_eq!(poly.shifted(-7, 3).winding(), winding);
    assert_eq!(poly.reflected_x().winding(), winding.opposite());
    assert_eq!(poly.reflected_y().winding(), winding.opposite());
}

#[test]
fn fixed_polygons_wind_counter_clockwise() {
    for poly in fixed_polygons() {
        assert_eq!(poly.winding(), Winding::Ccw, "{:?}", poly);
        check_invariance(&poly);
    }
}

#[test]
fn random_skylines() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..200 {
        let poly = random_skyline(&mut rng);
        assert_eq!(poly.winding(), Winding::Ccw, "{:?}", poly);
        assert!(poly.signed_area2() > 0);
        check_invariance(&poly);
    }
}

#[test]
fn collinear_vertices_break_convexity_not_winding() {
    let rect = Polygon::from_coords([(0, 0), (4, 0), (4, 2), (0, 2)]);
    let with_midpoint = Polygon::from_coords([(0, 0), (2, 0), (4, 0), (4, 2), (0, 2)]);
    assert!(rect.is_convex());
    assert!(!with_midpoint.is_convex());
    assert_eq!(with_midpoint.winding(), rect.winding());
}

#[test]
fn degenerate_polygons_are_indeterminate() {
    let flat = Polygon::from_coords([(0, 0), (2, 0), (4, 0)]);
    assert_eq!(flat.winding(), Winding::Indeterminate);
    assert!(!flat.is_valid());
    assert_eq!(Polygon::from_coords([(0, 0), (1, 1)]).winding(), Winding::Indeterminate);
}
