use na::Point2;
use shape45::shape::{GridPoint, Line};

fn line(x1: i64, y1: i64, x2: i64, y2: i64) -> Line {
    Line::new(GridPoint::new(x1, y1), GridPoint::new(x2, y2))
}

/// A random 45°-compliant line with endpoints in `[-20, 20]²`.
fn random_compliant_line(rng: &mut oorandom::Rand32) -> Line {
    const DIRS: [(i64, i64); 8] = [
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ];
    let x = rng.rand_range(0..21) as i64 - 10;
    let y = rng.rand_range(0..21) as i64 - 10;
    let (dx, dy) = DIRS[rng.rand_range(0..8) as usize];
    let len = rng.rand_range(1..11) as i64;
    line(x, y, x + dx * len, y + dy * len)
}

#[test]
fn axis_crossings_are_exact() {
    let h = line(0, 3, 10, 3);
    let v = line(7, 0, 7, 9);
    assert_eq!(h.intersection45(&v), Some(Point2::new(7.0, 3.0)));
    assert_eq!(v.intersection45(&h), Some(Point2::new(7.0, 3.0)));
}

#[test]
fn diagonal_crossings() {
    let h = line(0, 0, 10, 0);
    let d = line(1, -3, 5, 1);
    assert_eq!(h.intersection45(&d), Some(Point2::new(4.0, 0.0)));

    let v = line(2, -5, 2, 5);
    let d = line(0, 4, 4, 0);
    assert_eq!(v.intersection45(&d), Some(Point2::new(2.0, 2.0)));

    let d1 = line(0, 0, 3, 3);
    let d2 = line(0, 3, 3, 0);
    assert_eq!(d1.intersection45(&d2), Some(Point2::new(1.5, 1.5)));
}

#[test]
fn no_intersection_cases() {
    // Parallel.
    assert_eq!(line(0, 0, 4, 0).intersection45(&line(0, 1, 4, 1)), None);
    // Same line: parallel as well, the overlap is reported elsewhere.
    assert_eq!(line(0, 0, 4, 0).intersection45(&line(2, 0, 6, 0)), None);
    assert_eq!(line(0, 0, 4, 0).overlap_points(&line(2, 0, 6, 0)).len(), 2);
    // Not compliant.
    assert_eq!(line(0, 0, 1, 2).intersection45(&line(0, 1, 4, 1)), None);
    // Crossing point outside one of the segments.
    assert_eq!(line(0, 0, 4, 0).intersection45(&line(6, -1, 6, 1)), None);
}

#[test]
fn random_compliant_pairs_are_exact() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..2000 {
        let l1 = random_compliant_line(&mut rng);
        let l2 = random_compliant_line(&mut rng);

        if let Some(pt) = l1.intersection45(&l2) {
            // Crossings of integer 45° lines land on the half-integer grid.
            assert_eq!((pt.x * 2.0).fract(), 0.0);
            assert_eq!((pt.y * 2.0).fract(), 0.0);
            assert!(l1.contains_point(&pt), "{:?} {:?} {:?}", l1, l2, pt);
            assert!(l2.contains_point(&pt), "{:?} {:?} {:?}", l1, l2, pt);
            assert_eq!(l2.intersection45(&l1), Some(pt));

            if l1.is_horizontal() && l2.is_vertical() {
                assert_eq!(pt, Point2::new(l2.start.x as f64, l1.start.y as f64));
            }

            if let Some(general) = l1.intersection(&l2) {
                assert_relative_eq!(general, pt, epsilon = 1.0e-9);
            }
        } else if l1.kind() != l2.kind() {
            // Non-parallel compliant lines that don't cross have disjoint segments.
            assert!(l1.intersection(&l2).is_none());
        }
    }
}
