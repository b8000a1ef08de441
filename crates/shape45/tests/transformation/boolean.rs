use na::Point2;
use shape45::shape::{Polygon, VertexLoop};
use shape45::transformation::{boolean, BooleanOp};

fn rect(x: i64, y: i64, w: i64, h: i64) -> Polygon {
    Polygon::from_coords([(x, y), (x + w, y), (x + w, y + h), (x, y + h)])
}

fn random_rect(rng: &mut oorandom::Rand32) -> Polygon {
    let x = rng.rand_range(0..8) as i64;
    let y = rng.rand_range(0..8) as i64;
    let w = rng.rand_range(1..6) as i64;
    let h = rng.rand_range(1..6) as i64;
    rect(x, y, w, h)
}

/// Sum of the signed areas of the loops: holes count negatively.
fn area(loops: &[Vec<Point2<f64>>]) -> f64 {
    loops
        .iter()
        .map(|l| {
            let n = l.len();
            (0..n)
                .map(|i| l[i].coords.perp(&l[(i + 1) % n].coords))
                .sum::<f64>()
                / 2.0
        })
        .sum()
}

#[test]
fn random_rectangles_conserve_area() {
    let mut rng = oorandom::Rand32::new(2024);

    for _ in 0..300 {
        let a = random_rect(&mut rng);
        let b = random_rect(&mut rng);

        let union = area(&boolean(&a, &b, BooleanOp::Union).unwrap());
        let intersection = area(&boolean(&a, &b, BooleanOp::Intersection).unwrap());
        let difference = area(&boolean(&a, &b, BooleanOp::Subtraction).unwrap());

        assert_eq!(union + intersection, a.area() + b.area(), "{:?} {:?}", a, b);
        assert_eq!(difference, a.area() - intersection, "{:?} {:?}", a, b);
    }
}

#[test]
fn results_have_no_collinear_vertices() {
    let a = rect(0, 0, 4, 2);
    let b = rect(4, 0, 4, 2);
    let union = boolean(&a, &b, BooleanOp::Union).unwrap();
    assert_eq!(
        union,
        vec![vec![
            Point2::new(0.0, 0.0),
            Point2::new(8.0, 0.0),
            Point2::new(8.0, 2.0),
            Point2::new(0.0, 2.0),
        ]]
    );
}

#[test]
fn corner_touching_squares_stay_apart() {
    let a = rect(0, 0, 2, 2);
    let b = rect(2, 2, 2, 2);
    let union = boolean(&a, &b, BooleanOp::Union).unwrap();
    assert_eq!(union.len(), 2);
    assert!(union.iter().all(|l| l.len() == 4));
    assert!(boolean(&a, &b, BooleanOp::Intersection).unwrap().is_empty());
}

#[test]
fn octagon_minus_diamond() {
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
    let diamond = Polygon::from_coords([(4, 2), (6, 4), (4, 6), (2, 4)]);
    let result = boolean(&octagon, &diamond, BooleanOp::Subtraction).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(area(&result), octagon.area() - diamond.area());
}
