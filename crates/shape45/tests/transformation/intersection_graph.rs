use std::collections::BTreeSet;

use na::Point2;
use shape45::shape::{GridPoint, Line};
use shape45::transformation::IntersectionGraph;
use shape45::utils::PointKey;

fn pt(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

fn line(x1: i64, y1: i64, x2: i64, y2: i64) -> Line {
    Line::new(GridPoint::new(x1, y1), GridPoint::new(x2, y2))
}

fn random_line(rng: &mut oorandom::Rand32) -> Line {
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
    let x = rng.rand_range(0..13) as i64 - 6;
    let y = rng.rand_range(0..13) as i64 - 6;
    let (dx, dy) = DIRS[rng.rand_range(0..8) as usize];
    let len = rng.rand_range(1..7) as i64;
    line(x, y, x + dx * len, y + dy * len)
}

/// The node points and the directed connections of a graph, ignoring shape IDs.
fn topology(graph: &IntersectionGraph) -> (BTreeSet<PointKey>, BTreeSet<(PointKey, PointKey)>) {
    let nodes = graph.nodes().map(|(_, n)| PointKey::new(&n.point)).collect();
    let connections = graph
        .connections()
        .map(|c| {
            (
                PointKey::new(&c.segment.a),
                PointKey::new(&c.segment.b),
            )
        })
        .collect();
    (nodes, connections)
}

#[test]
fn disjoint_rectangle_edges() {
    let mut graph = IntersectionGraph::new();
    graph.insert_line(&line(2, 12, 2, 6), 0);
    graph.insert_line(&line(4, 3, 7, 3), 1);

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.connection_count(), 2);
    assert!(graph.is_connected(&pt(2.0, 12.0), &pt(2.0, 6.0)));
    assert!(!graph.is_connected(&pt(2.0, 6.0), &pt(2.0, 12.0)));
    assert!(graph.is_connected_backward(&pt(2.0, 6.0), &pt(2.0, 12.0)));
    assert!(graph.is_connected(&pt(4.0, 3.0), &pt(7.0, 3.0)));
}

#[test]
fn crossing_segments_are_split() {
    let mut graph = IntersectionGraph::new();
    graph.insert_line(&line(2, 6, 10, 6), 0);
    graph.insert_line(&line(7, 3, 7, 9), 1);

    assert_eq!(graph.node_count(), 5);
    assert!(graph.node_at(&pt(7.0, 6.0)).is_some());
    assert!(!graph.is_connected(&pt(2.0, 6.0), &pt(10.0, 6.0)));
    assert!(graph.is_connected(&pt(2.0, 6.0), &pt(7.0, 6.0)));
    assert!(graph.is_connected(&pt(7.0, 6.0), &pt(10.0, 6.0)));
    assert!(graph.is_connected(&pt(7.0, 3.0), &pt(7.0, 6.0)));
    assert!(graph.is_connected(&pt(7.0, 6.0), &pt(7.0, 9.0)));

    let halves = [
        graph.connection_between(&pt(2.0, 6.0), &pt(7.0, 6.0)),
        graph.connection_between(&pt(7.0, 6.0), &pt(10.0, 6.0)),
    ];
    for half in halves {
        assert_eq!(half.unwrap().shape_ids, BTreeSet::from([0]));
    }
}

#[test]
fn node_removal_drops_every_incident_connection() {
    let mut graph = IntersectionGraph::new();
    graph.insert_line(&line(2, 6, 10, 6), 0);
    graph.insert_line(&line(7, 3, 7, 9), 1);

    let removed = graph.remove_node_at(&pt(7.0, 6.0)).unwrap();
    assert_eq!(removed.point, pt(7.0, 6.0));
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.connection_count(), 0);
    assert!(graph.nodes().all(|(_, n)| n.forward.is_empty() && n.backward.is_empty()));
    assert!(graph.remove_node_at(&pt(7.0, 6.0)).is_none());
}

#[test]
fn square_outlines() {
    let mut graph = IntersectionGraph::new();
    let a = [(0, 0), (4, 0), (4, 4), (0, 4)];
    let b = [(2, 2), (6, 2), (6, 6), (2, 6)];

    for (id, square) in [a, b].iter().enumerate() {
        for i in 0..4 {
            let (x1, y1) = square[i];
            let (x2, y2) = square[(i + 1) % 4];
            graph.insert_line(&line(x1, y1, x2, y2), id);
        }
    }

    // 8 corners and 2 crossings; every edge crossing once is split in two.
    assert_eq!(graph.node_count(), 10);
    assert_eq!(graph.connection_count(), 12);
}

#[test]
fn random_insertion_order_independence() {
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..500 {
        let l1 = random_line(&mut rng);
        let l2 = random_line(&mut rng);

        let mut forward = IntersectionGraph::new();
        forward.insert_line(&l1, 0);
        forward.insert_line(&l2, 1);

        let mut backward = IntersectionGraph::new();
        backward.insert_line(&l2, 1);
        backward.insert_line(&l1, 0);

        assert_eq!(topology(&forward), topology(&backward), "{:?} {:?}", l1, l2);
    }
}

#[test]
fn random_general_insertion_order_independence() {
    let mut rng = oorandom::Rand32::new(17);
    let coord = |rng: &mut oorandom::Rand32| rng.rand_range(0..40) as i64;

    for _ in 0..2000 {
        let l1 = line(coord(&mut rng), coord(&mut rng), coord(&mut rng), coord(&mut rng));
        let l2 = line(coord(&mut rng), coord(&mut rng), coord(&mut rng), coord(&mut rng));

        let mut forward = IntersectionGraph::new();
        forward.insert_line(&l1, 0);
        forward.insert_line(&l2, 1);

        let mut backward = IntersectionGraph::new();
        backward.insert_line(&l2, 1);
        backward.insert_line(&l1, 0);

        assert_eq!(topology(&forward), topology(&backward), "{:?} {:?}", l1, l2);
    }
}

#[test]
fn random_shape_ids_are_unioned_on_overlap() {
    let mut rng = oorandom::Rand32::new(5);

    for _ in 0..200 {
        let l = random_line(&mut rng);
        let mut graph = IntersectionGraph::new();
        graph.insert_line(&l, 3);
        graph.insert_line(&l, 8);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.connection_count(), 1);
        let connection = graph.connections().next().unwrap();
        assert_eq!(connection.shape_ids, BTreeSet::from([3, 8]));
    }
}
