//! Planar graph of directed, shape-tagged segments split at every intersection.

use alloc::collections::BTreeSet;
use arrayvec::ArrayVec;
use ordered_float::OrderedFloat;
use slab::Slab;
use smallvec::SmallVec;

use crate::math::Point;
use crate::shape::{Line, Segment};
use crate::utils::hashmap::HashMap;
use crate::utils::PointKey;

/// The identifier of the shape that produced a connection.
pub type ShapeId = usize;

/// A stable handle to a node of an [`IntersectionGraph`].
///
/// Handles of removed nodes may be reused by nodes created later.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A node of an [`IntersectionGraph`]: a unique point with its adjacency.
#[derive(Clone, Debug)]
pub struct Node {
    /// The location of this node.
    pub point: Point,
    /// The destinations of the connections starting at this node.
    pub forward: BTreeSet<NodeId>,
    /// The origins of the connections ending at this node.
    pub backward: BTreeSet<NodeId>,
}

/// A directed edge of an [`IntersectionGraph`].
#[derive(Clone, Debug)]
pub struct Connection {
    /// The node this connection starts at.
    pub origin: NodeId,
    /// The node this connection ends at.
    pub dest: NodeId,
    /// Every shape that inserted a segment covering this connection.
    pub shape_ids: BTreeSet<ShapeId>,
    /// The segment from the origin point to the destination point.
    pub segment: Segment,
}

/// A planar subdivision built by inserting segments one by one.
///
/// Each insertion splits the new segment and every existing connection it
/// meets at their intersection points, so that connections only ever meet at
/// their endpoints. Connections are directed; inserting a segment along an
/// existing connection, in the same direction, adds the new shape id to that
/// connection instead of duplicating it.
///
/// Nodes live in an arena and refer to each other through [`NodeId`]s.
///
/// # Example
///
/// ```
/// # use shape45::transformation::IntersectionGraph;
/// # use shape45::math::Point;
/// let mut graph = IntersectionGraph::new();
/// graph.insert_segment(Point::new(2.0, 6.0), Point::new(10.0, 6.0), 0);
/// graph.insert_segment(Point::new(7.0, 3.0), Point::new(7.0, 9.0), 1);
///
/// assert_eq!(graph.node_count(), 5);
/// assert!(graph.node_at(&Point::new(7.0, 6.0)).is_some());
/// assert!(!graph.is_connected(&Point::new(2.0, 6.0), &Point::new(10.0, 6.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct IntersectionGraph {
    nodes: Slab<Node>,
    lookup: HashMap<PointKey, NodeId>,
    connections: HashMap<(NodeId, NodeId), Connection>,
}

impl IntersectionGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of directed connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// The node at `id`, if it exists.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// The node located exactly at `pt`.
    pub fn node_at(&self, pt: &Point) -> Option<NodeId> {
        self.lookup.get(&PointKey::new(pt)).copied()
    }

    /// All nodes with their handles.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(i, node)| (NodeId(i), node))
    }

    /// All connections, in no particular order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// The connection going from `origin` to `dest`.
    pub fn connection(&self, origin: NodeId, dest: NodeId) -> Option<&Connection> {
        self.connections.get(&(origin, dest))
    }

    /// The connection going from the node at `a` to the node at `b`.
    pub fn connection_between(&self, a: &Point, b: &Point) -> Option<&Connection> {
        self.connection(self.node_at(a)?, self.node_at(b)?)
    }

    /// Is there a connection going from the node at `a` to the node at `b`?
    pub fn is_connected(&self, a: &Point, b: &Point) -> bool {
        self.connection_between(a, b).is_some()
    }

    /// Is there a connection going from the node at `b` to the node at `a`?
    ///
    /// This is checked through the backward adjacency of `a`.
    pub fn is_connected_backward(&self, a: &Point, b: &Point) -> bool {
        match (self.node_at(a), self.node_at(b)) {
            (Some(a), Some(b)) => self.nodes[a.0].backward.contains(&b),
            _ => false,
        }
    }

    /// The node at `pt`, created if it doesn't exist yet.
    pub fn add_node(&mut self, pt: Point) -> NodeId {
        let key = PointKey::new(&pt);
        if let Some(id) = self.lookup.get(&key) {
            return *id;
        }

        let id = NodeId(self.nodes.insert(Node {
            point: key.point(),
            forward: BTreeSet::new(),
            backward: BTreeSet::new(),
        }));
        let _ = self.lookup.insert(key, id);
        id
    }

    /// Removes a node and every connection starting or ending at it.
    ///
    /// Returns the removed node, or `None` if `id` was not a node of this graph.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.try_remove(id.0)?;

        for dest in &node.forward {
            let _ = self.connections.remove(&(id, *dest));
            if let Some(other) = self.nodes.get_mut(dest.0) {
                let _ = other.backward.remove(&id);
            }
        }
        for origin in &node.backward {
            let _ = self.connections.remove(&(*origin, id));
            if let Some(other) = self.nodes.get_mut(origin.0) {
                let _ = other.forward.remove(&id);
            }
        }

        let _ = self.lookup.remove(&PointKey::new(&node.point));
        Some(node)
    }

    /// Removes the node at `pt`, if any. See [`IntersectionGraph::remove_node`].
    pub fn remove_node_at(&mut self, pt: &Point) -> Option<Node> {
        let id = self.node_at(pt)?;
        self.remove_node(id)
    }

    /// Adds a connection from `origin` to `dest` tagged with `shape_ids`, or
    /// merges `shape_ids` into the existing one.
    fn connect(&mut self, origin: NodeId, dest: NodeId, shape_ids: &BTreeSet<ShapeId>) {
        if origin == dest {
            return;
        }

        if let Some(connection) = self.connections.get_mut(&(origin, dest)) {
            connection.shape_ids.extend(shape_ids.iter().copied());
            return;
        }

        let segment = Segment::new(self.nodes[origin.0].point, self.nodes[dest.0].point);
        let _ = self.connections.insert(
            (origin, dest),
            Connection {
                origin,
                dest,
                shape_ids: shape_ids.clone(),
                segment,
            },
        );
        let _ = self.nodes[origin.0].forward.insert(dest);
        let _ = self.nodes[dest.0].backward.insert(origin);
    }

    fn disconnect(&mut self, origin: NodeId, dest: NodeId) -> Option<Connection> {
        let connection = self.connections.remove(&(origin, dest))?;
        let _ = self.nodes[origin.0].forward.remove(&dest);
        let _ = self.nodes[dest.0].backward.remove(&origin);
        Some(connection)
    }

    /// Replaces the connection `origin -> dest` by a chain through `points`.
    fn split_connection(&mut self, origin: NodeId, dest: NodeId, points: &[Point]) {
        let Some(connection) = self.disconnect(origin, dest) else {
            return;
        };

        log::trace!(
            "Splitting connection {:?} -> {:?} at {} point(s).",
            connection.segment.a,
            connection.segment.b,
            points.len()
        );

        let mut chain: SmallVec<[NodeId; 4]> = SmallVec::new();
        chain.push(origin);
        chain.extend(
            sorted_along(&connection.segment.a, points)
                .into_iter()
                .map(|pt| self.add_node(pt)),
        );
        chain.push(dest);

        for pair in chain.windows(2) {
            self.connect(pair[0], pair[1], &connection.shape_ids);
        }
    }

    /// Inserts the directed segment `p1 -> p2` produced by shape `shape_id`.
    ///
    /// 1. Nodes are created at `p1` and `p2` if needed.
    /// 2. Every existing connection is tested against the new segment.
    /// 3. Each intersection point that is not an endpoint of the new segment
    ///    becomes a node on its path, ordered by distance from `p1`.
    /// 4. Each existing connection met anywhere but at its own endpoints is
    ///    replaced by two (or more) connections through the intersection
    ///    points, keeping its shape ids.
    /// 5. The path of the new segment is connected pairwise, tagged with
    ///    `shape_id`, merging into connections that already exist.
    ///
    /// Pairs of 45°-compliant segments are intersected with the exact
    /// closed-form formulas, other pairs by solving the line equations.
    /// Collinear overlaps split at the ends of the shared part.
    pub fn insert_segment(&mut self, p1: Point, p2: Point, shape_id: ShapeId) {
        let n1 = self.add_node(p1);
        let n2 = self.add_node(p2);
        if n1 == n2 {
            return;
        }

        let (p1, p2) = (self.nodes[n1.0].point, self.nodes[n2.0].point);
        let new_segment = Segment::new(p1, p2);
        let mut on_new_segment: SmallVec<[Point; 4]> = SmallVec::new();
        let mut to_split = Vec::new();

        for (&(origin, dest), connection) in &self.connections {
            let existing = &connection.segment;
            let mut on_existing: SmallVec<[Point; 2]> = SmallVec::new();

            for pt in shared_points(&new_segment, existing) {
                if pt != p1 && pt != p2 {
                    on_new_segment.push(pt);
                }
                if pt != existing.a && pt != existing.b {
                    on_existing.push(pt);
                }
            }

            if !on_existing.is_empty() {
                to_split.push((origin, dest, on_existing));
            }
        }

        for (origin, dest, points) in to_split {
            self.split_connection(origin, dest, &points);
        }

        let mut path: SmallVec<[NodeId; 4]> = SmallVec::new();
        path.push(n1);
        for pt in sorted_along(&p1, &on_new_segment) {
            let id = self.add_node(pt);
            if path.last() != Some(&id) {
                path.push(id);
            }
        }
        path.push(n2);

        let ids = BTreeSet::from([shape_id]);
        for pair in path.windows(2) {
            self.connect(pair[0], pair[1], &ids);
        }
    }

    /// Inserts the grid line `line` produced by shape `shape_id`.
    ///
    /// See [`IntersectionGraph::insert_segment`].
    pub fn insert_line(&mut self, line: &Line, shape_id: ShapeId) {
        self.insert_segment(line.start.to_point(), line.end.to_point(), shape_id)
    }
}

/// The points shared by two segments: their crossing point, or the ends of
/// their collinear overlap.
fn shared_points(s1: &Segment, s2: &Segment) -> ArrayVec<Point, 2> {
    let crossing = if s1.is_compliant() && s2.is_compliant() {
        s1.intersection45(s2)
    } else {
        // The rounded crossing depends on the segment it is interpolated on,
        // so both insertion orders must solve the same ordered pair.
        let (c1, c2) = (canonical(s1), canonical(s2));
        if segment_key(&c1) <= segment_key(&c2) {
            c1.intersection(&c2)
        } else {
            c2.intersection(&c1)
        }
    };

    match crossing {
        Some(pt) => core::iter::once(pt).collect(),
        None => s1.overlap_points(s2),
    }
}

/// `segment` with its endpoints in y-major order.
fn canonical(segment: &Segment) -> Segment {
    if PointKey::new(&segment.b) < PointKey::new(&segment.a) {
        Segment::new(segment.b, segment.a)
    } else {
        *segment
    }
}

fn segment_key(segment: &Segment) -> (PointKey, PointKey) {
    (PointKey::new(&segment.a), PointKey::new(&segment.b))
}

/// Deduplicated `points`, sorted by their distance from `origin`.
fn sorted_along(origin: &Point, points: &[Point]) -> SmallVec<[Point; 4]> {
    let mut sorted: SmallVec<[Point; 4]> = points.iter().copied().collect();
    sorted.sort_by_key(|pt| OrderedFloat(na::distance_squared(origin, pt)));
    sorted.dedup();
    sorted
}
