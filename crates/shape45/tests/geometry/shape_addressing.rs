use shape45::shape::{GeometryError, GridPoint, Polygon, Shape45, VertexLoop};

/// Four levels of nesting and a 45° octagonal hole.
///
/// Pre-order: 0 root, 1 left hole, 2 island, 3 hole in the island, 4 octagon.
pub fn deep_shape() -> Shape45 {
    let island = Shape45::new(
        Polygon::from_coords([(2, 2), (8, 2), (8, 8), (2, 8)]),
        vec![Shape45::from_coords([(3, 3), (3, 5), (5, 5), (5, 3)])],
    );
    let left_hole = Shape45::new(
        Polygon::from_coords([(1, 1), (1, 9), (9, 9), (9, 1)]),
        vec![island],
    );
    let octagon = Shape45::from_coords([
        (12, 1),
        (11, 2),
        (11, 8),
        (12, 9),
        (18, 9),
        (19, 8),
        (19, 2),
        (18, 1),
    ]);
    Shape45::new(
        Polygon::from_coords([(0, 0), (20, 0), (20, 20), (0, 20)]),
        vec![left_hole, octagon],
    )
}

#[test]
fn counts() {
    let shape = deep_shape();
    assert_eq!(shape.shape_count(), 5);
    assert_eq!(shape.total_vertex_count(), 24);
    assert_eq!(shape.nested_depth(), 3);
    assert_eq!(shape.all_vertices().len(), 24);
    assert_eq!(shape.all_edges().len(), 24);
}

#[test]
fn index_triple_is_consistent() {
    let shape = deep_shape();
    let all = shape.all_vertices();
    let mut expected_global = 0;

    for shape_index in 0..shape.shape_count() {
        let location = shape.shape_location(shape_index).unwrap();
        let node = shape.shape_for_index(shape_index).unwrap();
        assert_eq!(location.shape_index, shape_index);
        assert_eq!(location.vertex_base, expected_global);
        assert_eq!(shape.index_of_shape(node), Some(shape_index));

        for local in 0..node.outline().num_vertices() {
            let global = shape.global_vertex_index(shape_index, local).unwrap();
            assert_eq!(global, expected_global);
            assert_eq!(shape.vertex_location(global).unwrap(), (location.clone(), local));

            let vertex = node.outline().vertex(local).unwrap();
            assert_eq!(shape.vertex_global(global).unwrap(), vertex);
            assert_eq!(all[global], vertex);
            expected_global += 1;
        }
    }

    assert_eq!(expected_global, shape.total_vertex_count());
}

#[test]
fn edits_at_every_global_index() {
    let shape = deep_shape();
    let far = GridPoint::new(-100, -100);

    for global in 0..shape.total_vertex_count() {
        let edited = shape.set_vertex(global, far).unwrap();
        let (location, _) = shape.vertex_location(global).unwrap();

        for other in 0..shape.total_vertex_count() {
            let expected = if other == global {
                far
            } else {
                shape.vertex_global(other).unwrap()
            };
            assert_eq!(edited.vertex_global(other).unwrap(), expected);
        }

        // Only the edited node and its ancestors are rebuilt.
        for shape_index in 0..shape.shape_count() {
            let on_path = {
                let other = shape.shape_location(shape_index).unwrap();
                location.path.starts_with(&other.path)
            };
            let before = shape.shape_for_index(shape_index).unwrap();
            let after = edited.shape_for_index(shape_index).unwrap();
            assert_eq!(core::ptr::eq(before, after), !on_path);
        }

        let inserted = shape.add_vertex_after(global, far).unwrap();
        assert_eq!(inserted.total_vertex_count(), shape.total_vertex_count() + 1);
        assert_eq!(inserted.vertex_global(global + 1).unwrap(), far);

        let deleted = shape.delete_vertex(global).unwrap();
        assert_eq!(deleted.total_vertex_count(), shape.total_vertex_count() - 1);
    }
}

#[test]
fn index_of_foreign_shape() {
    let shape = deep_shape();
    let copy = deep_shape();
    assert_eq!(shape.index_of_shape(&shape), Some(0));
    assert_eq!(shape.index_of_shape(&copy), None);
    assert_eq!(shape.index_of_shape(copy.shape_for_index(2).unwrap()), None);
}

#[test]
fn out_of_range_indices() {
    let shape = deep_shape();
    assert_eq!(
        shape.vertex_global(24),
        Err(GeometryError::VertexIndexOutOfBounds { index: 24, len: 24 })
    );
    assert_eq!(
        shape.shape_for_index(5).unwrap_err(),
        GeometryError::SubShapeIndexOutOfBounds { index: 5, len: 5 }
    );
    assert!(shape.global_vertex_index(4, 8).is_err());
    assert_eq!(
        shape.delete_sub_shape_recursive(0).unwrap_err(),
        GeometryError::RootNotRemovable
    );
}

#[test]
fn sub_shape_edits() {
    let shape = deep_shape();

    let without_island = shape.delete_sub_shape_recursive(2).unwrap();
    assert_eq!(without_island.shape_count(), 3);
    assert_eq!(without_island.total_vertex_count(), 16);
    assert!(without_island.is_valid());

    let extra = Shape45::from_coords([(12, 12), (12, 14), (14, 14), (14, 12)]);
    let with_extra = shape.add_sub_shape_recursive(0, extra).unwrap();
    assert_eq!(with_extra.shape_count(), 6);
    assert_eq!(with_extra.shape_location(5).unwrap().path, vec![2]);
    assert!(with_extra.is_valid());

    let moved = shape.shift_sub_shape(4, -5, 0).unwrap();
    assert_eq!(moved.vertex_global(16).unwrap(), GridPoint::new(7, 1));
    // The octagon now overlaps the left hole.
    assert!(!moved.is_valid());
    assert!(moved.is_sub_shape_valid(4).unwrap());
}
