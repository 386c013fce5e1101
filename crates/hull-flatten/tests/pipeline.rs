//! End-to-end tests for the flattening pipeline.
//!
//! These exercise the full chain (projection, union, concave outline) on
//! small meshes with known silhouettes, plus the handoff to `hull-simplify`
//! via the segment cycle contract.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use hull_flatten::{flatten_hull, FlattenError, FlattenParams};
use hull_types::{unit_cube, Axis, Point2, Point3, Segment2, TriMesh};

fn assert_closed_cycle(segments: &[Segment2]) {
    assert!(!segments.is_empty());
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    let last = segments.len() - 1;
    assert_eq!(segments[last].end, segments[0].start);
}

#[test]
fn cube_silhouette_is_a_unit_square() {
    let cube = unit_cube();
    let hull = flatten_hull(&cube, &FlattenParams::default()).unwrap();

    // side faces are edge-on along Z and get rejected
    assert_eq!(hull.input_faces, 12);
    assert_eq!(hull.projected_triangles, 4);
    assert_eq!(hull.rejected_faces(), 8);

    assert_eq!(hull.loop_count, 1);
    assert_eq!(hull.node_count, 4);
    assert_eq!(hull.digs_performed, 0);

    assert_eq!(hull.segment_count(), 4);
    assert!((hull.perimeter() - 4.0).abs() < 1e-9);
    assert_closed_cycle(&hull.segments);
}

#[test]
fn cube_silhouette_matches_along_every_axis() {
    let cube = unit_cube();

    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let params = FlattenParams::default().with_axis(axis);
        let hull = flatten_hull(&cube, &params).unwrap();

        assert_eq!(hull.segment_count(), 4, "axis {axis:?}");
        assert!((hull.perimeter() - 4.0).abs() < 1e-9, "axis {axis:?}");
    }
}

#[test]
fn single_triangle_round_trips() {
    let mesh = TriMesh::from_parts(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2]],
    );

    let hull = flatten_hull(&mesh, &FlattenParams::default()).unwrap();
    assert_eq!(hull.segment_count(), 3);
    assert_closed_cycle(&hull.segments);

    let corners = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    ];
    for corner in corners {
        assert!(
            hull.segments.iter().any(|s| s.start == corner),
            "missing corner {corner:?}"
        );
    }
}

#[test]
fn l_plate_right_angle_is_not_dug_at_default_threshold() {
    // flat L-shaped plate in the XY plane, three unit squares
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0), // 0
        Point3::new(2.0, 0.0, 0.0), // 1
        Point3::new(2.0, 1.0, 0.0), // 2
        Point3::new(1.0, 1.0, 0.0), // 3  reentrant corner
        Point3::new(1.0, 2.0, 0.0), // 4
        Point3::new(0.0, 2.0, 0.0), // 5
        Point3::new(1.0, 0.0, 0.0), // 6
        Point3::new(0.0, 1.0, 0.0), // 7
    ];
    let faces = vec![
        [0, 6, 3],
        [0, 3, 7],
        [6, 1, 2],
        [6, 2, 3],
        [7, 3, 4],
        [7, 4, 5],
    ];
    let mesh = TriMesh::from_parts(vertices, faces);

    // the reentrant corner subtends exactly a right angle over the hull's
    // diagonal; cos(90°) is not below the default threshold, so the corner
    // stays inside and the outline keeps the convex-hull diagonal
    let hull = flatten_hull(&mesh, &FlattenParams::default()).unwrap();

    assert!((hull.perimeter() - (6.0 + 2.0_f64.sqrt())).abs() < 1e-9);
    assert_closed_cycle(&hull.segments);

    let corner = Point2::new(1.0, 1.0);
    assert!(hull.segments.iter().all(|s| s.start != corner));
}

#[test]
fn notched_plate_outline_follows_the_notch() {
    // 2x2 plate with a triangular notch cut into the bottom edge
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0), // 0
        Point3::new(2.0, 0.0, 0.0), // 1
        Point3::new(2.0, 2.0, 0.0), // 2
        Point3::new(0.0, 2.0, 0.0), // 3
        Point3::new(1.0, 0.8, 0.0), // 4  notch apex
    ];
    let faces = vec![[0, 4, 3], [4, 1, 2], [4, 2, 3]];
    let mesh = TriMesh::from_parts(vertices, faces);

    let hull = flatten_hull(&mesh, &FlattenParams::default()).unwrap();

    // the notch apex subtends an obtuse angle over the bottom hull edge
    // and an acute one over every other edge, so exactly one dig happens
    assert_eq!(hull.node_count, 5);
    assert_eq!(hull.digs_performed, 1);
    assert_eq!(hull.segment_count(), 5);
    assert_closed_cycle(&hull.segments);

    let apex = Point2::new(1.0, 0.8);
    assert!(hull.segments.iter().any(|s| s.start == apex));

    let expected = 6.0 + 2.0 * 1.64_f64.sqrt();
    assert!((hull.perimeter() - expected).abs() < 1e-9);
}

#[test]
fn edge_on_mesh_has_no_viable_geometry() {
    // a wall parallel to Z projects to a line along Z
    let mesh = TriMesh::from_parts(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 1.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    );

    assert!(matches!(
        flatten_hull(&mesh, &FlattenParams::default()),
        Err(FlattenError::NoViableGeometry)
    ));

    // the same wall is perfectly viable along Y
    let params = FlattenParams::default().with_axis(Axis::Y);
    assert!(flatten_hull(&mesh, &params).is_ok());
}

#[test]
fn empty_mesh_has_no_viable_geometry() {
    assert!(matches!(
        flatten_hull(&TriMesh::new(), &FlattenParams::default()),
        Err(FlattenError::NoViableGeometry)
    ));
}

#[test]
fn outline_survives_simplification_within_tolerance() {
    let cube = unit_cube();
    let hull = flatten_hull(&cube, &FlattenParams::default()).unwrap();

    // the square's corners all deviate from any chord by more than 0.01
    let tight = hull_simplify::simplify_outline(&hull.segments, 0.01).unwrap();
    assert_eq!(tight.segment_count(), 4);
    assert!((tight.segments.iter().map(Segment2::length).sum::<f64>() - 4.0).abs() < 1e-9);

    // a huge tolerance collapses the whole cycle
    let collapsed = hull_simplify::simplify_outline(&hull.segments, 100.0).unwrap();
    assert_eq!(collapsed.segment_count(), 1);
}

#[test]
fn concurrent_invocations_share_no_state() {
    let results: Vec<_> = std::thread::scope(|scope| {
        [Axis::X, Axis::Y, Axis::Z]
            .map(|axis| {
                scope.spawn(move || {
                    let cube = unit_cube();
                    let params = FlattenParams::default().with_axis(axis);
                    flatten_hull(&cube, &params)
                })
            })
            .map(|handle| handle.join().unwrap())
            .into_iter()
            .collect()
    });

    for hull in results {
        let hull = hull.unwrap();
        assert_eq!(hull.segment_count(), 4);
        assert!((hull.perimeter() - 4.0).abs() < 1e-9);
    }
}
