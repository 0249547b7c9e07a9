//! Tests for the face plane emitter.

use super::*;
use approx::assert_relative_eq;

fn xy_plane(grid_x: u32, grid_y: u32) -> PlaneSpec {
    PlaneSpec {
        axes: PlaneAxes::new(Axis::X, Axis::Y, Axis::Z),
        u_dir: Direction::Positive,
        v_dir: Direction::Positive,
        width: 2.0,
        height: 4.0,
        depth: 6.0,
        grid_x,
        grid_y,
        material_index: 7,
    }
}

/// Scatter writes each component into its own slot.
#[test]
fn scatter_places_components() {
    let axes = PlaneAxes::new(Axis::Z, Axis::Y, Axis::X);
    assert_eq!(axes.scatter(1.0, 2.0, 3.0), Vec3::new(3.0, 2.0, 1.0));

    let axes = PlaneAxes::new(Axis::X, Axis::Z, Axis::Y);
    assert_eq!(axes.scatter(1.0, 2.0, 3.0), Vec3::new(1.0, 3.0, 2.0));
}

#[test]
fn direction_of_depth() {
    assert_eq!(Direction::of(2.0), Direction::Positive);
    assert_eq!(Direction::of(-2.0), Direction::Negative);
    assert_eq!(Direction::of(0.0), Direction::Positive);
    assert_eq!(Direction::of(-0.0), Direction::Positive);
}

/// A single quad emits four corners, row by row.
#[test]
fn single_quad_layout() {
    let mesh = build_plane(&xy_plane(1, 1));

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(
        mesh.vertices(),
        &[
            -1.0, -2.0, 3.0, //
            1.0, -2.0, 3.0, //
            -1.0, 2.0, 3.0, //
            1.0, 2.0, 3.0,
        ]
    );
    assert_eq!(mesh.uvs(), &[0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(mesh.indices(), &[0, 2, 1, 2, 3, 1]);
    assert!(mesh.normal_vectors().all(|n| n == Vec3::Z));
}

#[test]
fn directions_mirror_in_plane_coordinates() {
    let spec = PlaneSpec {
        u_dir: Direction::Negative,
        v_dir: Direction::Negative,
        ..xy_plane(1, 1)
    };
    let mesh = build_plane(&spec);
    let first = mesh.positions().next();
    assert_eq!(first, Some(Vec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn negative_depth_flips_normal_and_offset() {
    let spec = PlaneSpec {
        depth: -6.0,
        ..xy_plane(1, 1)
    };
    let mesh = build_plane(&spec);
    assert!(mesh.positions().all(|p| p.z == -3.0));
    assert!(mesh.normal_vectors().all(|n| n == Vec3::NEG_Z));
}

#[test]
fn zero_depth_normal_is_positive() {
    let spec = PlaneSpec {
        depth: 0.0,
        ..xy_plane(1, 1)
    };
    let mesh = build_plane(&spec);
    assert!(mesh.positions().all(|p| p.z == 0.0));
    assert!(mesh.normal_vectors().all(|n| n == Vec3::Z));
}

/// A 2x3 grid emits (2+1)*(3+1) vertices and six indices per cell.
#[test]
fn subdivided_grid_counts() {
    let spec = xy_plane(2, 3);
    let mesh = build_plane(&spec);

    assert_eq!(spec.vertex_count(), 12);
    assert_eq!(spec.index_count(), 36);
    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.index_count(), 36);
    assert_eq!(
        mesh.groups(),
        &[Group {
            start: 0,
            count: 36,
            material_index: 7,
        }]
    );
    assert!(mesh.validate().is_ok());
}

#[test]
fn subdivided_grid_cells() {
    let mesh = build_plane(&xy_plane(2, 3));
    // first cell, row stride 3
    assert_eq!(&mesh.indices()[0..6], &[0, 3, 1, 3, 4, 1]);
    // second cell in the first row
    assert_eq!(&mesh.indices()[6..12], &[1, 4, 2, 4, 5, 2]);
    // last cell
    assert_eq!(&mesh.indices()[30..36], &[7, 10, 8, 10, 11, 8]);
}

#[test]
fn subdivided_grid_coordinates() {
    let mesh = build_plane(&xy_plane(2, 3));
    let positions: Vec<Vec3> = mesh.positions().collect();
    let uvs: Vec<Vec2> = mesh.uv_pairs().collect();

    // middle of the first row
    assert_relative_eq!(positions[1].x, 0.0);
    assert_relative_eq!(positions[1].y, -2.0);
    // second row
    assert_relative_eq!(positions[3].y, -2.0 + 4.0 / 3.0, epsilon = 1e-6);
    assert_relative_eq!(uvs[3].y, 1.0 - 1.0 / 3.0, epsilon = 1e-6);
    // last vertex
    assert_eq!(positions[11], Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(uvs[11], Vec2::new(1.0, 0.0));
}

/// Indices and group start follow the cursor handed in.
#[test]
fn cursor_offsets_indices_and_group() {
    let mut mesh = MeshData::default();
    let spec = xy_plane(1, 1);

    let cursor = emit_plane(&mut mesh, &spec, PlaneCursor::default());
    assert_eq!(
        cursor,
        PlaneCursor {
            vertex_offset: 4,
            index_offset: 6,
        }
    );

    let cursor = emit_plane(&mut mesh, &spec, cursor);
    assert_eq!(
        cursor,
        PlaneCursor {
            vertex_offset: 8,
            index_offset: 12,
        }
    );
    assert_eq!(&mesh.indices()[6..12], &[4, 6, 5, 6, 7, 5]);
    assert_eq!(mesh.groups()[1].start, 6);
    assert!(mesh.validate().is_ok());
}
