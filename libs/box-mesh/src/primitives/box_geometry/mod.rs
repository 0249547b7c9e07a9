//! # Box Primitive
//!
//! A box centered at the origin, built from six single-quad planes with one
//! material group per face. Faces do not share vertices, so the mesh always
//! has 24 vertices and 36 indices whatever the dimensions.

use config::constants::{BOX_FACE_COUNT, BOX_INDEX_COUNT, BOX_SEGMENTS, BOX_VERTEX_COUNT};
use glam::Vec3;
use log::debug;

use crate::mesh::MeshData;
use crate::plane::{emit_plane, Axis, Direction, PlaneAxes, PlaneCursor, PlaneSpec};


/// One face of the box, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

/// Box dimension selected for a plane extent.
#[derive(Debug, Clone, Copy)]
enum Extent {
    Width,
    Height,
    Depth,
}

impl Extent {
    #[inline]
    fn of(self, size: Vec3) -> f32 {
        match self {
            Extent::Width => size.x,
            Extent::Height => size.y,
            Extent::Depth => size.z,
        }
    }
}

/// How a face maps box dimensions onto a plane.
#[derive(Debug, Clone, Copy)]
struct FaceLayout {
    axes: PlaneAxes,
    u_dir: Direction,
    v_dir: Direction,
    plane_width: Extent,
    plane_height: Extent,
    offset: Extent,
    facing: Direction,
}

impl BoxFace {
    /// All faces in emission order.
    pub const ALL: [BoxFace; BOX_FACE_COUNT] = [
        BoxFace::PositiveX,
        BoxFace::NegativeX,
        BoxFace::PositiveY,
        BoxFace::NegativeY,
        BoxFace::PositiveZ,
        BoxFace::NegativeZ,
    ];

    /// Material slot of this face's group; its position in [`BoxFace::ALL`].
    #[inline]
    pub fn material_index(self) -> u32 {
        self as u32
    }

    /// Outward unit normal for a box with positive dimensions.
    pub fn normal(self) -> Vec3 {
        match self {
            BoxFace::PositiveX => Vec3::X,
            BoxFace::NegativeX => Vec3::NEG_X,
            BoxFace::PositiveY => Vec3::Y,
            BoxFace::NegativeY => Vec3::NEG_Y,
            BoxFace::PositiveZ => Vec3::Z,
            BoxFace::NegativeZ => Vec3::NEG_Z,
        }
    }

    fn layout(self) -> FaceLayout {
        use Axis::{X, Y, Z};
        use Direction::{Negative, Positive};
        use Extent::{Depth, Height, Width};

        let (axes, u_dir, v_dir, plane_width, plane_height, offset, facing) = match self {
            BoxFace::PositiveX => (PlaneAxes::new(Z, Y, X), Negative, Negative, Depth, Height, Width, Positive),
            BoxFace::NegativeX => (PlaneAxes::new(Z, Y, X), Positive, Negative, Depth, Height, Width, Negative),
            BoxFace::PositiveY => (PlaneAxes::new(X, Z, Y), Positive, Positive, Width, Depth, Height, Positive),
            BoxFace::NegativeY => (PlaneAxes::new(X, Z, Y), Positive, Negative, Width, Depth, Height, Negative),
            BoxFace::PositiveZ => (PlaneAxes::new(X, Y, Z), Positive, Negative, Width, Height, Depth, Positive),
            BoxFace::NegativeZ => (PlaneAxes::new(X, Y, Z), Negative, Negative, Width, Height, Depth, Negative),
        };

        FaceLayout {
            axes,
            u_dir,
            v_dir,
            plane_width,
            plane_height,
            offset,
            facing,
        }
    }

    /// The plane this face emits for a box of the given size.
    pub fn plane(self, size: Vec3) -> PlaneSpec {
        let layout = self.layout();
        PlaneSpec {
            axes: layout.axes,
            u_dir: layout.u_dir,
            v_dir: layout.v_dir,
            width: layout.plane_width.of(size),
            height: layout.plane_height.of(size),
            depth: layout.facing.sign() * layout.offset.of(size),
            grid_x: BOX_SEGMENTS,
            grid_y: BOX_SEGMENTS,
            material_index: self.material_index(),
        }
    }
}

/// Builds a box of `width` x `height` x `depth` centered at the origin.
///
/// Zero or negative dimensions produce a flattened or mirrored box with the
/// same topology.
///
/// # Returns
///
/// A mesh with 24 vertices, 36 indices and 6 groups of 6 indices, one per
/// face in [`BoxFace::ALL`] order.
///
/// # Example
///
/// ```rust
/// use box_mesh::build_box;
///
/// let mesh = build_box(1.0, 1.0, 1.0);
/// assert_eq!(&mesh.vertices()[..3], &[0.5, 0.5, 0.5]);
/// assert_eq!(mesh.groups().len(), 6);
/// ```
pub fn build_box(width: f32, height: f32, depth: f32) -> MeshData {
    let size = Vec3::new(width, height, depth);
    let mut mesh = MeshData::with_capacity(BOX_VERTEX_COUNT, BOX_INDEX_COUNT, BOX_FACE_COUNT);

    let end = BoxFace::ALL
        .iter()
        .fold(PlaneCursor::default(), |cursor, face| {
            emit_plane(&mut mesh, &face.plane(size), cursor)
        });

    debug!(
        "box {}x{}x{}: {} vertices, {} indices",
        width, height, depth, end.vertex_offset, end.index_offset
    );

    mesh
}
