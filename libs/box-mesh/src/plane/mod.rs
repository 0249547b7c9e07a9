//! # Face Plane Emitter
//!
//! Emits one rectangular grid of vertices, normals, UVs and triangles and
//! records it as a single material group.
//!
//! The plane is laid out in local `(x, y)` coordinates centered on the
//! origin, then scattered into output slots through a [`PlaneAxes`]
//! permutation. Rows are emitted outer, columns inner:
//!
//! ```text
//! iy = 1   b ─── c
//!          │ ╲   │
//!          │   ╲ │
//! iy = 0   a ─── d
//!        ix = 0  ix = 1
//! ```
//!
//! Each cell becomes the triangles `(a, b, d)` and `(b, c, d)`.

use config::constants::INDICES_PER_QUAD;
use glam::{Vec2, Vec3};
use log::trace;

use crate::mesh::{Group, MeshData};

#[cfg(test)]
mod tests;

/// An output coordinate slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    fn slot(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Sign applied along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// `+1.0` or `-1.0`.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }

    /// Direction of a depth offset. Zero counts as positive.
    #[inline]
    pub fn of(value: f32) -> Self {
        if value < 0.0 {
            Direction::Negative
        } else {
            Direction::Positive
        }
    }
}

/// Which output slots receive the in-plane `u`, in-plane `v` and depth `w`
/// coordinates. The three axes must be distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaneAxes {
    pub u: Axis,
    pub v: Axis,
    pub w: Axis,
}

impl PlaneAxes {
    pub const fn new(u: Axis, v: Axis, w: Axis) -> Self {
        Self { u, v, w }
    }

    /// Places `(u, v, w)` components into an xyz vector.
    #[inline]
    pub fn scatter(&self, u: f32, v: f32, w: f32) -> Vec3 {
        let mut slots = [0.0f32; 3];
        slots[self.u.slot()] = u;
        slots[self.v.slot()] = v;
        slots[self.w.slot()] = w;
        Vec3::from_array(slots)
    }
}

/// Parameters for one emitted plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneSpec {
    pub axes: PlaneAxes,
    pub u_dir: Direction,
    pub v_dir: Direction,
    /// Extent along `u`.
    pub width: f32,
    /// Extent along `v`.
    pub height: f32,
    /// Full offset along `w`; the plane sits at `depth / 2` and its sign
    /// picks the normal direction.
    pub depth: f32,
    /// Quad subdivisions along `u`. Must be positive.
    pub grid_x: u32,
    /// Quad subdivisions along `v`. Must be positive.
    pub grid_y: u32,
    pub material_index: u32,
}

impl PlaneSpec {
    /// Vertices this plane emits.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        (self.grid_x + 1) * (self.grid_y + 1)
    }

    /// Index values this plane emits.
    #[inline]
    pub fn index_count(&self) -> u32 {
        INDICES_PER_QUAD * self.grid_x * self.grid_y
    }
}

/// Running totals threaded through successive plane emissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaneCursor {
    /// Vertices emitted so far; added to this plane's local indices.
    pub vertex_offset: u32,
    /// Index values emitted so far; becomes this plane's group start.
    pub index_offset: u32,
}

/// Builds a mesh containing a single plane.
///
/// # Example
///
/// ```rust
/// use box_mesh::plane::{build_plane, Axis, Direction, PlaneAxes, PlaneSpec};
///
/// let mesh = build_plane(&PlaneSpec {
///     axes: PlaneAxes::new(Axis::X, Axis::Y, Axis::Z),
///     u_dir: Direction::Positive,
///     v_dir: Direction::Positive,
///     width: 2.0,
///     height: 2.0,
///     depth: 0.0,
///     grid_x: 2,
///     grid_y: 2,
///     material_index: 0,
/// });
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.index_count(), 24);
/// ```
pub fn build_plane(spec: &PlaneSpec) -> MeshData {
    let mut mesh = MeshData::with_capacity(
        spec.vertex_count() as usize,
        spec.index_count() as usize,
        1,
    );
    emit_plane(&mut mesh, spec, PlaneCursor::default());
    mesh
}

/// Appends one plane to `mesh` and returns the advanced cursor.
pub(crate) fn emit_plane(mesh: &mut MeshData, spec: &PlaneSpec, cursor: PlaneCursor) -> PlaneCursor {
    debug_assert!(spec.grid_x > 0 && spec.grid_y > 0, "grid must be at least 1x1");

    let grid_x = spec.grid_x as f32;
    let grid_y = spec.grid_y as f32;

    let segment_width = spec.width / grid_x;
    let segment_height = spec.height / grid_y;
    let width_half = spec.width / 2.0;
    let height_half = spec.height / 2.0;
    let depth_half = spec.depth / 2.0;

    let u_sign = spec.u_dir.sign();
    let v_sign = spec.v_dir.sign();
    let normal = spec.axes.scatter(0.0, 0.0, Direction::of(spec.depth).sign());

    for iy in 0..=spec.grid_y {
        let y = iy as f32 * segment_height - height_half;
        for ix in 0..=spec.grid_x {
            let x = ix as f32 * segment_width - width_half;

            let position = spec.axes.scatter(x * u_sign, y * v_sign, depth_half);
            let uv = Vec2::new(ix as f32 / grid_x, 1.0 - iy as f32 / grid_y);
            mesh.push_vertex(position, normal, uv);
        }
    }

    let row = spec.grid_x + 1;
    let base = cursor.vertex_offset;
    for iy in 0..spec.grid_y {
        for ix in 0..spec.grid_x {
            let a = base + ix + row * iy;
            let b = base + ix + row * (iy + 1);
            let c = base + (ix + 1) + row * (iy + 1);
            let d = base + (ix + 1) + row * iy;

            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }

    let group = Group {
        start: cursor.index_offset,
        count: spec.index_count(),
        material_index: spec.material_index,
    };
    mesh.push_group(group);

    trace!(
        "plane material={} grid={}x{} vertices={}..{} indices={}..{}",
        spec.material_index,
        spec.grid_x,
        spec.grid_y,
        base,
        base + spec.vertex_count(),
        group.start,
        group.end(),
    );

    PlaneCursor {
        vertex_offset: base + spec.vertex_count(),
        index_offset: group.end(),
    }
}
