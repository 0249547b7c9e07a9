//! Configuration values shared across the box mesh workspace.
//!
//! Each public item documents its purpose so downstream crates can remain
//! declarative and avoid scattering literals.

// =============================================================================
// BUFFER LAYOUT
// =============================================================================

/// Floats per position or normal entry (x, y, z).
///
/// # Examples
/// ```
/// use config::constants::POSITION_COMPONENTS;
/// assert_eq!(POSITION_COMPONENTS, 3);
/// ```
pub const POSITION_COMPONENTS: usize = 3;

/// Floats per texture coordinate entry (u, v).
pub const UV_COMPONENTS: usize = 2;

/// Index values per triangle.
pub const INDICES_PER_TRIANGLE: usize = 3;

/// Index values emitted per grid cell: two triangles sharing a diagonal.
///
/// # Examples
/// ```
/// use config::constants::{INDICES_PER_QUAD, INDICES_PER_TRIANGLE};
/// assert_eq!(INDICES_PER_QUAD as usize, 2 * INDICES_PER_TRIANGLE);
/// ```
pub const INDICES_PER_QUAD: u32 = 6;

// =============================================================================
// BOX TOPOLOGY
// =============================================================================

/// Quad subdivisions along each in-plane axis of a box face.
///
/// The box builder does not expose segmentation; every face is a single quad.
pub const BOX_SEGMENTS: u32 = 1;

/// Number of faces on a box.
pub const BOX_FACE_COUNT: usize = 6;

/// Vertices emitted for one unsegmented face (2 x 2 grid corners).
pub const BOX_VERTICES_PER_FACE: usize =
    ((BOX_SEGMENTS + 1) * (BOX_SEGMENTS + 1)) as usize;

/// Total vertices in a box mesh. Faces do not share vertices so that each
/// face keeps its own normal and UV set.
///
/// # Examples
/// ```
/// use config::constants::BOX_VERTEX_COUNT;
/// assert_eq!(BOX_VERTEX_COUNT, 24);
/// ```
pub const BOX_VERTEX_COUNT: usize = BOX_FACE_COUNT * BOX_VERTICES_PER_FACE;

/// Total index values in a box mesh.
///
/// # Examples
/// ```
/// use config::constants::BOX_INDEX_COUNT;
/// assert_eq!(BOX_INDEX_COUNT, 36);
/// ```
pub const BOX_INDEX_COUNT: usize =
    BOX_FACE_COUNT * (INDICES_PER_QUAD * BOX_SEGMENTS * BOX_SEGMENTS) as usize;

// =============================================================================
// PRECISION
// =============================================================================

/// Tolerance for comparing f32 coordinates that went through different
/// rounding paths (for example a scaled box against a scaled unit box).
///
/// # Examples
/// ```
/// use config::constants::F32_TOLERANCE;
///
/// fn approximately_equal(a: f32, b: f32) -> bool {
///     (a - b).abs() <= F32_TOLERANCE * a.abs().max(b.abs()).max(1.0)
/// }
///
/// assert!(approximately_equal(0.1 + 0.2, 0.3));
/// ```
pub const F32_TOLERANCE: f32 = 1.0e-5;
