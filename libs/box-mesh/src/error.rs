//! # Mesh Errors
//!
//! Error types reported by mesh validation. Building a mesh never fails;
//! these only describe buffers that break the mesh invariants.

use thiserror::Error;

/// Invariant violations found by [`MeshData::validate`](crate::MeshData::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A per-vertex buffer does not line up with the vertex count.
    #[error("Buffer '{buffer}' has {actual} values, expected {expected}")]
    BufferLengthMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The index buffer does not hold whole triangles.
    #[error("Index count {count} is not a multiple of 3")]
    PartialTriangle { count: usize },

    /// An index refers past the last emitted vertex.
    #[error("Index {value} at position {position} is out of range (vertex count: {vertex_count})")]
    IndexOutOfRange {
        position: usize,
        value: u32,
        vertex_count: usize,
    },

    /// A group does not begin where the previous one ended.
    #[error("Group {group} starts at {actual}, expected {expected}")]
    GroupGap {
        group: usize,
        expected: u32,
        actual: u32,
    },

    /// The groups do not cover the index buffer exactly.
    #[error("Groups cover {grouped} indices but the mesh has {indices}")]
    GroupCoverage { grouped: u64, indices: usize },
}
