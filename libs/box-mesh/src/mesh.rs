//! # Mesh Data Structure
//!
//! Flat vertex, normal, UV and index buffers plus per-face material groups.

use config::constants::{INDICES_PER_TRIANGLE, POSITION_COMPONENTS, UV_COMPONENTS};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::MeshError;

/// A contiguous run of indices drawn with one material.
///
/// Serializes as `{ start, count, materialIndex }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Offset into the index buffer where this group's triangles begin.
    pub start: u32,
    /// Number of index values in the group.
    pub count: u32,
    /// Material slot this group is drawn with.
    pub material_index: u32,
}

impl Group {
    /// One past the last index value of this group.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.count
    }

    /// The index-buffer range covered by this group.
    #[inline]
    pub fn index_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

/// Triangle mesh buffers ready for upload.
///
/// Every buffer is in emission order. `normals[i]` and `uvs[i]` describe
/// `vertices[i]`. A built mesh is never mutated; read it through the
/// accessors or take the buffers with [`MeshData::into_buffers`].
///
/// # Example
///
/// ```rust
/// use box_mesh::build_box;
///
/// let mesh = build_box(1.0, 2.0, 3.0);
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    vertices: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
    indices: Vec<u32>,
    groups: Vec<Group>,
}

/// Owned buffers taken out of a [`MeshData`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    pub vertices: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Vec<u32>,
    pub groups: Vec<Group>,
}

impl MeshData {
    /// Creates empty buffers sized for the given vertex and index counts.
    pub(crate) fn with_capacity(vertex_count: usize, index_count: usize, group_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count * POSITION_COMPONENTS),
            normals: Vec::with_capacity(vertex_count * POSITION_COMPONENTS),
            uvs: Vec::with_capacity(vertex_count * UV_COMPONENTS),
            indices: Vec::with_capacity(index_count),
            groups: Vec::with_capacity(group_count),
        }
    }

    pub(crate) fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) {
        self.vertices.extend_from_slice(&position.to_array());
        self.normals.extend_from_slice(&normal.to_array());
        self.uvs.extend_from_slice(&uv.to_array());
    }

    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub(crate) fn push_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / POSITION_COMPONENTS
    }

    /// Number of index values.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / INDICES_PER_TRIANGLE
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Positions as `[x, y, z, x, y, z, ...]`.
    #[inline]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Normals as `[x, y, z, ...]`, one per vertex.
    #[inline]
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Texture coordinates as `[u, v, u, v, ...]`, one pair per vertex.
    #[inline]
    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    /// Triangle indices as `[i0, i1, i2, ...]`.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Material groups in emission order.
    #[inline]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Iterates vertex positions.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices
            .chunks_exact(POSITION_COMPONENTS)
            .map(Vec3::from_slice)
    }

    /// Iterates vertex normals.
    pub fn normal_vectors(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.normals
            .chunks_exact(POSITION_COMPONENTS)
            .map(Vec3::from_slice)
    }

    /// Iterates texture coordinates.
    pub fn uv_pairs(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.uvs.chunks_exact(UV_COMPONENTS).map(Vec2::from_slice)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or zero corners for an empty mesh.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let mut positions = self.positions();
        let Some(first) = positions.next() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
    }

    /// Consumes the mesh and returns its buffers.
    pub fn into_buffers(self) -> MeshBuffers {
        MeshBuffers {
            vertices: self.vertices,
            normals: self.normals,
            uvs: self.uvs,
            indices: self.indices,
            groups: self.groups,
        }
    }

    /// Checks the buffer invariants.
    ///
    /// Checks:
    /// - Normals and UVs line up with the vertex buffer
    /// - Indices form whole triangles and reference existing vertices
    /// - Groups start at 0, are contiguous and cover every index
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.vertices.len() % POSITION_COMPONENTS != 0 {
            return Err(MeshError::BufferLengthMismatch {
                buffer: "vertices",
                expected: self.vertex_count() * POSITION_COMPONENTS,
                actual: self.vertices.len(),
            });
        }

        let vertex_count = self.vertex_count();
        let expected = [
            ("normals", self.normals.len(), vertex_count * POSITION_COMPONENTS),
            ("uvs", self.uvs.len(), vertex_count * UV_COMPONENTS),
        ];
        for (buffer, actual, expected) in expected {
            if actual != expected {
                return Err(MeshError::BufferLengthMismatch {
                    buffer,
                    expected,
                    actual,
                });
            }
        }

        if self.indices.len() % INDICES_PER_TRIANGLE != 0 {
            return Err(MeshError::PartialTriangle {
                count: self.indices.len(),
            });
        }

        if let Some((position, value)) = self
            .indices
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, value)| value as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                position,
                value,
                vertex_count,
            });
        }

        let mut expected_start = 0u32;
        let mut grouped = 0u64;
        for (group, g) in self.groups.iter().enumerate() {
            if g.start != expected_start {
                return Err(MeshError::GroupGap {
                    group,
                    expected: expected_start,
                    actual: g.start,
                });
            }
            expected_start = g.start.saturating_add(g.count);
            grouped += u64::from(g.count);
        }

        if grouped != self.indices.len() as u64 {
            return Err(MeshError::GroupCoverage {
                grouped,
                indices: self.indices.len(),
            });
        }

        Ok(())
    }
}
