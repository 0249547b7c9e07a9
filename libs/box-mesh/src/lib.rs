//! # Box Mesh
//!
//! Browser-safe vertex and index buffers for rectangular boxes, with one
//! material group per face.
//!
//! ## Architecture
//!
//! ```text
//! build_box(w, h, d) ──► 6 × plane emitter ──► MeshData ──► host binding
//! ```
//!
//! Each face is a separate plane with its own normals and UVs, so corners are
//! not shared between faces. Vertex order, winding and UV layout follow the
//! usual web 3D engine box layout: `+X, -X, +Y, -Y, +Z, -Z`, with the first
//! vertex of a unit box at `(0.5, 0.5, 0.5)`.
//!
//! ## Usage
//!
//! ```rust
//! use box_mesh::build_box;
//!
//! let mesh = build_box(2.0, 1.0, 1.0);
//! for group in mesh.groups() {
//!     let triangles = &mesh.indices()[group.index_range()];
//!     assert_eq!(triangles.len(), 6);
//! }
//! ```

pub mod error;
pub mod mesh;
pub mod plane;
pub mod primitives;

pub use error::MeshError;
pub use mesh::{Group, MeshBuffers, MeshData};
pub use primitives::{build_box, BoxFace};
