//! # Primitives
//!
//! Mesh generation for fixed-topology shapes.

pub mod box_geometry;

pub use box_geometry::{build_box, BoxFace};
