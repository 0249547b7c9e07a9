//! # Config Crate
//!
//! Centralized configuration constants for the box mesh workspace.
//! Fixed topology numbers and tolerances live here so the geometry crate
//! never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BOX_FACE_COUNT, BOX_INDEX_COUNT, INDICES_PER_QUAD};
//!
//! // One quad per face, two triangles per quad.
//! assert_eq!(BOX_FACE_COUNT * INDICES_PER_QUAD as usize, BOX_INDEX_COUNT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values

pub mod constants;

#[cfg(test)]
mod tests;
