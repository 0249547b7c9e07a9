//! # Tests for Config Constants
//!
//! Sanity checks on the layout and precision constants.

use crate::constants::*;

// =============================================================================
// LAYOUT TESTS
// =============================================================================

#[test]
fn test_component_strides() {
    assert_eq!(POSITION_COMPONENTS, 3);
    assert_eq!(UV_COMPONENTS, 2);
}

#[test]
fn test_box_segments_is_single_quad() {
    assert_eq!(BOX_SEGMENTS, 1, "box faces are never subdivided");
}

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_tolerance_is_positive() {
    assert!(F32_TOLERANCE > 0.0, "F32_TOLERANCE must be positive");
}

#[test]
fn test_tolerance_is_above_f32_epsilon() {
    assert!(
        F32_TOLERANCE > f32::EPSILON,
        "F32_TOLERANCE should absorb at least one ulp of rounding"
    );
}
