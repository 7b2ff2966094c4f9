//! Float comparison helpers for transform assertions.

use glam::{Vec2, Vec3};

/// Default tolerance for layout-space comparisons.
pub const LAYOUT_EPSILON: f32 = 1e-4;

/// Assert two vectors are equal within `epsilon` on every component.
#[track_caller]
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    let delta = (actual - expected).abs().max_element();
    assert!(
        delta <= epsilon,
        "expected {expected:?}, got {actual:?} (max delta {delta} > {epsilon})"
    );
}

/// Assert two vectors are equal within `epsilon` on every component.
#[track_caller]
pub fn assert_vec2_near(actual: Vec2, expected: Vec2, epsilon: f32) {
    let delta = (actual - expected).abs().max_element();
    assert!(
        delta <= epsilon,
        "expected {expected:?}, got {actual:?} (max delta {delta} > {epsilon})"
    );
}
