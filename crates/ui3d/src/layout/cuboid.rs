//! Cuboid geometry mapping
//!
//! Maps each rectangle to the transform of the slab that backs it. A slab is a
//! unit cube scaled to the rectangle's footprint and extruded by a fixed
//! thickness, centered on the rectangle regardless of its pivot.
//!
//! Depth layout after a pass, in the rectangle's parent space:
//!
//! - the rectangle itself is pushed back to `z = -SLAB_THICKNESS`
//! - the slab's center sits `SLAB_Z_OFFSET` in front of the rectangle's
//!   local origin, so its front face clears sibling faces by
//!   `ANTI_Z_FIGHTING_EPSILON`

use crate::components::{RectTransform, SlabTransform};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Pivot that the slab's unit cube is centered on.
pub const CUBOID_PIVOT: Vec2 = Vec2::splat(0.5);

/// Depth of every slab along its local z axis.
pub const SLAB_THICKNESS: f32 = 0.004;

/// Extra forward offset so slab faces never coincide with sibling faces.
pub const ANTI_Z_FIGHTING_EPSILON: f32 = 0.00055;

/// Local z of every slab center.
pub const SLAB_Z_OFFSET: f32 = SLAB_THICKNESS * 0.5 + ANTI_Z_FIGHTING_EPSILON;

/// Extra width given to a slab beyond its rectangle.
///
/// `position_padding` is half of `scale_padding` for standard slabs, which
/// puts all of the extra width on the +x side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabPadding {
    /// Added to the slab's x scale
    pub scale_padding: f32,
    /// Added to the slab's x position
    pub position_padding: f32,
}

impl SlabPadding {
    /// Padding for standard backing slabs.
    pub const STANDARD: Self = Self {
        scale_padding: 0.01,
        position_padding: 0.005,
    };

    /// Highlight slabs match their rectangle exactly.
    pub const HIGHLIGHT: Self = Self {
        scale_padding: 0.0,
        position_padding: 0.0,
    };
}

/// Which of the two slab collections a slab belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlabKind {
    /// Backing slab behind a panel
    Standard,
    /// Highlight slab
    Highlight,
}

impl SlabKind {
    /// Padding rules for this kind.
    pub const fn padding(self) -> SlabPadding {
        match self {
            Self::Standard => SlabPadding::STANDARD,
            Self::Highlight => SlabPadding::HIGHLIGHT,
        }
    }

    /// Canonical string key used in configs/logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Highlight => "highlight",
        }
    }
}

/// Displacement from a rectangle's local origin to its geometric center.
///
/// `size` is taken as its absolute value.
pub fn pivot_offset(size: Vec2, pivot: Vec2) -> Vec2 {
    size.abs() * (CUBOID_PIVOT - pivot)
}

/// Fit one slab to one rectangle.
///
/// Overwrites the slab's position and scale, and moves the rectangle back to
/// `z = -SLAB_THICKNESS` while keeping its x and y.
pub fn fit_slab(rect: &mut RectTransform, slab: &mut SlabTransform, padding: SlabPadding) {
    let rect_size = rect.size.abs();
    let offset = pivot_offset(rect_size, rect.pivot);

    // Make room for the slab in front of the rect
    rect.local_position.z = -SLAB_THICKNESS;

    slab.local_position = Vec3::new(offset.x + padding.position_padding, offset.y, SLAB_Z_OFFSET);
    slab.local_scale = Vec3::new(rect_size.x + padding.scale_padding, rect_size.y, SLAB_THICKNESS);
}

/// Fit every slab to the rectangle at the same index.
///
/// # Panics
///
/// Panics if `rects` and `slabs` differ in length. The two collections are
/// paired one-to-one when the slabs are created, so a mismatch is a caller
/// bug rather than something to paper over.
pub fn recompute(rects: &mut [RectTransform], slabs: &mut [SlabTransform], kind: SlabKind) {
    assert_eq!(
        rects.len(),
        slabs.len(),
        "{} slabs must pair one-to-one with their rects",
        kind.as_str()
    );

    let padding = kind.padding();
    for (rect, slab) in rects.iter_mut().zip(slabs.iter_mut()) {
        fit_slab(rect, slab, padding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).abs().max_element() < 1e-4,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_centered_pivot_has_no_offset() {
        for size in [Vec2::new(1.0, 1.0), Vec2::new(100.0, 50.0), Vec2::new(-3.0, 7.5)] {
            assert_eq!(pivot_offset(size, CUBOID_PIVOT), Vec2::ZERO);
        }
    }

    #[test]
    fn test_pivot_offset_is_linear() {
        let offset = pivot_offset(Vec2::new(8.0, 4.0), Vec2::new(0.25, 1.0));
        assert_eq!(offset, Vec2::new(8.0 * 0.25, 4.0 * -0.5));
    }

    #[test]
    fn test_negative_size_matches_absolute_size() {
        let mut negative = RectTransform::new(-4.0, 2.0).with_pivot(0.0, 0.0);
        let mut positive = RectTransform::new(4.0, 2.0).with_pivot(0.0, 0.0);
        let mut a = SlabTransform::default();
        let mut b = SlabTransform::default();

        fit_slab(&mut negative, &mut a, SlabPadding::STANDARD);
        fit_slab(&mut positive, &mut b, SlabPadding::STANDARD);

        assert_eq!(a, b);
        assert_eq!(pivot_offset(negative.size, negative.pivot), pivot_offset(positive.size, positive.pivot));
    }

    #[test]
    fn test_z_offset_constant() {
        assert!((SLAB_Z_OFFSET - 0.00255).abs() < 1e-7);
    }

    #[test]
    fn test_standard_scenario() {
        let mut rects = [RectTransform::new(100.0, 50.0).with_pivot(0.0, 0.0)];
        let mut slabs = [SlabTransform::default()];

        recompute(&mut rects, &mut slabs, SlabKind::Standard);

        assert_close(slabs[0].local_position, Vec3::new(50.005, 25.0, 0.00255));
        assert_close(slabs[0].local_scale, Vec3::new(100.01, 50.0, 0.004));
        assert_eq!(slabs[0].local_position.z, SLAB_Z_OFFSET);
        assert_eq!(slabs[0].local_scale.z, SLAB_THICKNESS);
        assert_eq!(rects[0].local_position.z, -0.004);
    }

    #[test]
    fn test_highlight_scenario() {
        let mut rects = [RectTransform::new(100.0, 50.0).with_pivot(0.0, 0.0)];
        let mut slabs = [SlabTransform::default()];

        recompute(&mut rects, &mut slabs, SlabKind::Highlight);

        assert_eq!(slabs[0].local_position, Vec3::new(50.0, 25.0, SLAB_Z_OFFSET));
        assert_eq!(slabs[0].local_scale, Vec3::new(100.0, 50.0, SLAB_THICKNESS));
        assert_eq!(rects[0].local_position.z, -SLAB_THICKNESS);
    }

    #[test]
    fn test_rect_xy_is_preserved() {
        let mut rect = RectTransform::new(2.0, 2.0).with_local_position(Vec3::new(3.0, -7.0, 1.0));
        let mut slab = SlabTransform::default();

        fit_slab(&mut rect, &mut slab, SlabPadding::HIGHLIGHT);

        assert_eq!(rect.local_position, Vec3::new(3.0, -7.0, -SLAB_THICKNESS));
    }

    #[test]
    fn test_standard_padding_goes_to_positive_x() {
        let mut rect = RectTransform::new(2.0, 1.0);
        let mut slab = SlabTransform::default();

        fit_slab(&mut rect, &mut slab, SlabPadding::STANDARD);

        let bounds = slab.bounds();
        assert!((bounds.min.x - -1.0).abs() < 1e-6);
        assert!((bounds.max.x - 1.01).abs() < 1e-6);
    }

    #[test]
    fn test_recompute_is_index_independent() {
        let mut rects = [
            RectTransform::new(10.0, 10.0).with_pivot(0.0, 1.0),
            RectTransform::new(3.0, 6.0),
        ];
        let mut slabs = [SlabTransform::default(); 2];
        recompute(&mut rects, &mut slabs, SlabKind::Highlight);

        let mut lone = [rects[1]];
        let mut lone_slab = [SlabTransform::default()];
        recompute(&mut lone, &mut lone_slab, SlabKind::Highlight);

        assert_eq!(slabs[1], lone_slab[0]);
    }

    #[test]
    fn test_recompute_on_empty_collections() {
        recompute(&mut [], &mut [], SlabKind::Standard);
    }

    #[test]
    #[should_panic(expected = "pair one-to-one")]
    fn test_length_mismatch_fails_fast() {
        let mut rects = [RectTransform::default(); 2];
        let mut slabs = [SlabTransform::default(); 1];
        recompute(&mut rects, &mut slabs, SlabKind::Highlight);
    }

    #[test]
    fn test_kind_padding() {
        assert_eq!(SlabKind::Standard.padding(), SlabPadding::STANDARD);
        assert_eq!(SlabKind::Highlight.padding(), SlabPadding::HIGHLIGHT);
        assert_eq!(SlabKind::Highlight.as_str(), "highlight");
    }
}
