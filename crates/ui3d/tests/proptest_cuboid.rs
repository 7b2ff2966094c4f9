//! Property tests for slab geometry
//!
//! These hold for any rect size and pivot, not just the hand-picked cases in
//! the unit tests.

use cuboid_layout_ui3d::{
    fit_slab, pivot_offset, recompute, RectTransform, SlabKind, SlabPadding, SlabTransform,
    CUBOID_PIVOT, SLAB_THICKNESS, SLAB_Z_OFFSET,
};
use glam::{Vec2, Vec3};
use proptest::prelude::*;

fn size_component() -> impl Strategy<Value = f32> {
    -2000.0f32..2000.0
}

fn pivot_component() -> impl Strategy<Value = f32> {
    0.0f32..=1.0
}

fn rect_strategy() -> impl Strategy<Value = RectTransform> {
    (
        size_component(),
        size_component(),
        pivot_component(),
        pivot_component(),
        -500.0f32..500.0,
        -500.0f32..500.0,
        -1.0f32..1.0,
    )
        .prop_map(|(w, h, px, py, x, y, z)| {
            RectTransform::new(w, h)
                .with_pivot(px, py)
                .with_local_position(Vec3::new(x, y, z))
        })
}

proptest! {
    /// Property: A centered pivot never moves the slab off the rect origin
    #[test]
    fn centered_pivot_has_zero_offset(w in size_component(), h in size_component()) {
        prop_assert_eq!(pivot_offset(Vec2::new(w, h), CUBOID_PIVOT), Vec2::ZERO);
    }

    /// Property: Pivot offset is size times distance from center
    #[test]
    fn pivot_offset_is_linear(
        w in size_component(),
        h in size_component(),
        px in pivot_component(),
        py in pivot_component(),
    ) {
        let offset = pivot_offset(Vec2::new(w, h), Vec2::new(px, py));
        prop_assert_eq!(offset, Vec2::new(w.abs() * (0.5 - px), h.abs() * (0.5 - py)));
    }

    /// Property: Negative sizes behave exactly like their absolute values
    #[test]
    fn negative_size_is_normalized(rect in rect_strategy(), standard in any::<bool>()) {
        let padding = if standard { SlabPadding::STANDARD } else { SlabPadding::HIGHLIGHT };
        let mut negated = rect;
        negated.size = -rect.size;
        let mut original = rect;

        let mut a = SlabTransform::default();
        let mut b = SlabTransform::default();
        fit_slab(&mut original, &mut a, padding);
        fit_slab(&mut negated, &mut b, padding);

        prop_assert_eq!(a, b);
        prop_assert_eq!(original, RectTransform { size: rect.size, ..negated });
    }

    /// Property: Highlight slabs match the rect footprint exactly
    #[test]
    fn highlight_slab_is_exact(rect in rect_strategy()) {
        let mut rects = [rect];
        let mut slabs = [SlabTransform::default()];
        recompute(&mut rects, &mut slabs, SlabKind::Highlight);

        let size = rect.size.abs();
        let offset = pivot_offset(size, rect.pivot);
        prop_assert_eq!(slabs[0].local_scale, Vec3::new(size.x, size.y, SLAB_THICKNESS));
        prop_assert_eq!(slabs[0].local_position, Vec3::new(offset.x, offset.y, SLAB_Z_OFFSET));
    }

    /// Property: Standard slabs carry the fixed side padding
    #[test]
    fn standard_slab_is_padded(rect in rect_strategy()) {
        let mut rects = [rect];
        let mut slabs = [SlabTransform::default()];
        recompute(&mut rects, &mut slabs, SlabKind::Standard);

        let size = rect.size.abs();
        let offset = pivot_offset(size, rect.pivot);
        prop_assert_eq!(slabs[0].local_scale, Vec3::new(size.x + 0.01, size.y, SLAB_THICKNESS));
        prop_assert_eq!(slabs[0].local_position, Vec3::new(offset.x + 0.005, offset.y, SLAB_Z_OFFSET));
    }

    /// Property: Every pass leaves the same depth stacking behind
    #[test]
    fn depth_is_stacked(rects in prop::collection::vec(rect_strategy(), 0..16), standard in any::<bool>()) {
        let kind = if standard { SlabKind::Standard } else { SlabKind::Highlight };
        let mut rects = rects;
        let originals = rects.clone();
        let mut slabs = vec![SlabTransform::default(); rects.len()];
        recompute(&mut rects, &mut slabs, kind);

        for ((rect, original), slab) in rects.iter().zip(&originals).zip(&slabs) {
            prop_assert_eq!(slab.local_position.z, SLAB_Z_OFFSET);
            prop_assert_eq!(rect.local_position.z, -SLAB_THICKNESS);
            prop_assert_eq!(rect.local_position.x, original.local_position.x);
            prop_assert_eq!(rect.local_position.y, original.local_position.y);
        }
    }

    /// Property: A second pass over unchanged rects is bit-identical
    #[test]
    fn recompute_is_idempotent(rects in prop::collection::vec(rect_strategy(), 0..16)) {
        let mut rects = rects;
        let mut slabs = vec![SlabTransform::default(); rects.len()];
        recompute(&mut rects, &mut slabs, SlabKind::Standard);
        let first_rects = rects.clone();
        let first_slabs = slabs.clone();

        recompute(&mut rects, &mut slabs, SlabKind::Standard);

        for (a, b) in first_slabs.iter().zip(&slabs) {
            prop_assert_eq!(a.local_position.to_array().map(f32::to_bits), b.local_position.to_array().map(f32::to_bits));
            prop_assert_eq!(a.local_scale.to_array().map(f32::to_bits), b.local_scale.to_array().map(f32::to_bits));
        }
        prop_assert_eq!(first_rects, rects);
    }

    /// Property: The slab covers the rect footprint, with padding only on +x
    #[test]
    fn standard_slab_covers_rect(rect in rect_strategy()) {
        let mut rect = rect;
        let mut slab = SlabTransform::default();
        fit_slab(&mut rect, &mut slab, SlabPadding::STANDARD);

        let (min, max) = rect.local_rect();
        let bounds = slab.bounds();
        let tolerance = 2e-3;
        prop_assert!((bounds.min.x - min.x).abs() <= tolerance);
        prop_assert!((bounds.max.x - (max.x + 0.01)).abs() <= tolerance);
        prop_assert!((bounds.min.y - min.y).abs() <= tolerance);
        prop_assert!((bounds.max.y - max.y).abs() <= tolerance);
        prop_assert!(bounds.min.z > rect.local_position.z);
    }
}
