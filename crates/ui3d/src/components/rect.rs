//! Rectangle Component - A flat layout region that a slab can back

use glam::{Vec2, Vec3};

/// A rectangular layout region in its parent's local space.
///
/// Owned by the layout system. The cuboid mapper only reads `size` and
/// `pivot`, and only ever writes `local_position.z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectTransform {
    /// Rectangle size (width, height). May be transiently negative while a
    /// layout is being resolved.
    pub size: Vec2,

    /// Where the local origin sits, as a fraction of size measured from the
    /// bottom-left corner. (0.5, 0.5) is centered.
    pub pivot: Vec2,

    /// Position of the local origin in the parent's space
    pub local_position: Vec3,
}

impl Default for RectTransform {
    fn default() -> Self {
        Self {
            size: Vec2::ONE,
            pivot: Vec2::splat(0.5),
            local_position: Vec3::ZERO,
        }
    }
}

impl RectTransform {
    /// Create a centered rectangle of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ..Default::default()
        }
    }

    /// Builder: Set pivot
    pub fn with_pivot(mut self, x: f32, y: f32) -> Self {
        self.pivot = Vec2::new(x, y);
        self
    }

    /// Builder: Set local position
    pub fn with_local_position(mut self, position: Vec3) -> Self {
        self.local_position = position;
        self
    }

    /// Extents of the rectangle in its own local space, as (min, max).
    ///
    /// The local origin is the pivot, so a (0, 0) pivot yields a rect that
    /// starts at the origin and a centered pivot yields one symmetric about it.
    pub fn local_rect(&self) -> (Vec2, Vec2) {
        let size = self.size.abs();
        let min = -self.pivot * size;
        (min, min + size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_defaults_to_centered_pivot() {
        let rect = RectTransform::new(2.0, 1.0);
        assert_eq!(rect.size, Vec2::new(2.0, 1.0));
        assert_eq!(rect.pivot, Vec2::splat(0.5));
        assert_eq!(rect.local_position, Vec3::ZERO);
    }

    #[test]
    fn test_local_rect_follows_pivot() {
        let centered = RectTransform::new(4.0, 2.0);
        assert_eq!(centered.local_rect(), (Vec2::new(-2.0, -1.0), Vec2::new(2.0, 1.0)));

        let bottom_left = RectTransform::new(4.0, 2.0).with_pivot(0.0, 0.0);
        assert_eq!(bottom_left.local_rect(), (Vec2::ZERO, Vec2::new(4.0, 2.0)));

        let top_right = RectTransform::new(4.0, 2.0).with_pivot(1.0, 1.0);
        assert_eq!(top_right.local_rect(), (Vec2::new(-4.0, -2.0), Vec2::ZERO));
    }

    #[test]
    fn test_local_rect_normalizes_negative_size() {
        let rect = RectTransform::new(-4.0, 2.0).with_pivot(0.0, 0.0);
        assert_eq!(rect.local_rect(), (Vec2::ZERO, Vec2::new(4.0, 2.0)));
    }
}
