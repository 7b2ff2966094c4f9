//! Axis-aligned bounds used to check slab coverage.

use glam::Vec3;

/// Axis-aligned bounding box in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the box
    pub min: Vec3,
    /// Maximum corner of the box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from center position and size
    ///
    /// Negative size components are treated as their absolute value.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half_size = size.abs() * 0.5;
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check whether a point lies inside (inclusive)
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Check whether `other` lies entirely inside this box, with `tolerance`
    /// slack on every face.
    pub fn contains(&self, other: &Aabb, tolerance: f32) -> bool {
        let slack = Vec3::splat(tolerance);
        other.min.cmpge(self.min - slack).all() && other.max.cmple(self.max + slack).all()
    }
}
