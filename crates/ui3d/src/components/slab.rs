//! Slab Component - The extruded cube that backs a rectangle

use crate::layout::SlabKind;
use cuboid_layout_core::{Aabb, RectHandle, SlabNode};
use glam::{Mat4, Quat, Vec3};

/// Local transform of a slab, expressed in its parent rectangle's space.
///
/// Slabs are instantiated from a unit cube centered on its origin, so
/// `local_scale` is also the slab's extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabTransform {
    /// Center of the slab in the parent rectangle's local space
    pub local_position: Vec3,
    /// Extent of the slab along each local axis
    pub local_scale: Vec3,
}

impl Default for SlabTransform {
    fn default() -> Self {
        Self {
            local_position: Vec3::ZERO,
            local_scale: Vec3::ONE,
        }
    }
}

impl SlabTransform {
    /// Local matrix for hosts that upload transforms to the GPU.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.local_scale, Quat::IDENTITY, self.local_position)
    }

    /// Bounds of the slab in its parent's local space
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.local_position, self.local_scale)
    }
}

/// A slab created for one rectangle entry.
///
/// The pairing with `parent` is fixed when the slab is created and is never
/// re-indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct SlabDescriptor {
    /// Scene object backing this slab
    pub node: SlabNode,
    /// Rectangle this slab is parented under
    pub parent: RectHandle,
    /// Standard backing slab or highlight slab
    pub kind: SlabKind,
    /// Last computed local transform
    pub transform: SlabTransform,
}

impl SlabDescriptor {
    /// Create a slab descriptor with an identity transform
    pub fn new(node: SlabNode, parent: RectHandle, kind: SlabKind) -> Self {
        Self {
            node,
            parent,
            kind,
            transform: SlabTransform::default(),
        }
    }
}
