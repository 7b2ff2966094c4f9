//! Serializable view of a cuboid layout, for reports and deterministic tests.

use crate::components::{RectTransform, SlabDescriptor};
use serde::Serialize;

/// One slab and the rect it backs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlabSnapshot {
    /// Parent rectangle handle
    pub rect: u64,
    /// Scene node handle
    pub node: u64,
    /// Rect local position after the pass; `None` if the rect is gone
    pub rect_position: Option<[f32; 3]>,
    /// Slab local position
    pub position: [f32; 3],
    /// Slab local scale
    pub scale: [f32; 3],
}

impl SlabSnapshot {
    /// Capture a slab together with its (possibly removed) parent rect.
    pub fn capture(slab: &SlabDescriptor, rect: Option<&RectTransform>) -> Self {
        Self {
            rect: slab.parent.0,
            node: slab.node.0,
            rect_position: rect.map(|r| r.local_position.to_array()),
            position: slab.transform.local_position.to_array(),
            scale: slab.transform.local_scale.to_array(),
        }
    }
}

/// Every slab of one layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuboidSnapshot {
    /// Whether slabs have been created
    pub ready: bool,
    /// Completed layout passes
    pub passes: u64,
    /// Standard backing slabs, in source order
    pub standard: Vec<SlabSnapshot>,
    /// Highlight slabs, in source order
    pub highlight: Vec<SlabSnapshot>,
}
