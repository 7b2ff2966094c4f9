//! Rect Store - The layout system's rectangles, addressed by handle

use crate::components::RectTransform;
use cuboid_layout_core::RectHandle;
use glam::{Vec2, Vec3};
use std::collections::BTreeMap;

/// Owns every rectangle in a layout.
///
/// Handles are never reused, so a handle to a removed rect stays invalid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectStore {
    rects: BTreeMap<RectHandle, RectTransform>,
    next_handle: u64,
}

impl RectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rectangle and return its handle
    pub fn insert(&mut self, rect: RectTransform) -> RectHandle {
        let handle = RectHandle(self.next_handle);
        self.next_handle += 1;
        self.rects.insert(handle, rect);
        handle
    }

    /// Remove a rectangle
    pub fn remove(&mut self, handle: RectHandle) -> Option<RectTransform> {
        self.rects.remove(&handle)
    }

    /// Look up a rectangle
    pub fn get(&self, handle: RectHandle) -> Option<&RectTransform> {
        self.rects.get(&handle)
    }

    /// Look up a rectangle for mutation.
    ///
    /// Changes made through this do not notify anyone.
    pub fn get_mut(&mut self, handle: RectHandle) -> Option<&mut RectTransform> {
        self.rects.get_mut(&handle)
    }

    /// Whether `handle` refers to a live rectangle
    pub fn contains(&self, handle: RectHandle) -> bool {
        self.rects.contains_key(&handle)
    }

    /// Set a rectangle's size. Returns `true` if the dimensions changed.
    pub fn set_size(&mut self, handle: RectHandle, size: Vec2) -> bool {
        match self.rects.get_mut(&handle) {
            Some(rect) if rect.size != size => {
                rect.size = size;
                true
            }
            _ => false,
        }
    }

    /// Set a rectangle's pivot. Returns `true` if the dimensions changed.
    pub fn set_pivot(&mut self, handle: RectHandle, pivot: Vec2) -> bool {
        match self.rects.get_mut(&handle) {
            Some(rect) if rect.pivot != pivot => {
                rect.pivot = pivot;
                true
            }
            _ => false,
        }
    }

    /// Move a rectangle. This is not a dimension change. Returns `false` if
    /// the handle is unknown.
    pub fn set_local_position(&mut self, handle: RectHandle, position: Vec3) -> bool {
        match self.rects.get_mut(&handle) {
            Some(rect) => {
                rect.local_position = position;
                true
            }
            None => false,
        }
    }

    /// Number of rectangles
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// All rectangles in handle order
    pub fn iter(&self) -> impl Iterator<Item = (RectHandle, &RectTransform)> {
        self.rects.iter().map(|(handle, rect)| (*handle, rect))
    }
}
