//! Cuboid Manager - Routes layout signals to the cuboid layouts observing each rect

use crate::components::RectTransform;
use crate::layout::{CuboidLayout, CuboidLayoutConfig};
use crate::scene::SlabScene;
use crate::store::RectStore;
use cuboid_layout_core::{MaterialHandle, RectHandle};
use glam::Vec2;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Handle to a cuboid layout for updates/removal
pub type LayoutHandle = u64;

/// Owns the rectangles, the slab scene and every cuboid layout.
///
/// Adding a layout registers it as an observer of each rect it backs. Size or
/// pivot changes made through the manager re-run every observing layout.
pub struct CuboidManager<S: SlabScene> {
    rects: RectStore,
    scene: S,
    layouts: BTreeMap<LayoutHandle, CuboidLayout>,
    observers: HashMap<RectHandle, Vec<LayoutHandle>>,
    next_handle: u64,
}

impl<S: SlabScene> CuboidManager<S> {
    /// Create a manager with an empty rect store
    pub fn new(scene: S) -> Self {
        Self::with_rects(RectStore::new(), scene)
    }

    /// Create a manager over an existing rect store
    pub fn with_rects(rects: RectStore, scene: S) -> Self {
        Self {
            rects,
            scene,
            layouts: BTreeMap::new(),
            observers: HashMap::new(),
            next_handle: 1,
        }
    }

    /// Add a rectangle to the layout
    pub fn add_rect(&mut self, rect: RectTransform) -> RectHandle {
        self.rects.insert(rect)
    }

    /// Rectangles owned by this manager
    pub fn rects(&self) -> &RectStore {
        &self.rects
    }

    /// Slab scene
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Slab scene, mutably
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Register a new cuboid layout. It stays inert until [`Self::ready`].
    pub fn add_layout(&mut self, config: CuboidLayoutConfig) -> LayoutHandle {
        let handle = self.next_handle;
        self.next_handle += 1;

        for rect in config.observed_rects() {
            let observers = self.observers.entry(rect).or_default();
            if !observers.contains(&handle) {
                observers.push(handle);
            }
        }

        self.layouts.insert(handle, CuboidLayout::new(config));
        handle
    }

    /// Fire the ready signal on one layout. Returns `false` for unknown handles.
    pub fn ready(&mut self, handle: LayoutHandle) -> bool {
        match self.layouts.get_mut(&handle) {
            Some(layout) => {
                layout.on_ready(&mut self.rects, &mut self.scene);
                true
            }
            None => false,
        }
    }

    /// Fire the ready signal on every layout that is not ready yet
    pub fn ready_all(&mut self) {
        for layout in self.layouts.values_mut() {
            if !layout.is_ready() {
                layout.on_ready(&mut self.rects, &mut self.scene);
            }
        }
    }

    /// Resize a rectangle. Returns how many layouts re-ran.
    pub fn resize_rect(&mut self, rect: RectHandle, size: Vec2) -> usize {
        if !self.rects.set_size(rect, size) {
            return 0;
        }
        self.notify_dimensions_changed(rect)
    }

    /// Move a rectangle's pivot. Returns how many layouts re-ran.
    pub fn set_rect_pivot(&mut self, rect: RectHandle, pivot: Vec2) -> usize {
        if !self.rects.set_pivot(rect, pivot) {
            return 0;
        }
        self.notify_dimensions_changed(rect)
    }

    /// Fire the dimension-change signal on every layout observing `rect`.
    ///
    /// Use this after changing a rect through some other path. Returns how
    /// many layouts ran a pass; layouts that are not ready yet don't count.
    pub fn notify_dimensions_changed(&mut self, rect: RectHandle) -> usize {
        let Some(observers) = self.observers.get(&rect) else {
            return 0;
        };

        let mut passes = 0;
        for handle in observers {
            if let Some(layout) = self.layouts.get_mut(handle) {
                if layout.on_dimensions_changed(&mut self.rects, &mut self.scene) {
                    passes += 1;
                }
            }
        }
        debug!(%rect, passes, "dimensions changed");
        passes
    }

    /// Assign a shared material to a layout's standard slabs. Returns `false`
    /// for unknown handles.
    pub fn set_appearance(&mut self, handle: LayoutHandle, material: MaterialHandle) -> bool {
        match self.layouts.get(&handle) {
            Some(layout) => {
                layout.set_appearance(material, &mut self.scene);
                true
            }
            None => false,
        }
    }

    /// Look up a layout
    pub fn layout(&self, handle: LayoutHandle) -> Option<&CuboidLayout> {
        self.layouts.get(&handle)
    }

    /// Remove a layout and stop routing signals to it.
    ///
    /// Slab objects already created stay in the scene; their lifetime belongs
    /// to the scene owner.
    pub fn remove_layout(&mut self, handle: LayoutHandle) -> Option<CuboidLayout> {
        let layout = self.layouts.remove(&handle)?;
        for rect in layout.config().observed_rects() {
            if let Some(observers) = self.observers.get_mut(&rect) {
                observers.retain(|h| *h != handle);
                if observers.is_empty() {
                    self.observers.remove(&rect);
                }
            }
        }
        Some(layout)
    }

    /// Number of registered layouts
    pub fn layout_count(&self) -> usize {
        self.layouts.len()
    }
}
