//! Cuboid slabs for world-space UI panels
//!
//! Flat UI rectangles get a pseudo-3D look from thin "cuboid" slabs placed
//! behind them. This crate computes where those slabs go and keeps them fitted
//! as the rectangles are re-laid out.
//!
//! # Features
//!
//! - **Slab geometry**: pivot-corrected centering, fixed extrusion depth and
//!   anti-Z-fighting offsets, for standard and highlight slabs
//! - **Reactive re-layout**: every size or pivot change re-fits all slabs
//! - **Engine agnostic**: slab objects live behind the [`SlabScene`] trait
//!
//! # Example
//!
//! ```rust
//! use cuboid_layout_core::{MaterialHandle, SlabTemplate};
//! use cuboid_layout_ui3d::{CuboidLayoutConfig, CuboidManager, RectTransform, RetainedScene};
//! use glam::Vec2;
//!
//! let mut manager = CuboidManager::new(RetainedScene::new());
//! let panel = manager.add_rect(RectTransform::new(100.0, 50.0).with_pivot(0.0, 0.0));
//!
//! let layout = manager.add_layout(
//!     CuboidLayoutConfig::new(SlabTemplate::new("backing_cube"), SlabTemplate::new("highlight_cube"))
//!         .with_rects([panel]),
//! );
//! manager.ready(layout);
//! manager.set_appearance(layout, MaterialHandle(1));
//!
//! // Whenever the layout system resizes the panel:
//! manager.resize_rect(panel, Vec2::new(120.0, 50.0));
//! ```

pub mod components;
pub mod layout;
pub mod manager;
pub mod scene;
pub mod store;

// Re-export commonly used types
pub use components::{RectTransform, SlabDescriptor, SlabTransform};
pub use layout::{
    fit_slab, pivot_offset, recompute, CuboidLayout, CuboidLayoutConfig, CuboidSnapshot, SlabKind,
    SlabPadding, SlabSnapshot, ANTI_Z_FIGHTING_EPSILON, CUBOID_PIVOT, SLAB_THICKNESS,
    SLAB_Z_OFFSET,
};
pub use manager::{CuboidManager, LayoutHandle};
pub use scene::{RetainedScene, SceneNode, SlabScene};
pub use store::RectStore;

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
