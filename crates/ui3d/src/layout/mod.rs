//! Cuboid layout
//!
//! Pure slab geometry ([`cuboid`]) and the component that keeps a set of
//! slabs fitted to their rectangles as the layout changes ([`cuboid_layout`]).

pub mod cuboid;
pub mod cuboid_layout;
pub mod snapshot;

pub use cuboid::{
    fit_slab, pivot_offset, recompute, SlabKind, SlabPadding, ANTI_Z_FIGHTING_EPSILON,
    CUBOID_PIVOT, SLAB_THICKNESS, SLAB_Z_OFFSET,
};
pub use cuboid_layout::{CuboidLayout, CuboidLayoutConfig};
pub use snapshot::{CuboidSnapshot, SlabSnapshot};
