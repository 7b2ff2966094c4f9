//! Layout components
//!
//! Plain data for the rectangles being backed and the slabs backing them.

pub mod rect;
pub mod slab;

pub use rect::RectTransform;
pub use slab::{SlabDescriptor, SlabTransform};
