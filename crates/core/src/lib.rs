#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod bounds;
pub mod handles;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use bounds::Aabb;
pub use handles::{MaterialHandle, RectHandle, SlabNode, SlabTemplate};

/// Monotonic counter of completed layout passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct LayoutPass(pub u64);

impl LayoutPass {
    /// No pass has run yet.
    pub const ZERO: Self = Self(0);

    /// Advance by `delta` passes.
    pub fn advance(self, delta: u64) -> Self {
        Self(self.0 + delta)
    }

    /// Next pass.
    pub fn next(self) -> Self {
        self.advance(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_pass_advances() {
        assert_eq!(LayoutPass::ZERO.next(), LayoutPass(1));
        assert_eq!(LayoutPass(3).advance(4), LayoutPass(7));
        assert_eq!(LayoutPass::default(), LayoutPass::ZERO);
    }
}
