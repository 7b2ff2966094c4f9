//! Opaque handles exchanged with the layout owner and the scene collaborator.
//!
//! None of these carry behavior of their own. The layout owner hands out
//! [`RectHandle`]s, the scene hands out [`SlabNode`]s, and materials/templates
//! are whatever the rendering side decides they are.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a rectangle owned by the layout system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RectHandle(pub u64);

/// Identifier of a slab object created by the scene collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlabNode(pub u64);

/// Shared rendering material reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialHandle(pub u64);

/// Creation handle used to instantiate slab objects (e.g. a prefab name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlabTemplate(pub String);

impl SlabTemplate {
    /// Create a template handle from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Template name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rect#{}", self.0)
    }
}

impl fmt::Display for SlabNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slab#{}", self.0)
    }
}

impl fmt::Display for SlabTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_display_for_logs() {
        assert_eq!(RectHandle(4).to_string(), "rect#4");
        assert_eq!(SlabNode(9).to_string(), "slab#9");
        assert_eq!(SlabTemplate::new("backing_cube").to_string(), "backing_cube");
    }
}
