//! Scene collaborator - creates slab objects and receives their transforms

use crate::components::SlabTransform;
use cuboid_layout_core::{MaterialHandle, RectHandle, SlabNode, SlabTemplate};
use std::collections::BTreeMap;
use tracing::warn;

/// Whatever owns the live slab objects (retained scene graph, ECS, draw list).
pub trait SlabScene {
    /// Create one slab object from `template`, parented under `parent` so
    /// that its local space is the rectangle's local space. The new object
    /// must not inherit the parent's scale.
    fn instantiate(&mut self, template: &SlabTemplate, parent: RectHandle) -> SlabNode;

    /// Store a freshly computed local transform on a slab object.
    fn write_transform(&mut self, node: SlabNode, transform: &SlabTransform);

    /// Replace the shared material on a slab object's renderer.
    fn set_shared_material(&mut self, node: SlabNode, material: MaterialHandle);
}

/// A slab object held by [`RetainedScene`]
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Template it was created from
    pub template: SlabTemplate,
    /// Rectangle it is parented under
    pub parent: RectHandle,
    /// Local transform relative to `parent`
    pub transform: SlabTransform,
    /// Shared material, if one was assigned
    pub material: Option<MaterialHandle>,
}

/// In-memory scene that just records what it is told.
#[derive(Debug, Clone, Default)]
pub struct RetainedScene {
    nodes: BTreeMap<SlabNode, SceneNode>,
    next_node: u64,
}

impl RetainedScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a node
    pub fn node(&self, node: SlabNode) -> Option<&SceneNode> {
        self.nodes.get(&node)
    }

    /// Nodes parented under `parent`
    pub fn children_of(&self, parent: RectHandle) -> impl Iterator<Item = (SlabNode, &SceneNode)> {
        self.iter().filter(move |(_, node)| node.parent == parent)
    }

    /// All nodes in creation order
    pub fn iter(&self) -> impl Iterator<Item = (SlabNode, &SceneNode)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node was created yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl SlabScene for RetainedScene {
    fn instantiate(&mut self, template: &SlabTemplate, parent: RectHandle) -> SlabNode {
        let id = SlabNode(self.next_node);
        self.next_node += 1;
        self.nodes.insert(
            id,
            SceneNode {
                template: template.clone(),
                parent,
                transform: SlabTransform::default(),
                material: None,
            },
        );
        id
    }

    fn write_transform(&mut self, node: SlabNode, transform: &SlabTransform) {
        match self.nodes.get_mut(&node) {
            Some(entry) => entry.transform = *transform,
            None => warn!(%node, "transform written to unknown slab node"),
        }
    }

    fn set_shared_material(&mut self, node: SlabNode, material: MaterialHandle) {
        match self.nodes.get_mut(&node) {
            Some(entry) => entry.material = Some(material),
            None => warn!(%node, "material assigned to unknown slab node"),
        }
    }
}
