//! Scene graph with transform propagation

use slotmap::SlotMap;

use crate::foundation::math::Transform;
use crate::physics::collision::{ColliderHandle, CollisionRegistry};

slotmap::new_key_type! {
    /// Stable handle to a scene node
    pub struct NodeHandle;
}

/// A node in the spatial hierarchy
#[derive(Debug)]
pub struct SceneNode {
    /// Transform relative to the parent node
    pub local: Transform,

    /// Collision component driven by this node, if any
    pub collider: Option<ColliderHandle>,

    world: Transform,
    parent: Option<NodeHandle>,
    children: Vec<NodeHandle>,
}

impl SceneNode {
    /// The node's world transform as of the last propagation pass
    pub fn world_transform(&self) -> &Transform {
        &self.world
    }

    /// The node's parent, if it is not a root
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// The node's children
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }
}

/// Hierarchy of transforms
///
/// World transforms are recomputed top-down by
/// [`Self::propagate_transforms`]; until it runs, nodes report the world
/// transform from the previous pass.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeHandle, SceneNode>,
    roots: Vec<NodeHandle>,
}

impl SceneGraph {
    /// Create an empty scene graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent` (or as a root when `parent` is `None`)
    ///
    /// A stale parent handle is treated as `None`.
    pub fn add_node(&mut self, parent: Option<NodeHandle>, local: Transform) -> NodeHandle {
        let parent = parent.filter(|p| self.nodes.contains_key(*p));
        let world = match parent.and_then(|p| self.nodes.get(p)) {
            Some(parent_node) => parent_node.world.combine(&local),
            None => local.clone(),
        };

        let handle = self.nodes.insert(SceneNode {
            local,
            collider: None,
            world,
            parent,
            children: Vec::new(),
        });

        match parent {
            Some(parent_handle) => {
                self.nodes[parent_handle].children.push(handle);
            }
            None => self.roots.push(handle),
        }
        handle
    }

    /// Access a node
    pub fn node(&self, handle: NodeHandle) -> Option<&SceneNode> {
        self.nodes.get(handle)
    }

    /// Mutably access a node
    pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut SceneNode> {
        self.nodes.get_mut(handle)
    }

    /// Number of nodes in the graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Replace a node's local transform
    pub fn set_local_transform(&mut self, handle: NodeHandle, local: Transform) {
        if let Some(node) = self.nodes.get_mut(handle) {
            node.local = local;
        }
    }

    /// Associate a collision component with a node
    pub fn attach_collider(&mut self, handle: NodeHandle, collider: ColliderHandle) {
        if let Some(node) = self.nodes.get_mut(handle) {
            node.collider = Some(collider);
        }
    }

    /// Remove a node and its whole subtree
    ///
    /// Returns the collider handles that were attached anywhere in the
    /// removed subtree so the caller can drop them from the registry.
    pub fn remove_subtree(&mut self, handle: NodeHandle) -> Vec<ColliderHandle> {
        let Some(node) = self.nodes.get(handle) else {
            return Vec::new();
        };

        // Detach from the parent's child list (or the root list)
        match node.parent {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(parent) {
                    parent_node.children.retain(|&c| c != handle);
                }
            }
            None => self.roots.retain(|&r| r != handle),
        }

        let mut removed_colliders = Vec::new();
        let mut stack = vec![handle];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                if let Some(collider) = node.collider {
                    removed_colliders.push(collider);
                }
                stack.extend(node.children);
            }
        }
        removed_colliders
    }

    /// Recompute world transforms top-down from the roots
    pub fn propagate_transforms(&mut self) {
        let mut stack: Vec<(NodeHandle, Transform)> = self
            .roots
            .iter()
            .map(|&root| (root, Transform::identity()))
            .collect();

        while let Some((handle, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(handle) else {
                continue;
            };
            node.world = parent_world.combine(&node.local);
            let world = node.world.clone();
            let children = node.children.clone();
            for child in children {
                stack.push((child, world.clone()));
            }
        }
    }

    /// Push current world transforms into the collision registry
    ///
    /// The collision core only ever reads transforms; this is the single
    /// place they are written.
    pub fn sync_colliders(&self, registry: &mut CollisionRegistry) {
        for (_, node) in &self.nodes {
            if let Some(collider) = node.collider {
                registry.set_world_transform(collider, node.world.clone());
            }
        }
    }
}
