//! Actor object model
//!
//! Actors are the unit of gameplay ownership: each one owns a scene node
//! and optionally a collision component. Spawning wires everything up
//! (including collision registration) and despawning tears it down, so
//! the registry can never hold an entry for an actor that no longer
//! exists.

use slotmap::SlotMap;

use crate::foundation::math::Transform;
use crate::physics::collision::{ColliderHandle, CollisionComponent, CollisionRegistry};
use crate::scene::{NodeHandle, SceneGraph};

slotmap::new_key_type! {
    /// Stable handle to an actor
    pub struct ActorHandle;
}

/// A gameplay object owning a scene node and optional collision
#[derive(Debug)]
pub struct Actor {
    /// Display name for logs and debugging
    pub name: String,
    /// The actor's node in the scene graph
    pub node: NodeHandle,
    /// The actor's collision component, if it has one
    pub collider: Option<ColliderHandle>,
}

/// Container of all live actors
#[derive(Debug, Default)]
pub struct ActorWorld {
    actors: SlotMap<ActorHandle, Actor>,
}

impl ActorWorld {
    /// Create an empty actor world
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an actor with a fresh scene node
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        scene: &mut SceneGraph,
        parent: Option<NodeHandle>,
        local: Transform,
    ) -> ActorHandle {
        let node = scene.add_node(parent, local);
        self.actors.insert(Actor {
            name: name.into(),
            node,
            collider: None,
        })
    }

    /// Attach a collision component to an actor
    ///
    /// The component is registered with the collision registry and
    /// seeded with the node's current world transform. Replacing an
    /// existing collider removes the old one first. Returns `None` for
    /// a stale actor handle.
    pub fn attach_collider(
        &mut self,
        actor: ActorHandle,
        component: CollisionComponent,
        scene: &mut SceneGraph,
        registry: &mut CollisionRegistry,
    ) -> Option<ColliderHandle> {
        let actor = self.actors.get_mut(actor)?;
        if let Some(previous) = actor.collider.take() {
            registry.remove(previous);
        }

        let handle = registry.insert(component);
        if let Some(node) = scene.node(actor.node) {
            registry.set_world_transform(handle, node.world_transform().clone());
        }
        scene.attach_collider(actor.node, handle);
        actor.collider = Some(handle);
        Some(handle)
    }

    /// Destroy an actor, its scene subtree, and its collision state
    pub fn despawn(
        &mut self,
        actor: ActorHandle,
        scene: &mut SceneGraph,
        registry: &mut CollisionRegistry,
    ) {
        let Some(actor) = self.actors.remove(actor) else {
            return;
        };
        for collider in scene.remove_subtree(actor.node) {
            registry.remove(collider);
        }
        // A collider attached to this actor but detached from its node
        // would be missed above; remove defensively by handle too
        if let Some(collider) = actor.collider {
            registry.remove(collider);
        }
    }

    /// Access an actor
    pub fn get(&self, handle: ActorHandle) -> Option<&Actor> {
        self.actors.get(handle)
    }

    /// Number of live actors
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether there are no live actors
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Iterate all live actors
    pub fn iter(&self) -> impl Iterator<Item = (ActorHandle, &Actor)> {
        self.actors.iter()
    }
}
