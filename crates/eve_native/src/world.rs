//! Entity storage and hierarchy.
//!
//! The [`World`] keeps every live entity's record plus the order entities
//! were created in, which is the storage order name lookups and frame
//! updates follow. Ids are random non-zero 64-bit values and are never
//! handed out twice by the same world.

use std::collections::{HashMap, HashSet};

use eve_interop::{ComponentKind, EntityId};
use glam::Vec3;
use uuid::Uuid;

use crate::components::{
    BoxColliderData, CameraData, CircleColliderData, PostProcessData, RigidbodyData, ScriptData,
    SpriteData, TextData,
};
use crate::transform::Transform;

/// Everything the engine knows about one entity.
///
/// The transform is always present; every other component is optional.
#[derive(Debug, Clone, Default)]
pub struct EntityRecord {
    pub name: String,
    pub parent: EntityId,
    pub children: Vec<EntityId>,
    pub transform: Transform,
    pub camera: Option<CameraData>,
    pub script: Option<ScriptData>,
    pub sprite: Option<SpriteData>,
    pub text: Option<TextData>,
    pub rigidbody: Option<RigidbodyData>,
    pub box_collider: Option<BoxColliderData>,
    pub circle_collider: Option<CircleColliderData>,
    pub post_process: Option<PostProcessData>,
}

impl EntityRecord {
    #[must_use]
    pub fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Transform => true,
            ComponentKind::Camera => self.camera.is_some(),
            ComponentKind::Script => self.script.is_some(),
            ComponentKind::SpriteRenderer => self.sprite.is_some(),
            ComponentKind::TextRenderer => self.text.is_some(),
            ComponentKind::Rigidbody2D => self.rigidbody.is_some(),
            ComponentKind::BoxCollider2D => self.box_collider.is_some(),
            ComponentKind::CircleCollider2D => self.circle_collider.is_some(),
            ComponentKind::PostProcessVolume => self.post_process.is_some(),
        }
    }

    /// Add `kind` with its default data. Returns `false` if it was already
    /// present.
    pub fn add(&mut self, kind: ComponentKind) -> bool {
        fn insert<T: Default>(slot: &mut Option<T>) -> bool {
            if slot.is_some() {
                return false;
            }
            *slot = Some(T::default());
            true
        }

        match kind {
            ComponentKind::Transform => false,
            ComponentKind::Camera => insert(&mut self.camera),
            ComponentKind::Script => insert(&mut self.script),
            ComponentKind::SpriteRenderer => insert(&mut self.sprite),
            ComponentKind::TextRenderer => insert(&mut self.text),
            ComponentKind::Rigidbody2D => insert(&mut self.rigidbody),
            ComponentKind::BoxCollider2D => insert(&mut self.box_collider),
            ComponentKind::CircleCollider2D => insert(&mut self.circle_collider),
            ComponentKind::PostProcessVolume => insert(&mut self.post_process),
        }
    }
}

#[derive(Debug, Default)]
pub struct World {
    records: HashMap<EntityId, EntityRecord>,
    order: Vec<EntityId>,
    issued: HashSet<EntityId>,
}

impl World {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity. An unknown `parent` makes the entity a root.
    pub fn spawn(&mut self, name: &str, parent: EntityId, transform: Transform) -> EntityId {
        let id = self.allocate();
        let parent = if self.records.contains_key(&parent) {
            parent
        } else {
            EntityId::INVALID
        };
        if let Some(p) = self.records.get_mut(&parent) {
            p.children.push(id);
        }

        self.records.insert(
            id,
            EntityRecord {
                name: name.to_owned(),
                parent,
                transform,
                ..EntityRecord::default()
            },
        );
        self.order.push(id);
        id
    }

    fn allocate(&mut self) -> EntityId {
        loop {
            let (raw, _) = Uuid::new_v4().as_u64_pair();
            let id = EntityId(raw);
            if id.is_valid() && self.issued.insert(id) {
                return id;
            }
        }
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.records.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&EntityRecord> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut EntityRecord> {
        self.records.get_mut(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Live entity ids in storage order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.order.iter().copied()
    }

    /// First entity named `name` in storage order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> EntityId {
        self.order
            .iter()
            .copied()
            .find(|id| self.records.get(id).is_some_and(|r| r.name == name))
            .unwrap_or(EntityId::INVALID)
    }

    #[must_use]
    pub fn parent_of(&self, id: EntityId) -> EntityId {
        self.records
            .get(&id)
            .map_or(EntityId::INVALID, |r| r.parent)
    }

    /// `id` and all of its descendants, children before their parents.
    #[must_use]
    pub fn subtree_post_order(&self, id: EntityId) -> Vec<EntityId> {
        let mut out = Vec::new();
        self.collect_post_order(id, &mut out);
        out
    }

    fn collect_post_order(&self, id: EntityId, out: &mut Vec<EntityId>) {
        let Some(record) = self.records.get(&id) else {
            return;
        };
        for &child in &record.children {
            self.collect_post_order(child, out);
        }
        out.push(id);
    }

    /// Remove a single entity and detach it from its parent. Children are
    /// left in place; callers remove subtrees bottom-up.
    pub fn remove(&mut self, id: EntityId) -> Option<EntityRecord> {
        let record = self.records.remove(&id)?;
        self.order.retain(|&e| e != id);
        if let Some(parent) = self.records.get_mut(&record.parent) {
            parent.children.retain(|&c| c != id);
        }
        Some(record)
    }

    /// Drop every entity. Issued ids stay reserved.
    pub fn clear(&mut self) -> Vec<EntityRecord> {
        self.order.clear();
        self.records.drain().map(|(_, r)| r).collect()
    }

    /// World position: local position plus the parent's world position.
    #[must_use]
    pub fn world_position(&self, id: EntityId) -> Vec3 {
        self.compose(id, Vec3::ZERO, |t| t.local_position, |acc, v| acc + v)
    }

    /// World rotation: local Euler angles plus the parent's world rotation.
    #[must_use]
    pub fn world_rotation(&self, id: EntityId) -> Vec3 {
        self.compose(id, Vec3::ZERO, |t| t.local_rotation, |acc, v| acc + v)
    }

    /// World scale: local scale times the parent's world scale.
    #[must_use]
    pub fn world_scale(&self, id: EntityId) -> Vec3 {
        self.compose(id, Vec3::ONE, |t| t.local_scale, |acc, v| acc * v)
    }

    fn compose(
        &self,
        id: EntityId,
        identity: Vec3,
        field: impl Fn(&Transform) -> Vec3,
        combine: impl Fn(Vec3, Vec3) -> Vec3,
    ) -> Vec3 {
        let mut acc = identity;
        let mut current = self.records.get(&id);
        while let Some(record) = current {
            acc = combine(acc, field(&record.transform));
            current = self.records.get(&record.parent);
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_at(world: &mut World, name: &str, parent: EntityId, pos: Vec3) -> EntityId {
        world.spawn(name, parent, Transform::new(pos, Vec3::ZERO, Vec3::ONE))
    }

    #[test]
    fn test_spawn_assigns_unique_ids() {
        let mut world = World::new();
        let a = world.spawn("a", EntityId::INVALID, Transform::IDENTITY);
        let b = world.spawn("b", EntityId::INVALID, Transform::IDENTITY);
        assert!(a.is_valid());
        assert_ne!(a, b);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_find_by_name_uses_storage_order() {
        let mut world = World::new();
        let first = world.spawn("dup", EntityId::INVALID, Transform::IDENTITY);
        world.spawn("dup", EntityId::INVALID, Transform::IDENTITY);
        assert_eq!(world.find_by_name("dup"), first);
        assert_eq!(world.find_by_name("missing"), EntityId::INVALID);
    }

    #[test]
    fn test_unknown_parent_makes_root() {
        let mut world = World::new();
        let id = world.spawn("orphan", EntityId(12345), Transform::IDENTITY);
        assert_eq!(world.parent_of(id), EntityId::INVALID);
    }

    #[test]
    fn test_world_transform_composition() {
        let mut world = World::new();
        let root = spawn_at(&mut world, "root", EntityId::INVALID, Vec3::new(1.0, 0.0, 0.0));
        let child = spawn_at(&mut world, "child", root, Vec3::new(0.0, 2.0, 0.0));
        world.get_mut(root).unwrap().transform.local_scale = Vec3::splat(2.0);
        world.get_mut(child).unwrap().transform.local_scale = Vec3::splat(3.0);
        world.get_mut(root).unwrap().transform.local_rotation = Vec3::new(0.0, 0.0, 30.0);
        world.get_mut(child).unwrap().transform.local_rotation = Vec3::new(0.0, 0.0, 15.0);

        assert_eq!(world.world_position(child), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(world.world_scale(child), Vec3::splat(6.0));
        assert_eq!(world.world_rotation(child), Vec3::new(0.0, 0.0, 45.0));
    }

    #[test]
    fn test_subtree_is_children_first() {
        let mut world = World::new();
        let root = world.spawn("root", EntityId::INVALID, Transform::IDENTITY);
        let child = world.spawn("child", root, Transform::IDENTITY);
        let grandchild = world.spawn("grandchild", child, Transform::IDENTITY);
        assert_eq!(world.subtree_post_order(root), vec![grandchild, child, root]);
    }

    #[test]
    fn test_remove_detaches_from_parent() {
        let mut world = World::new();
        let root = world.spawn("root", EntityId::INVALID, Transform::IDENTITY);
        let child = world.spawn("child", root, Transform::IDENTITY);
        assert!(world.remove(child).is_some());
        assert!(world.get(root).unwrap().children.is_empty());
        assert!(!world.contains(child));
        assert!(world.remove(child).is_none());
    }

    #[test]
    fn test_add_component_once() {
        let mut record = EntityRecord::default();
        assert!(record.has(ComponentKind::Transform));
        assert!(!record.has(ComponentKind::Camera));
        assert!(record.add(ComponentKind::Camera));
        assert!(!record.add(ComponentKind::Camera));
        assert!(!record.add(ComponentKind::Transform));
        assert_eq!(record.camera.as_ref().unwrap().aspect_ratio, 1.77);
    }
}
