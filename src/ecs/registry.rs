//! The entity/component registry.
//!
//! Presence vectors live in a `BTreeMap` keyed by entity id, which gives
//! every system the same ascending-id iteration for free. Component data
//! records live in parallel typed maps, one per data-carrying kind, so
//! accessors are fully typed and there is no `Any` downcasting anywhere.
//!
//! Records are allocated zeroed when their kind is attached and populated
//! by the level/asset loader before the first frame. The whole registry is
//! replaced on level reload; there is no incremental entity removal.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::components::animate::AnimateData;
use crate::components::collision::{CollisionData, Rect};
use crate::components::gravity::GravityData;
use crate::components::render::RenderData;
use crate::components::sidescroll::SideScrollData;
use crate::components::transform::TransformData;
use crate::ecs::entity::Entity;
use crate::ecs::error::RegistryError;
use crate::ecs::kind::{ComponentKind, PresenceVector};

#[derive(Debug, Default)]
pub struct Registry {
    presence: BTreeMap<Entity, PresenceVector>,
    transforms: FxHashMap<Entity, TransformData>,
    renders: FxHashMap<Entity, RenderData>,
    animates: FxHashMap<Entity, AnimateData>,
    collisions: FxHashMap<Entity, CollisionData>,
    gravities: FxHashMap<Entity, GravityData>,
    sidescrolls: FxHashMap<Entity, SideScrollData>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Allocate the presence vector for `entity`. Idempotent: a second call
    /// for the same entity leaves its existing vector untouched.
    pub fn init_entity(&mut self, entity: Entity) {
        self.presence.entry(entity).or_default();
    }

    /// Attach `kind` to an initialized entity, allocating the kind's zeroed
    /// data record if it carries one.
    pub fn attach(&mut self, entity: Entity, kind: ComponentKind) -> Result<(), RegistryError> {
        let vector = self
            .presence
            .get_mut(&entity)
            .ok_or(RegistryError::InvalidEntity(entity))?;
        vector.attach(kind);

        match kind {
            ComponentKind::Transform => {
                self.transforms.entry(entity).or_default();
            }
            ComponentKind::Render => {
                self.renders.entry(entity).or_default();
            }
            ComponentKind::Animate => {
                self.animates.entry(entity).or_default();
            }
            ComponentKind::Collide => {
                self.collisions.entry(entity).or_default();
            }
            ComponentKind::Gravity => {
                self.gravities.entry(entity).or_default();
            }
            ComponentKind::SideScroll => {
                self.sidescrolls.entry(entity).or_default();
            }
            // Marker kinds carry no record.
            ComponentKind::Real
            | ComponentKind::ActiveControl
            | ComponentKind::PassiveControl
            | ComponentKind::Dynamic => {}
        }
        Ok(())
    }

    pub fn has(&self, entity: Entity, kind: ComponentKind) -> bool {
        self.presence
            .get(&entity)
            .is_some_and(|vector| vector.has(kind))
    }

    pub fn presence(&self, entity: Entity) -> Result<&PresenceVector, RegistryError> {
        self.presence
            .get(&entity)
            .ok_or(RegistryError::InvalidEntity(entity))
    }

    /// Finite, restartable iteration over `(entity, presence)` pairs in
    /// ascending entity-id order. Every system depends on this ordering.
    pub fn entities(&self) -> impl Iterator<Item = (Entity, &PresenceVector)> {
        self.presence.iter().map(|(entity, vector)| (*entity, vector))
    }

    /// Ids of all entities carrying every kind in `kinds`, ascending.
    ///
    /// Systems that mutate records while walking the result use this
    /// instead of [`Registry::entities`] to keep the borrow local.
    pub fn ids_with(&self, kinds: &[ComponentKind]) -> Vec<Entity> {
        self.presence
            .iter()
            .filter(|(_, vector)| vector.has_all(kinds))
            .map(|(entity, _)| *entity)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.presence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presence.is_empty()
    }

    /// Discard every entity and record. Level reload replaces the registry
    /// wholesale rather than collecting entities one by one.
    pub fn clear(&mut self) {
        self.presence.clear();
        self.transforms.clear();
        self.renders.clear();
        self.animates.clear();
        self.collisions.clear();
        self.gravities.clear();
        self.sidescrolls.clear();
    }

    fn check(&self, entity: Entity, kind: ComponentKind) -> Result<(), RegistryError> {
        let vector = self
            .presence
            .get(&entity)
            .ok_or(RegistryError::InvalidEntity(entity))?;
        if vector.has(kind) {
            Ok(())
        } else {
            Err(RegistryError::MissingComponent(entity, kind))
        }
    }

    pub fn transform(&self, entity: Entity) -> Result<&TransformData, RegistryError> {
        self.check(entity, ComponentKind::Transform)?;
        Ok(&self.transforms[&entity])
    }

    pub fn transform_mut(&mut self, entity: Entity) -> Result<&mut TransformData, RegistryError> {
        self.check(entity, ComponentKind::Transform)?;
        Ok(self.transforms.get_mut(&entity).expect("presence vector out of sync"))
    }

    pub fn render(&self, entity: Entity) -> Result<&RenderData, RegistryError> {
        self.check(entity, ComponentKind::Render)?;
        Ok(&self.renders[&entity])
    }

    pub fn render_mut(&mut self, entity: Entity) -> Result<&mut RenderData, RegistryError> {
        self.check(entity, ComponentKind::Render)?;
        Ok(self.renders.get_mut(&entity).expect("presence vector out of sync"))
    }

    pub fn animate(&self, entity: Entity) -> Result<&AnimateData, RegistryError> {
        self.check(entity, ComponentKind::Animate)?;
        Ok(&self.animates[&entity])
    }

    pub fn animate_mut(&mut self, entity: Entity) -> Result<&mut AnimateData, RegistryError> {
        self.check(entity, ComponentKind::Animate)?;
        Ok(self.animates.get_mut(&entity).expect("presence vector out of sync"))
    }

    /// Mutable animate and render records of the same entity at once; the
    /// animate system swaps the displayed frame in both in one pass.
    pub fn animate_and_render_mut(
        &mut self,
        entity: Entity,
    ) -> Result<(&mut AnimateData, &mut RenderData), RegistryError> {
        self.check(entity, ComponentKind::Animate)?;
        self.check(entity, ComponentKind::Render)?;
        let animate = self.animates.get_mut(&entity).expect("presence vector out of sync");
        let render = self.renders.get_mut(&entity).expect("presence vector out of sync");
        Ok((animate, render))
    }

    pub fn collision(&self, entity: Entity) -> Result<&CollisionData, RegistryError> {
        self.check(entity, ComponentKind::Collide)?;
        Ok(&self.collisions[&entity])
    }

    pub fn collision_mut(&mut self, entity: Entity) -> Result<&mut CollisionData, RegistryError> {
        self.check(entity, ComponentKind::Collide)?;
        Ok(self.collisions.get_mut(&entity).expect("presence vector out of sync"))
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn gravity(&self, entity: Entity) -> Result<&GravityData, RegistryError> {
        self.check(entity, ComponentKind::Gravity)?;
        Ok(&self.gravities[&entity])
    }

    pub fn sidescroll(&self, entity: Entity) -> Result<&SideScrollData, RegistryError> {
        self.check(entity, ComponentKind::SideScroll)?;
        Ok(&self.sidescrolls[&entity])
    }

    pub fn sidescroll_mut(&mut self, entity: Entity) -> Result<&mut SideScrollData, RegistryError> {
        self.check(entity, ComponentKind::SideScroll)?;
        Ok(self.sidescrolls.get_mut(&entity).expect("presence vector out of sync"))
    }

    /// World-space rectangle of an entity: transform position + render
    /// image dimensions. Collide entities without either record are a
    /// configuration error surfaced through the `Err`.
    pub fn entity_rect(&self, entity: Entity) -> Result<Rect, RegistryError> {
        let transform = self.transform(entity)?;
        let render = self.render(entity)?;
        Ok(Rect::new(transform.x, transform.y, render.width, render.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: u64) -> Entity {
        Entity(id)
    }

    #[test]
    fn test_init_entity_is_idempotent() {
        let mut registry = Registry::new();
        registry.init_entity(entity(1));
        registry.attach(entity(1), ComponentKind::Transform).unwrap();
        registry.transform_mut(entity(1)).unwrap().x = 42.0;

        registry.init_entity(entity(1));
        assert!(registry.has(entity(1), ComponentKind::Transform));
        assert_eq!(registry.transform(entity(1)).unwrap().x, 42.0);
    }

    #[test]
    fn test_attach_to_uninitialized_entity_fails() {
        let mut registry = Registry::new();
        let err = registry.attach(entity(7), ComponentKind::Transform).unwrap_err();
        assert_eq!(err, RegistryError::InvalidEntity(entity(7)));
    }

    #[test]
    fn test_missing_component_is_reported() {
        let mut registry = Registry::new();
        registry.init_entity(entity(1));
        let err = registry.transform(entity(1)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingComponent(entity(1), ComponentKind::Transform)
        );
    }

    #[test]
    fn test_attach_allocates_zeroed_record() {
        let mut registry = Registry::new();
        registry.init_entity(entity(3));
        registry.attach(entity(3), ComponentKind::Transform).unwrap();
        let transform = registry.transform(entity(3)).unwrap();
        assert_eq!(*transform, TransformData::default());
    }

    #[test]
    fn test_entities_iterate_in_ascending_id_order() {
        let mut registry = Registry::new();
        for id in [5u64, 1, 9, 3] {
            registry.init_entity(entity(id));
        }
        let ids: Vec<u64> = registry.entities().map(|(e, _)| e.id()).collect();
        assert_eq!(ids, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_entities_iteration_is_restartable() {
        let mut registry = Registry::new();
        registry.init_entity(entity(1));
        registry.init_entity(entity(2));
        let first: Vec<_> = registry.entities().map(|(e, _)| e).collect();
        let second: Vec<_> = registry.entities().map(|(e, _)| e).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ids_with_filters_on_all_kinds() {
        let mut registry = Registry::new();
        for id in 1..=4u64 {
            registry.init_entity(entity(id));
            registry.attach(entity(id), ComponentKind::Transform).unwrap();
        }
        registry.attach(entity(2), ComponentKind::Gravity).unwrap();
        registry.attach(entity(4), ComponentKind::Gravity).unwrap();

        let ids: Vec<u64> = registry
            .ids_with(&[ComponentKind::Gravity, ComponentKind::Transform])
            .iter()
            .map(|e| e.id())
            .collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut registry = Registry::new();
        registry.init_entity(entity(1));
        registry.attach(entity(1), ComponentKind::Render).unwrap();
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.has(entity(1), ComponentKind::Render));
    }

    #[test]
    fn test_entity_rect_combines_transform_and_render() {
        let mut registry = Registry::new();
        registry.init_entity(entity(1));
        registry.attach(entity(1), ComponentKind::Transform).unwrap();
        registry.attach(entity(1), ComponentKind::Render).unwrap();
        {
            let transform = registry.transform_mut(entity(1)).unwrap();
            transform.x = 10.0;
            transform.y = 20.0;
        }
        {
            let render = registry.render_mut(entity(1)).unwrap();
            render.width = 32.0;
            render.height = 64.0;
        }
        let rect = registry.entity_rect(entity(1)).unwrap();
        assert_eq!(rect, Rect::new(10.0, 20.0, 32.0, 64.0));
    }

    #[test]
    fn test_entity_rect_fails_fast_without_render() {
        let mut registry = Registry::new();
        registry.init_entity(entity(1));
        registry.attach(entity(1), ComponentKind::Transform).unwrap();
        let err = registry.entity_rect(entity(1)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingComponent(entity(1), ComponentKind::Render)
        );
    }
}
