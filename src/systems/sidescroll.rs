//! Side-scroll system.
//!
//! Fakes a camera follow: while the player has advanced past the scroll
//! threshold and keeps moving, every SideScroll entity slides leftward at
//! its own scroll speed. Relies on the player sitting at a fixed low
//! entity id, which the level loader checks at load time.

use crate::ecs::entity::Entity;
use crate::ecs::kind::ComponentKind;
use crate::ecs::registry::Registry;
use crate::ecs::RegistryError;

/// The player's well-known entity id in every level.
pub const PLAYER_ENTITY: Entity = Entity(1);

/// Horizontal position past which the world scrolls instead of the player.
pub const SCROLL_THRESHOLD_X: f32 = 450.0;

pub fn run(registry: &mut Registry, delta: f32) -> Result<(), RegistryError> {
    if !registry.has(PLAYER_ENTITY, ComponentKind::Transform) {
        // Menu levels have no player; nothing scrolls.
        return Ok(());
    }
    let player = registry.transform(PLAYER_ENTITY)?;
    if player.x <= SCROLL_THRESHOLD_X || player.not_moving {
        return Ok(());
    }

    for entity in registry.ids_with(&[ComponentKind::SideScroll, ComponentKind::Transform]) {
        let hspeed = registry.sidescroll(entity)?.hspeed;
        registry.transform_mut(entity)?.x -= hspeed * delta;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_scenery(registry: &mut Registry, id: u64, x: f32, hspeed: f32) -> Entity {
        let entity = Entity(id);
        registry.init_entity(entity);
        registry.attach(entity, ComponentKind::SideScroll).unwrap();
        registry.attach(entity, ComponentKind::Transform).unwrap();
        registry.transform_mut(entity).unwrap().x = x;
        registry.sidescroll_mut(entity).unwrap().hspeed = hspeed;
        entity
    }

    fn make_player(registry: &mut Registry, x: f32, not_moving: bool) {
        registry.init_entity(PLAYER_ENTITY);
        registry.attach(PLAYER_ENTITY, ComponentKind::Transform).unwrap();
        let transform = registry.transform_mut(PLAYER_ENTITY).unwrap();
        transform.x = x;
        transform.not_moving = not_moving;
    }

    #[test]
    fn test_scrolls_when_player_is_past_threshold_and_moving() {
        let mut registry = Registry::new();
        make_player(&mut registry, 500.0, false);
        let scenery = make_scenery(&mut registry, 2, 100.0, 4.0);

        run(&mut registry, 1.0).unwrap();
        assert_eq!(registry.transform(scenery).unwrap().x, 96.0);
    }

    #[test]
    fn test_no_scroll_before_threshold() {
        let mut registry = Registry::new();
        make_player(&mut registry, 100.0, false);
        let scenery = make_scenery(&mut registry, 2, 100.0, 4.0);

        run(&mut registry, 1.0).unwrap();
        assert_eq!(registry.transform(scenery).unwrap().x, 100.0);
    }

    #[test]
    fn test_no_scroll_while_player_stands_still() {
        let mut registry = Registry::new();
        make_player(&mut registry, 500.0, true);
        let scenery = make_scenery(&mut registry, 2, 100.0, 4.0);

        run(&mut registry, 1.0).unwrap();
        assert_eq!(registry.transform(scenery).unwrap().x, 100.0);
    }

    #[test]
    fn test_no_player_is_a_no_op() {
        let mut registry = Registry::new();
        let scenery = make_scenery(&mut registry, 2, 100.0, 4.0);
        run(&mut registry, 1.0).unwrap();
        assert_eq!(registry.transform(scenery).unwrap().x, 100.0);
    }
}
