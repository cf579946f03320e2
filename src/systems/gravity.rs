//! Gravity system.
//!
//! Decrements vertical speed by a fixed constant for every entity with
//! both Gravity and Transform kinds. Unconditional: it runs even while an
//! entity rests on the ground; the downward drift is corrected by collision
//! resolution, not by gating gravity. There is no terminal-velocity clamp.

use crate::ecs::kind::ComponentKind;
use crate::ecs::registry::Registry;
use crate::ecs::RegistryError;

/// Default gravity in speed units per tick, used when the level physics
/// section does not override it.
pub const DEFAULT_GRAVITY: f32 = 0.981;

pub fn run(registry: &mut Registry, gravity: f32) -> Result<(), RegistryError> {
    for entity in registry.ids_with(&[ComponentKind::Gravity, ComponentKind::Transform]) {
        registry.transform_mut(entity)?.vspeed -= gravity;
    }
    Ok(())
}
