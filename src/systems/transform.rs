//! Transform system: the single point where velocity becomes position.
//!
//! For every entity with both Dynamic and Transform kinds: record the
//! previous position, then integrate. Horizontal speed is scaled by the
//! frame delta; vertical speed is deliberately not. The jump arc is tuned
//! against un-scaled vertical steps, so that asymmetry is part of the
//! movement feel.

use crate::ecs::kind::ComponentKind;
use crate::ecs::registry::Registry;
use crate::ecs::RegistryError;

pub fn run(registry: &mut Registry, delta: f32) -> Result<(), RegistryError> {
    for entity in registry.ids_with(&[ComponentKind::Dynamic, ComponentKind::Transform]) {
        let transform = registry.transform_mut(entity)?;
        transform.prev_x = transform.x;
        transform.prev_y = transform.y;
        transform.x += transform.hspeed * delta;
        // y grows downward, vspeed is positive upward.
        transform.y -= transform.vspeed;
    }
    Ok(())
}
