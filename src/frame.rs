//! The frame driver.
//!
//! Runs the systems strictly sequentially in their fixed order:
//!
//! active control → gravity → transform → collide → side scroll → animate
//!
//! followed by the render call issued by the outer loop. The sequence is an
//! invariant, not an optimization: collide must see the positions transform
//! just integrated, animate must see the jump/move flags collide just
//! corrected, and render must see the texture keys animate just swapped.
//! Physics only advances in the playing state; in menus only active
//! control runs, so menu keys keep working.
//!
//! Any registry error aborts the frame: continuing with partially updated
//! records would corrupt physics determinism for every later frame.

use crate::ecs::registry::Registry;
use crate::ecs::RegistryError;
use crate::resources::gamestate::StateMachine;
use crate::resources::input::InputState;
use crate::systems::activecontrol::{self, ControlParams};
use crate::systems::{animate, collide, gravity, sidescroll, transform};

/// Per-frame inputs of the whole pipeline.
pub struct FrameParams<'a> {
    /// Frame-time multiplier, 1.0 at the nominal tick rate.
    pub delta: f32,
    /// Gravity in speed units per tick, from the level physics.
    pub gravity: f32,
    pub input: &'a InputState,
    pub state: &'a mut StateMachine,
}

/// Advance the simulation by one tick.
pub fn run_frame(registry: &mut Registry, params: &mut FrameParams<'_>) -> Result<(), RegistryError> {
    activecontrol::run(
        registry,
        &mut ControlParams { input: params.input, state: params.state },
    )?;

    if params.state.is_playing() {
        gravity::run(registry, params.gravity)?;
        transform::run(registry, params.delta)?;
        collide::run(registry)?;
        sidescroll::run(registry, params.delta)?;
        animate::run(registry)?;
    }

    Ok(())
}
