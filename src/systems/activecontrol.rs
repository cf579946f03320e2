//! Active-control system: deterministic input → intent mapping.
//!
//! In menu states, discrete key edges drive state-machine transitions. In
//! the playing state, held movement keys set horizontal speed and facing,
//! and a jump edge launches the entity. No physics happens here; the
//! transform system turns the intent into motion later in the frame.

use crate::ecs::kind::ComponentKind;
use crate::ecs::registry::Registry;
use crate::ecs::RegistryError;
use crate::resources::gamestate::{GameStates, StateMachine};
use crate::resources::input::InputState;

/// Horizontal walk speed in world units per tick.
pub const WALK_SPEED: f32 = 5.0;
/// Vertical launch speed of a jump, consumed by gravity thereafter.
pub const JUMP_SPEED: f32 = 31.0;

/// Per-frame inputs of the active-control system.
pub struct ControlParams<'a> {
    pub input: &'a InputState,
    pub state: &'a mut StateMachine,
}

/// Drive menu transitions and player movement intent for this frame.
pub fn run(registry: &mut Registry, params: &mut ControlParams<'_>) -> Result<(), RegistryError> {
    let input = params.input;

    // Menu and pause transitions happen once per frame, not per entity.
    match params.state.current() {
        GameStates::WelcomeScreen => {
            if input.menu_start.just_pressed {
                params.state.do_transition(GameStates::WelcomeScreen, GameStates::Playing);
            }
            if input.menu_options.just_pressed {
                params
                    .state
                    .do_transition(GameStates::WelcomeScreen, GameStates::OptionsMenu);
            }
            if input.menu_quit.just_pressed {
                params.state.do_transition(GameStates::WelcomeScreen, GameStates::Quitting);
            }
        }
        GameStates::OptionsMenu => {
            if input.pause.just_pressed {
                params
                    .state
                    .do_transition(GameStates::OptionsMenu, GameStates::WelcomeScreen);
            }
            if input.menu_quit.just_pressed {
                params.state.do_transition(GameStates::OptionsMenu, GameStates::Quitting);
            }
        }
        GameStates::Playing => {
            if input.pause.just_pressed {
                params.state.do_transition(GameStates::Playing, GameStates::Paused);
            }
        }
        GameStates::Paused => {
            if input.pause.just_pressed {
                params.state.do_transition(GameStates::Paused, GameStates::Playing);
            }
        }
        GameStates::GameOver => {
            if input.menu_start.just_pressed {
                params.state.do_transition(GameStates::GameOver, GameStates::WelcomeScreen);
            }
        }
        GameStates::Quitting => {}
    }

    if !params.state.is_playing() {
        return Ok(());
    }

    for entity in registry.ids_with(&[ComponentKind::ActiveControl, ComponentKind::Transform]) {
        let transform = registry.transform_mut(entity)?;

        if input.move_left.held {
            transform.flip = true;
            transform.hspeed = -WALK_SPEED;
            transform.not_moving = false;
        }

        if input.move_right.held {
            transform.flip = false;
            transform.hspeed = WALK_SPEED;
            transform.not_moving = false;
        }

        // First-frame press only; holding the key does not re-launch.
        if input.jump.just_pressed && !transform.jumping {
            transform.jumping = true;
            transform.vspeed = JUMP_SPEED;
        }

        if !input.move_left.held && !input.move_right.held {
            transform.hspeed = 0.0;
            transform.not_moving = true;
        } else {
            transform.not_moving = false;
        }
    }

    Ok(())
}
