//! Input polling.
//!
//! Reads hardware keyboard state from Raylib once per frame and writes it
//! into [`InputState`]. The frame driver calls
//! [`InputState::reset_edges`] before this poll so press/release edges are
//! observed exactly once.

use raylib::RaylibHandle;

use crate::resources::input::{InputState, KeyState};

fn poll(rl: &RaylibHandle, key: &mut KeyState) {
    key.held = rl.is_key_down(key.binding);
    key.just_pressed = rl.is_key_pressed(key.binding);
    key.just_released = rl.is_key_released(key.binding);
}

/// Poll Raylib for keyboard input and update the input state.
pub fn update_input_state(rl: &RaylibHandle, input: &mut InputState) {
    poll(rl, &mut input.move_left);
    poll(rl, &mut input.move_right);
    poll(rl, &mut input.jump);
    poll(rl, &mut input.menu_start);
    poll(rl, &mut input.menu_options);
    poll(rl, &mut input.menu_quit);
    poll(rl, &mut input.pause);
}
