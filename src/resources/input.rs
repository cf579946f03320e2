//! Per-frame keyboard input state.
//!
//! Captures the subset of keyboard state the game cares about and exposes
//! it to the systems. The input system refreshes it once per frame from the
//! window backend; [`InputState::reset_edges`] clears the edge flags
//! between polls so a press is observed exactly once.

use raylib::prelude::KeyboardKey;

/// Key state for one action, with its keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct KeyState {
    /// Whether the key is currently held down.
    pub held: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub binding: KeyboardKey,
}

impl KeyState {
    fn bound_to(binding: KeyboardKey) -> Self {
        KeyState {
            held: false,
            just_pressed: false,
            just_released: false,
            binding,
        }
    }

    pub fn reset_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// The per-frame keyboard state relevant to gameplay and menus.
///
/// Movement uses held state, jumping and every menu action use press edges.
#[derive(Debug, Clone)]
pub struct InputState {
    pub move_left: KeyState,
    pub move_right: KeyState,
    pub jump: KeyState,
    // Menu keys
    pub menu_start: KeyState,
    pub menu_options: KeyState,
    pub menu_quit: KeyState,
    pub pause: KeyState,
}

impl Default for InputState {
    fn default() -> Self {
        InputState {
            move_left: KeyState::bound_to(KeyboardKey::KEY_A),
            move_right: KeyState::bound_to(KeyboardKey::KEY_D),
            jump: KeyState::bound_to(KeyboardKey::KEY_SPACE),
            menu_start: KeyState::bound_to(KeyboardKey::KEY_S),
            menu_options: KeyState::bound_to(KeyboardKey::KEY_O),
            menu_quit: KeyState::bound_to(KeyboardKey::KEY_E),
            pause: KeyState::bound_to(KeyboardKey::KEY_ESCAPE),
        }
    }
}

impl InputState {
    /// Clear press/release edges on every action. Called once per frame
    /// before the next poll.
    pub fn reset_edges(&mut self) {
        self.move_left.reset_edges();
        self.move_right.reset_edges();
        self.jump.reset_edges();
        self.menu_start.reset_edges();
        self.menu_options.reset_edges();
        self.menu_quit.reset_edges();
        self.pause.reset_edges();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keystate_default() {
        let ks = KeyState::default();
        assert!(!ks.held);
        assert!(!ks.just_pressed);
        assert!(!ks.just_released);
        assert_eq!(ks.binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.move_left.held);
        assert!(!input.move_right.held);
        assert!(!input.jump.held);
        assert!(!input.menu_start.held);
        assert!(!input.menu_options.held);
        assert!(!input.menu_quit.held);
        assert!(!input.pause.held);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.move_left.binding, KeyboardKey::KEY_A);
        assert_eq!(input.move_right.binding, KeyboardKey::KEY_D);
        assert_eq!(input.jump.binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.menu_start.binding, KeyboardKey::KEY_S);
        assert_eq!(input.menu_options.binding, KeyboardKey::KEY_O);
        assert_eq!(input.menu_quit.binding, KeyboardKey::KEY_E);
        assert_eq!(input.pause.binding, KeyboardKey::KEY_ESCAPE);
    }

    #[test]
    fn test_reset_edges_clears_only_edges() {
        let mut input = InputState::default();
        input.jump.held = true;
        input.jump.just_pressed = true;
        input.pause.just_released = true;
        input.reset_edges();
        assert!(input.jump.held);
        assert!(!input.jump.just_pressed);
        assert!(!input.pause.just_released);
    }
}
