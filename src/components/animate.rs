//! Animation state for animate-capable entities.
//!
//! Each entity owns a map from animation name ("Idle", "Walk", "Jump") to an
//! [`AnimationCore`] holding that animation's frame clock and ordered frame
//! sequence, plus the name selected last frame so the animate system can
//! detect a switch and reset the clock.

use rustc_hash::FxHashMap;

/// One ordered animation frame: the image path doubles as the texture key
/// in the [`TextureStore`](crate::resources::texturestore::TextureStore).
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    pub path: String,
    pub tex_key: String,
}

impl AnimationFrame {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        AnimationFrame {
            tex_key: path.clone(),
            path,
        }
    }
}

/// Frame clock and frame sequence of a single named animation.
///
/// The clock ticks once per animate-system invocation, not per wall-clock
/// second; the displayed frame advances cyclically every `duration` ticks.
/// Sequences of one frame (or none) are pinned to frame 0 and never advance.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationCore {
    /// Ticks since this animation was last selected.
    pub frame_counter: u32,
    /// Ticks each frame stays on screen. Never zero.
    pub duration: u32,
    /// Index of the currently displayed frame.
    pub current_frame: usize,
    pub frames: Vec<AnimationFrame>,
}

impl AnimationCore {
    pub fn new(duration: u32, frames: Vec<AnimationFrame>) -> Self {
        AnimationCore {
            frame_counter: 0,
            // A zero duration would stall the modulo clock.
            duration: duration.max(1),
            current_frame: 0,
            frames,
        }
    }

    pub fn reset(&mut self) {
        self.frame_counter = 0;
        self.current_frame = 0;
    }
}

/// Animation state record for one entity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimateData {
    pub animations: FxHashMap<String, AnimationCore>,
    /// Name selected on the previous frame; empty before the first frame.
    pub last_animation: String,
}

impl AnimateData {
    pub fn with_animation(mut self, name: impl Into<String>, core: AnimationCore) -> Self {
        self.animations.insert(name.into(), core);
        self
    }
}
