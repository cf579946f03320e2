/// Scroll speed for side-scrolled scenery.
///
/// Entities with the SideScroll kind are moved leftward by this speed
/// (scaled by delta) while the player advances past the scroll threshold,
/// which fakes a camera following the player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SideScrollData {
    /// Scroll speed in world units per tick.
    pub hspeed: f32,
}
