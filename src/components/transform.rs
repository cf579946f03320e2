/// Position, velocity, facing, and jump state for one entity.
///
/// Coordinates are screen-space: x grows rightward, y grows downward.
/// `vspeed` is positive upward: the transform system integrates
/// `y -= vspeed`, and gravity decrements `vspeed` each tick.
///
/// Several systems write this record in a fixed order within a frame
/// (control, gravity, transform, collide); consumers must respect that
/// order. The transform system alone turns velocity into position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformData {
    pub x: f32,
    pub y: f32,
    /// Position before the last integration step.
    pub prev_x: f32,
    pub prev_y: f32,
    /// Horizontal speed in world units per tick.
    pub hspeed: f32,
    /// Vertical speed in world units per tick, positive upward.
    pub vspeed: f32,
    /// Facing: true when the sprite is drawn mirrored (looking left).
    pub flip: bool,
    pub jumping: bool,
    pub not_moving: bool,
}

impl TransformData {
    pub fn at(x: f32, y: f32) -> Self {
        TransformData {
            x,
            y,
            prev_x: x,
            prev_y: y,
            ..Default::default()
        }
    }

    /// True when either velocity component is non-zero.
    pub fn is_moving(&self) -> bool {
        self.hspeed != 0.0 || self.vspeed != 0.0
    }
}
