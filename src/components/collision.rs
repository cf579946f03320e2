//! AABB geometry and collision classification.
//!
//! Detection and classification are pure functions over rectangles and
//! velocities; the collide system consumes the returned
//! [`CollisionOutcome`] immediately and never re-reads it on a later pair.
//! The per-entity [`CollisionData`] record only mirrors the last outcome
//! for inspection and debug overlays; it is transient and stale between
//! collisions.

use crate::ecs::entity::Entity;

/// Axis-aligned rectangle in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict AABB overlap test. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Intersection rectangle, present only on a real overlap.
    pub fn overlap(&self, other: &Rect) -> Option<Rect> {
        if !self.overlaps(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Rect::new(x, y, right - x, bottom - y))
    }
}

/// Which sides of entity one were hit, from entity one's point of view.
///
/// "right" means entity one's right edge struck entity two's left edge, and
/// so on. Flags are velocity-gated: a side is only flagged when the pair's
/// relative motion is consistent with that side being the impact side,
/// which is the tie-break for corner overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionDirections {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl CollisionDirections {
    /// The same impact seen from the other entity's point of view.
    pub fn mirrored(self) -> Self {
        CollisionDirections {
            left: self.right,
            right: self.left,
            top: self.bottom,
            bottom: self.top,
        }
    }
}

/// Immutable result of one pair test, consumed immediately by resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionOutcome {
    pub directions: CollisionDirections,
    pub overlap: Rect,
}

/// Horizontal/vertical velocity of one entity, units per tick.
/// `v` is positive upward, matching the transform record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub h: f32,
    pub v: f32,
}

/// Classify the overlap of `rect_one` against `rect_two`, if any.
///
/// Each directional flag pairs the geometric edge condition with a velocity
/// gate: entity one's right edge can only be the impact side if entity one
/// moves right or entity two moves left, etc. Vertical gates remember that
/// `v` is positive upward while y grows downward: moving down is `v < 0`.
pub fn classify(
    rect_one: &Rect,
    rect_two: &Rect,
    vel_one: Velocity,
    vel_two: Velocity,
) -> Option<CollisionOutcome> {
    let overlap = rect_one.overlap(rect_two)?;

    let directions = CollisionDirections {
        // Entity one comes from the left and hits entity two's left side.
        right: rect_one.right() > rect_two.x && (vel_one.h > 0.0 || vel_two.h < 0.0),
        // Entity one comes from the right and hits entity two's right side.
        left: rect_one.x < rect_two.right() && (vel_one.h < 0.0 || vel_two.h > 0.0),
        // Entity one's top edge hits entity two's bottom edge (head hit).
        top: rect_one.y < rect_two.bottom() && (vel_one.v > 0.0 || vel_two.v < 0.0),
        // Entity one's bottom edge hits entity two's top edge (landing).
        bottom: rect_one.bottom() > rect_two.y && (vel_one.v < 0.0 || vel_two.v > 0.0),
    };

    Some(CollisionOutcome { directions, overlap })
}

/// Transient per-entity record of the last collision this entity was part
/// of. Recomputed by the collide system every frame it detects an overlap;
/// meaningless otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionData {
    pub directions: CollisionDirections,
    pub overlap: Rect,
    pub other: Option<Entity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_test_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlap_rect_extents() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(8.0, 4.0, 10.0, 10.0);
        let o = a.overlap(&b).unwrap();
        assert_eq!(o, Rect::new(8.0, 4.0, 2.0, 6.0));
    }

    #[test]
    fn test_classify_none_without_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 0.0, 10.0, 10.0);
        assert!(classify(&a, &b, Velocity { h: 5.0, v: 0.0 }, Velocity::default()).is_none());
    }

    #[test]
    fn test_classify_moving_right_flags_right_only() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(8.0, 0.0, 10.0, 10.0);
        let out = classify(&a, &b, Velocity { h: 5.0, v: 0.0 }, Velocity::default()).unwrap();
        assert!(out.directions.right);
        assert!(!out.directions.left);
        assert!(!out.directions.top);
        assert!(!out.directions.bottom);
    }

    #[test]
    fn test_classify_other_moving_left_also_flags_right() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(8.0, 0.0, 10.0, 10.0);
        let out = classify(&a, &b, Velocity::default(), Velocity { h: -3.0, v: 0.0 }).unwrap();
        assert!(out.directions.right);
        assert!(!out.directions.left);
    }

    #[test]
    fn test_classify_falling_flags_bottom() {
        // Entity one sits above entity two, moving down (v < 0).
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 8.0, 50.0, 10.0);
        let out = classify(&a, &b, Velocity { h: 0.0, v: -2.0 }, Velocity::default()).unwrap();
        assert!(out.directions.bottom);
        assert!(!out.directions.top);
        assert_eq!(out.overlap.h, 2.0);
    }

    #[test]
    fn test_classify_rising_flags_top() {
        // Entity one underneath, moving up into entity two.
        let a = Rect::new(0.0, 8.0, 10.0, 10.0);
        let b = Rect::new(0.0, 0.0, 50.0, 10.0);
        let out = classify(&a, &b, Velocity { h: 0.0, v: 2.0 }, Velocity::default()).unwrap();
        assert!(out.directions.top);
        assert!(!out.directions.bottom);
    }

    #[test]
    fn test_classify_at_rest_flags_nothing() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(8.0, 0.0, 10.0, 10.0);
        let out = classify(&a, &b, Velocity::default(), Velocity::default()).unwrap();
        assert_eq!(out.directions, CollisionDirections::default());
    }

    #[test]
    fn test_mirrored_swaps_sides() {
        let d = CollisionDirections {
            right: true,
            bottom: true,
            ..Default::default()
        };
        let m = d.mirrored();
        assert!(m.left);
        assert!(m.top);
        assert!(!m.right);
        assert!(!m.bottom);
    }
}
