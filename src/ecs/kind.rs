//! Component kinds and the per-entity presence vector.
//!
//! Kinds are a closed enum with stable small-integer ordinals. The presence
//! vector is an ordered sequence indexed by ordinal; a slot holds the kind
//! itself when attached and nothing otherwise. Its length is fixed at entity
//! initialization and never changes afterwards.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

/// Tagged category of behavior/data an entity may possess.
///
/// Ordinal 0 is reserved and never attached; the enum starts at 1 so that a
/// kind's discriminant doubles as its slot index in the presence vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum ComponentKind {
    /// A thing in the world, as opposed to meta content like overlays.
    Real = 1,
    /// Driven by player input.
    ActiveControl = 2,
    /// Driven by game logic rather than input.
    PassiveControl = 3,
    /// Participates in collision testing.
    Collide = 4,
    /// Has a position and velocity.
    Transform = 5,
    /// Affected by gravity.
    Gravity = 6,
    /// May be moved/changed at runtime; static entities lack this.
    Dynamic = 7,
    /// Drawable.
    Render = 8,
    /// Has animation frame sequences.
    Animate = 9,
    /// Scenery scrolled against the player's motion.
    SideScroll = 10,
}

/// Number of slots in a presence vector (reserved ordinal 0 included).
pub const KIND_COUNT: usize = 11;

/// Capacity of the backing array. Leaves headroom so adding a kind does not
/// change the vector's representation.
pub const MAX_KINDS: usize = 16;

impl ComponentKind {
    pub const ALL: [ComponentKind; 10] = [
        ComponentKind::Real,
        ComponentKind::ActiveControl,
        ComponentKind::PassiveControl,
        ComponentKind::Collide,
        ComponentKind::Transform,
        ComponentKind::Gravity,
        ComponentKind::Dynamic,
        ComponentKind::Render,
        ComponentKind::Animate,
        ComponentKind::SideScroll,
    ];

    /// Stable slot index of this kind in a presence vector.
    pub fn ordinal(self) -> usize {
        self as u16 as usize
    }

    pub fn from_ordinal(ordinal: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.ordinal() == ordinal as usize)
    }

    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Real => "Real",
            ComponentKind::ActiveControl => "ActiveControl",
            ComponentKind::PassiveControl => "PassiveControl",
            ComponentKind::Collide => "Collide",
            ComponentKind::Transform => "Transform",
            ComponentKind::Gravity => "Gravity",
            ComponentKind::Dynamic => "Dynamic",
            ComponentKind::Render => "Render",
            ComponentKind::Animate => "Animate",
            ComponentKind::SideScroll => "SideScroll",
        }
    }
}

/// Per-entity record of which component kinds are attached.
///
/// The slot at a kind's ordinal holds `Some(kind)` when attached, `None`
/// (the sentinel) otherwise. Allocated once in [`PresenceVector::new`] with
/// length [`KIND_COUNT`]; never resized per entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceVector {
    slots: ArrayVec<Option<ComponentKind>, MAX_KINDS>,
}

impl PresenceVector {
    pub fn new() -> Self {
        let mut slots = ArrayVec::new();
        for _ in 0..KIND_COUNT {
            slots.push(None);
        }
        PresenceVector { slots }
    }

    pub fn attach(&mut self, kind: ComponentKind) {
        self.slots[kind.ordinal()] = Some(kind);
    }

    pub fn has(&self, kind: ComponentKind) -> bool {
        self.slots[kind.ordinal()].is_some()
    }

    pub fn has_all(&self, kinds: &[ComponentKind]) -> bool {
        kinds.iter().all(|k| self.has(*k))
    }

    /// Attached kinds in ordinal order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }
}

impl Default for PresenceVector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_stable() {
        assert_eq!(ComponentKind::Real.ordinal(), 1);
        assert_eq!(ComponentKind::ActiveControl.ordinal(), 2);
        assert_eq!(ComponentKind::PassiveControl.ordinal(), 3);
        assert_eq!(ComponentKind::Collide.ordinal(), 4);
        assert_eq!(ComponentKind::Transform.ordinal(), 5);
        assert_eq!(ComponentKind::Gravity.ordinal(), 6);
        assert_eq!(ComponentKind::Dynamic.ordinal(), 7);
        assert_eq!(ComponentKind::Render.ordinal(), 8);
        assert_eq!(ComponentKind::Animate.ordinal(), 9);
        assert_eq!(ComponentKind::SideScroll.ordinal(), 10);
    }

    #[test]
    fn test_from_ordinal_roundtrip() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_ordinal(kind.ordinal() as u16), Some(kind));
        }
        assert_eq!(ComponentKind::from_ordinal(0), None);
        assert_eq!(ComponentKind::from_ordinal(11), None);
    }

    #[test]
    fn test_presence_vector_starts_empty() {
        let pv = PresenceVector::new();
        for kind in ComponentKind::ALL {
            assert!(!pv.has(kind));
        }
        assert_eq!(pv.kinds().count(), 0);
    }

    #[test]
    fn test_presence_vector_attach_and_query() {
        let mut pv = PresenceVector::new();
        pv.attach(ComponentKind::Transform);
        pv.attach(ComponentKind::Render);
        assert!(pv.has(ComponentKind::Transform));
        assert!(pv.has(ComponentKind::Render));
        assert!(!pv.has(ComponentKind::Gravity));
        assert!(pv.has_all(&[ComponentKind::Transform, ComponentKind::Render]));
        assert!(!pv.has_all(&[ComponentKind::Transform, ComponentKind::Gravity]));
    }

    #[test]
    fn test_presence_vector_kinds_in_ordinal_order() {
        let mut pv = PresenceVector::new();
        pv.attach(ComponentKind::Render);
        pv.attach(ComponentKind::Real);
        pv.attach(ComponentKind::Transform);
        let kinds: Vec<_> = pv.kinds().collect();
        assert_eq!(
            kinds,
            vec![
                ComponentKind::Real,
                ComponentKind::Transform,
                ComponentKind::Render
            ]
        );
    }
}
