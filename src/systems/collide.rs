//! Collide system: pairwise AABB detection and resolution.
//!
//! Entities are scanned in ascending id order; an entity only opens a pair
//! as the first member if it is Dynamic, and the inner scan only visits
//! Collide entities with a greater id, so each unordered pair is tested at
//! most once. Rectangles come from the transform position plus the render
//! image dimensions; a Collide entity without either record is a level
//! configuration bug and fails the frame immediately.
//!
//! Resolution policy: classification flags every velocity-consistent side,
//! but only the axis of minimum penetration is corrected (ties resolve
//! vertically, which keeps landings stable). The pushed entity's speed on
//! the resolved axis is zeroed, and any vertical resolve, landing or head
//! hit, clears the jumping flag.

use smallvec::SmallVec;

use crate::components::collision::{classify, CollisionDirections, CollisionOutcome, Rect, Velocity};
use crate::components::transform::TransformData;
use crate::ecs::entity::Entity;
use crate::ecs::kind::ComponentKind;
use crate::ecs::registry::Registry;
use crate::ecs::RegistryError;

/// Counters for one collide pass. The pair counter is what the dedup
/// guarantee is measured against: N mutually overlapping dynamic colliders
/// produce exactly N·(N−1)/2 tested pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollideStats {
    /// Candidate pairs examined (after the ordering/kind gates).
    pub pairs_tested: usize,
    /// Pairs whose rectangles actually overlapped.
    pub overlapping: usize,
    /// Entities pushed out by resolution.
    pub resolved: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Pick the axis to correct: minimum penetration among the flagged axes.
fn resolve_axis(outcome: &CollisionOutcome) -> Option<Axis> {
    let horizontal = outcome.directions.left || outcome.directions.right;
    let vertical = outcome.directions.top || outcome.directions.bottom;
    match (horizontal, vertical) {
        (true, true) => {
            if outcome.overlap.w < outcome.overlap.h {
                Some(Axis::Horizontal)
            } else {
                Some(Axis::Vertical)
            }
        }
        (true, false) => Some(Axis::Horizontal),
        (false, true) => Some(Axis::Vertical),
        (false, false) => None,
    }
}

/// Push one entity out along `axis` and kill its speed on that axis.
///
/// The push distance is the directional penetration past the struck edge
/// (e.g. own bottom minus the other's top), not the intersection extent.
/// The two agree on shallow overlaps, but a fast faller can pass its
/// bottom edge beyond a thin platform in one tick; the directional depth
/// still lands it exactly on top instead of inside.
fn apply_resolution(
    transform: &mut TransformData,
    directions: CollisionDirections,
    own: &Rect,
    other: &Rect,
    axis: Axis,
) {
    match axis {
        Axis::Horizontal => {
            if directions.right {
                transform.x -= own.right() - other.x;
            } else if directions.left {
                transform.x += other.right() - own.x;
            }
            transform.hspeed = 0.0;
        }
        Axis::Vertical => {
            if directions.bottom {
                transform.y -= own.bottom() - other.y;
            } else if directions.top {
                transform.y += other.bottom() - own.y;
            }
            transform.vspeed = 0.0;
            transform.jumping = false;
        }
    }
}

pub fn run(registry: &mut Registry) -> Result<CollideStats, RegistryError> {
    let mut stats = CollideStats::default();

    // Snapshot ids and kind flags up front; resolution mutates records
    // while we walk the pairs.
    let candidates: SmallVec<[(Entity, bool, bool); 32]> = registry
        .entities()
        .map(|(entity, presence)| {
            (
                entity,
                presence.has(ComponentKind::Dynamic),
                presence.has(ComponentKind::Collide),
            )
        })
        .collect();

    for (index, &(one, one_dynamic, one_collide)) in candidates.iter().enumerate() {
        if !one_dynamic {
            continue;
        }

        for &(two, two_dynamic, two_collide) in &candidates[index + 1..] {
            if !two_collide {
                continue;
            }
            stats.pairs_tested += 1;

            let rect_one = registry.entity_rect(one)?;
            let rect_two = registry.entity_rect(two)?;

            // Proximity pre-filter: pairs separated by more than the sum of
            // their extents on both axes cannot overlap.
            if (rect_one.x - rect_two.x).abs() > rect_one.w + rect_two.w
                && (rect_one.y - rect_two.y).abs() > rect_one.h + rect_two.h
            {
                continue;
            }

            let transform_one = *registry.transform(one)?;
            let transform_two = *registry.transform(two)?;

            let Some(outcome) = classify(
                &rect_one,
                &rect_two,
                Velocity { h: transform_one.hspeed, v: transform_one.vspeed },
                Velocity { h: transform_two.hspeed, v: transform_two.vspeed },
            ) else {
                continue;
            };
            stats.overlapping += 1;

            // Record the outcome on both members for inspection; the
            // resolution below consumes the outcome directly, never the
            // records.
            let mirrored = outcome.directions.mirrored();
            if one_collide {
                let record = registry.collision_mut(one)?;
                record.directions = outcome.directions;
                record.overlap = outcome.overlap;
                record.other = Some(two);
            }
            {
                let record = registry.collision_mut(two)?;
                record.directions = mirrored;
                record.overlap = outcome.overlap;
                record.other = Some(one);
            }

            let Some(axis) = resolve_axis(&outcome) else {
                continue;
            };

            if one_dynamic {
                apply_resolution(
                    registry.transform_mut(one)?,
                    outcome.directions,
                    &rect_one,
                    &rect_two,
                    axis,
                );
                stats.resolved += 1;
            }
            if two_dynamic {
                apply_resolution(registry.transform_mut(two)?, mirrored, &rect_two, &rect_one, axis);
                stats.resolved += 1;
            }
        }
    }

    Ok(stats)
}
