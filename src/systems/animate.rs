//! Animate system: animation selection and the tick-based frame clock.
//!
//! Selection first, advancement second:
//!
//! 1. Controlled entities pick "Jump" while jumping, "Walk" while moving,
//!    "Idle" otherwise. Non-controlled entities (scenery, NPCs) stay on the
//!    "Idle" fallback.
//! 2. When the selected name differs from last frame's, the animation's
//!    clock resets and the displayed image snaps to frame 0. Otherwise the
//!    clock ticks once and the frame advances cyclically every `duration`
//!    ticks. Sequences of one frame or less never advance.
//!
//! The clock counts system invocations, not wall-clock time, so playback
//! speed follows the tick rate of the outer loop.

use crate::ecs::kind::ComponentKind;
use crate::ecs::registry::Registry;
use crate::ecs::RegistryError;

/// Animation names the selection rule can produce.
pub const ANIM_IDLE: &str = "Idle";
pub const ANIM_WALK: &str = "Walk";
pub const ANIM_JUMP: &str = "Jump";

pub fn run(registry: &mut Registry) -> Result<(), RegistryError> {
    for entity in registry.ids_with(&[ComponentKind::Animate, ComponentKind::Render]) {
        let controlled = registry.has(entity, ComponentKind::ActiveControl)
            && registry.has(entity, ComponentKind::Transform);

        let selected = if controlled {
            let transform = registry.transform(entity)?;
            if transform.jumping {
                ANIM_JUMP
            } else if transform.not_moving {
                ANIM_IDLE
            } else {
                ANIM_WALK
            }
        } else {
            ANIM_IDLE
        };

        let (animate, render) = registry.animate_and_render_mut(entity)?;

        // An entity without the selected animation is a normal no-op, not
        // an error (text entities share the Animate kind in some levels).
        let Some(core) = animate.animations.get_mut(selected) else {
            continue;
        };

        if animate.last_animation != selected {
            core.reset();
            if let Some(frame) = core.frames.first() {
                render.tex_key = frame.tex_key.clone();
                render.path = frame.path.clone();
            }
            animate.last_animation = selected.to_string();
            continue;
        }

        core.frame_counter = core.frame_counter.wrapping_add(1);
        if core.frames.len() > 1 && core.frame_counter % core.duration == 0 {
            core.current_frame = (core.current_frame + 1) % core.frames.len();
            let frame = &core.frames[core.current_frame];
            render.tex_key = frame.tex_key.clone();
            render.path = frame.path.clone();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animate::{AnimationCore, AnimationFrame};
    use crate::ecs::Entity;

    fn frames(names: &[&str]) -> Vec<AnimationFrame> {
        names.iter().map(|n| AnimationFrame::new(*n)).collect()
    }

    fn make_animated_player(registry: &mut Registry, duration: u32) -> Entity {
        let entity = Entity(1);
        registry.init_entity(entity);
        registry.attach(entity, ComponentKind::ActiveControl).unwrap();
        registry.attach(entity, ComponentKind::Transform).unwrap();
        registry.attach(entity, ComponentKind::Render).unwrap();
        registry.attach(entity, ComponentKind::Animate).unwrap();
        {
            let animate = registry.animate_mut(entity).unwrap();
            animate.animations.insert(
                ANIM_IDLE.to_string(),
                AnimationCore::new(duration, frames(&["idle0.png", "idle1.png"])),
            );
            animate.animations.insert(
                ANIM_WALK.to_string(),
                AnimationCore::new(duration, frames(&["walk0.png", "walk1.png", "walk2.png"])),
            );
            animate.animations.insert(
                ANIM_JUMP.to_string(),
                AnimationCore::new(duration, frames(&["jump0.png"])),
            );
        }
        registry.transform_mut(entity).unwrap().not_moving = true;
        entity
    }

    #[test]
    fn test_switch_resets_clock_and_snaps_to_first_frame() {
        let mut registry = Registry::new();
        let entity = make_animated_player(&mut registry, 4);

        // Settle on Idle and advance its clock a bit.
        for _ in 0..3 {
            run(&mut registry).unwrap();
        }
        {
            let animate = registry.animate(entity).unwrap();
            assert_eq!(animate.last_animation, ANIM_IDLE);
            assert!(animate.animations[ANIM_IDLE].frame_counter > 0);
        }

        // Start walking: selection switches, clock resets, frame snaps.
        registry.transform_mut(entity).unwrap().not_moving = false;
        run(&mut registry).unwrap();

        let animate = registry.animate(entity).unwrap();
        assert_eq!(animate.last_animation, ANIM_WALK);
        let core = &animate.animations[ANIM_WALK];
        assert_eq!(core.frame_counter, 0);
        assert_eq!(core.current_frame, 0);
        assert_eq!(registry.render(entity).unwrap().tex_key, "walk0.png");
    }

    #[test]
    fn test_frames_advance_cyclically_every_duration_ticks() {
        let mut registry = Registry::new();
        let entity = make_animated_player(&mut registry, 3);
        registry.transform_mut(entity).unwrap().not_moving = false;

        // First run switches to Walk (frame 0). Each subsequent run ticks
        // the clock; the frame advances when the counter hits a multiple
        // of the duration.
        run(&mut registry).unwrap();
        for expected in ["walk1.png", "walk2.png", "walk0.png"] {
            for _ in 0..3 {
                run(&mut registry).unwrap();
            }
            assert_eq!(registry.render(entity).unwrap().tex_key, expected);
        }
    }

    #[test]
    fn test_single_frame_animation_is_pinned() {
        let mut registry = Registry::new();
        let entity = make_animated_player(&mut registry, 2);
        {
            let transform = registry.transform_mut(entity).unwrap();
            transform.jumping = true;
        }

        run(&mut registry).unwrap();
        assert_eq!(registry.render(entity).unwrap().tex_key, "jump0.png");

        for _ in 0..10 {
            run(&mut registry).unwrap();
        }
        let animate = registry.animate(entity).unwrap();
        assert_eq!(animate.animations[ANIM_JUMP].current_frame, 0);
        assert_eq!(registry.render(entity).unwrap().tex_key, "jump0.png");
    }

    #[test]
    fn test_jumping_wins_over_walking() {
        let mut registry = Registry::new();
        let entity = make_animated_player(&mut registry, 2);
        {
            let transform = registry.transform_mut(entity).unwrap();
            transform.not_moving = false;
            transform.jumping = true;
        }
        run(&mut registry).unwrap();
        assert_eq!(registry.animate(entity).unwrap().last_animation, ANIM_JUMP);
    }

    #[test]
    fn test_uncontrolled_entity_falls_back_to_idle() {
        let mut registry = Registry::new();
        let entity = Entity(3);
        registry.init_entity(entity);
        registry.attach(entity, ComponentKind::Render).unwrap();
        registry.attach(entity, ComponentKind::Animate).unwrap();
        registry
            .animate_mut(entity)
            .unwrap()
            .animations
            .insert(ANIM_IDLE.to_string(), AnimationCore::new(2, frames(&["a.png", "b.png"])));

        run(&mut registry).unwrap();
        assert_eq!(registry.animate(entity).unwrap().last_animation, ANIM_IDLE);
        assert_eq!(registry.render(entity).unwrap().tex_key, "a.png");
    }

    #[test]
    fn test_missing_animation_is_a_soft_no_op() {
        let mut registry = Registry::new();
        let entity = Entity(4);
        registry.init_entity(entity);
        registry.attach(entity, ComponentKind::Render).unwrap();
        registry.attach(entity, ComponentKind::Animate).unwrap();
        // No animations registered at all.
        run(&mut registry).unwrap();
        assert_eq!(registry.animate(entity).unwrap().last_animation, "");
    }
}
