//! Registry population from level and asset configuration.
//!
//! Three passes, all pure given an [`AssetCatalog`] of decoded dimensions:
//!
//! 1. [`build_registry`] – initialize every declared entity and attach its
//!    component set (zeroed records).
//! 2. [`apply_assets`] – fill render records (image path, texture key,
//!    dimensions, text) and animate records (frame sequences, clocks).
//! 3. [`set_initial_transforms`] – place entities, laying ranges out
//!    side by side along the spread axis.
//!
//! [`load_level`] chains the three. Any error aborts the load; the game
//! never starts on a partially populated registry.

use log::warn;

use crate::components::animate::{AnimationCore, AnimationFrame};
use crate::components::render::RenderData;
use crate::components::transform::TransformData;
use crate::ecs::kind::ComponentKind;
use crate::ecs::registry::Registry;
use crate::level::assets::{AssetCatalog, AssetDescriptions, AssetSpec};
use crate::level::config::{LevelConfig, SpreadAxis};
use crate::level::error::LevelError;
use crate::systems::sidescroll::PLAYER_ENTITY;

/// Initialize all declared entities and attach their component sets.
pub fn build_registry(level: &LevelConfig) -> Result<Registry, LevelError> {
    let mut registry = Registry::new();

    for placed in level.ordered_entities()? {
        registry.init_entity(placed.entity);
        for kind in &placed.spec.components {
            registry.attach(placed.entity, *kind)?;
        }
        if registry.has(placed.entity, ComponentKind::SideScroll) {
            registry.sidescroll_mut(placed.entity)?.hspeed = placed.spec.scroll_speed;
        }
    }

    let has_controlled = registry
        .entities()
        .any(|(_, presence)| presence.has(ComponentKind::ActiveControl));
    if has_controlled && !registry.has(PLAYER_ENTITY, ComponentKind::ActiveControl) {
        // Side scrolling keys off the player's well-known id.
        warn!("no ActiveControl entity at id {PLAYER_ENTITY}; side scrolling will not follow the player");
    }

    Ok(registry)
}

fn render_data_for(
    asset: &AssetSpec,
    reference: &str,
    catalog: &AssetCatalog,
) -> Result<RenderData, LevelError> {
    if asset.is_text() {
        return Ok(RenderData::label(asset.text.clone(), asset.font_size));
    }

    let path = if asset.animated_by_default {
        let animation = asset.initial_animation().ok_or_else(|| {
            LevelError::MalformedLevelSpec(format!("asset {reference:?} is animated but declares no animations"))
        })?;
        asset.frame_paths(animation).into_iter().next().ok_or_else(|| {
            LevelError::MalformedLevelSpec(format!("asset {reference:?} has an empty {animation:?} animation"))
        })?
    } else {
        asset.image_path().ok_or_else(|| {
            LevelError::MalformedLevelSpec(format!("asset {reference:?} declares neither image nor text"))
        })?
    };

    let (width, height) = catalog.size_of(&path).ok_or_else(|| {
        LevelError::MalformedLevelSpec(format!("no decoded dimensions for image {path:?}"))
    })?;
    Ok(RenderData::image(path, width, height))
}

/// Fill render and animate records from the asset descriptions.
pub fn apply_assets(
    registry: &mut Registry,
    level: &LevelConfig,
    assets: &AssetDescriptions,
    catalog: &AssetCatalog,
) -> Result<(), LevelError> {
    for placed in level.ordered_entities()? {
        let entity = placed.entity;
        let reference = placed.spec.reference.as_str();
        let asset = assets.get(reference).ok_or_else(|| {
            LevelError::MalformedLevelSpec(format!("entity {entity} references unknown asset {reference:?}"))
        })?;

        if registry.has(entity, ComponentKind::Render) {
            let data = render_data_for(asset, reference, catalog)?;

            // A collide entity needs a real rectangle; text has none and a
            // zero-sized image would collide with everything it touches.
            if registry.has(entity, ComponentKind::Collide)
                && (data.is_text() || data.width <= 0.0 || data.height <= 0.0)
            {
                return Err(LevelError::MalformedLevelSpec(format!(
                    "collide entity {entity} has no usable image dimensions (asset {reference:?})"
                )));
            }

            *registry.render_mut(entity)? = data;
        }

        if registry.has(entity, ComponentKind::Animate) && !asset.animations.is_empty() {
            let animate = registry.animate_mut(entity)?;
            let mut names: Vec<&String> = asset.animations.keys().collect();
            names.sort();
            for name in names {
                let frames: Vec<AnimationFrame> = asset
                    .frame_paths(name)
                    .into_iter()
                    .map(AnimationFrame::new)
                    .collect();
                animate
                    .animations
                    .insert(name.clone(), AnimationCore::new(asset.default_animation_duration, frames));
            }
        }
    }
    Ok(())
}

/// Place every transform entity at its configured position.
///
/// Range members with a spread axis are offset from the range start by the
/// member index times the image extent on that axis, so a `"2-12"` ground
/// range tiles into a contiguous platform.
pub fn set_initial_transforms(registry: &mut Registry, level: &LevelConfig) -> Result<(), LevelError> {
    for placed in level.ordered_entities()? {
        let entity = placed.entity;
        if !registry.has(entity, ComponentKind::Transform) {
            continue;
        }

        let index = (entity.id() - placed.range.lo) as f32;
        let (x, y) = match placed.spec.spread_along {
            Some(SpreadAxis::X) => {
                let width = registry.render(entity)?.width;
                (placed.spec.initial_pos_x + width * index, placed.spec.initial_pos_y)
            }
            Some(SpreadAxis::Y) => {
                let height = registry.render(entity)?.height;
                (placed.spec.initial_pos_x, placed.spec.initial_pos_y + height * index)
            }
            None => (placed.spec.initial_pos_x, placed.spec.initial_pos_y),
        };

        *registry.transform_mut(entity)? = TransformData::at(x, y);
    }
    Ok(())
}

/// Build, populate, and place a fresh registry for one level.
pub fn load_level(
    level: &LevelConfig,
    assets: &AssetDescriptions,
    catalog: &AssetCatalog,
) -> Result<Registry, LevelError> {
    let mut registry = build_registry(level)?;
    apply_assets(&mut registry, level, assets, catalog)?;
    set_initial_transforms(&mut registry, level)?;
    Ok(registry)
}
