//! Render system: the drawing boundary.
//!
//! Thin by design: it clears the frame, draws every Render entity at its
//! transform-derived rectangle, draws the overlay for the current game
//! state, and lets the draw handle present on drop. It runs synchronously
//! at the end of the frame on the main thread, after animate has settled
//! the current texture keys, so it always observes the fully-updated
//! component data for the frame.

use log::warn;
use raylib::prelude::*;

use crate::ecs::kind::ComponentKind;
use crate::ecs::registry::Registry;
use crate::ecs::RegistryError;
use crate::resources::gamestate::GameStates;
use crate::resources::texturestore::TextureStore;

fn draw_centered(d: &mut RaylibDrawHandle, text: &str, y: i32, size: i32, color: Color) {
    let x = d.get_screen_width() / 2 - measure_text(text, size) / 2;
    d.draw_text(text, x, y, size, color);
}

fn draw_overlay(d: &mut RaylibDrawHandle, state: GameStates) {
    let mid = d.get_screen_height() / 2;
    match state {
        GameStates::WelcomeScreen => {
            draw_centered(d, "JUMP AND RUN", mid - 80, 48, Color::YELLOW);
            draw_centered(d, "S - START    O - OPTIONS    E - EXIT", mid + 20, 24, Color::WHITE);
        }
        GameStates::OptionsMenu => {
            draw_centered(d, "OPTIONS", mid - 80, 48, Color::YELLOW);
            draw_centered(d, "ESC - BACK    E - EXIT", mid + 20, 24, Color::WHITE);
        }
        GameStates::Paused => {
            draw_centered(d, "GAME PAUSED", mid - 16, 32, Color::RED);
        }
        GameStates::GameOver => {
            draw_centered(d, "GAME OVER", mid - 16, 48, Color::RED);
            draw_centered(d, "S - BACK TO MENU", mid + 40, 24, Color::WHITE);
        }
        GameStates::Playing | GameStates::Quitting => {}
    }
}

pub fn render(
    registry: &Registry,
    d: &mut RaylibDrawHandle,
    textures: &TextureStore,
    state: GameStates,
) -> Result<(), RegistryError> {
    d.clear_background(Color::BLACK);

    for (entity, presence) in registry.entities() {
        if !presence.has(ComponentKind::Render) {
            continue;
        }
        let render = registry.render(entity)?;
        let transform = registry.transform(entity)?;

        if let Some(text) = &render.text {
            d.draw_text(
                &text.content,
                transform.x as i32,
                transform.y as i32,
                text.font_size,
                Color::RED,
            );
            continue;
        }

        let Some(texture) = textures.get(&render.tex_key) else {
            // The loader guarantees every image entity a texture; reaching
            // this means the store and the records went out of sync.
            warn!("no texture {:?} for entity {entity}", render.tex_key);
            continue;
        };

        // A negative source width mirrors the sprite horizontally.
        let src_width = if transform.flip { -render.width } else { render.width };
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: src_width,
            height: render.height,
        };
        let dest = Rectangle {
            x: transform.x,
            y: transform.y,
            width: render.width,
            height: render.height,
        };
        d.draw_texture_pro(texture, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    draw_overlay(d, state);
    Ok(())
}
