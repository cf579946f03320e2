//! Jump and Run main entry point.
//!
//! A 2D platformer on an ad-hoc entity-component-system, using:
//! - **raylib** for windowing, textures, keyboard, and drawing
//! - a hand-rolled registry (`ecs`) with a fixed per-frame system order
//! - JSON level and asset descriptions (`level`)
//!
//! # Main Loop
//!
//! 1. Load config and the level/asset JSON
//! 2. Open the window, decode every image the assets reference, and fill
//!    the texture store plus the dimension catalog
//! 3. Build the registry from the level declaration
//! 4. Each frame: poll input, run the system pipeline, draw
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level ./assets/levels/level01.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use jumprun::frame::{run_frame, FrameParams};
use jumprun::level::assets::{load_asset_descriptions, AssetCatalog};
use jumprun::level::config::LevelConfig;
use jumprun::level::loader::load_level;
use jumprun::resources::gameconfig::GameConfig;
use jumprun::resources::gamestate::{GameStates, StateMachine};
use jumprun::resources::input::InputState;
use jumprun::resources::texturestore::TextureStore;
use jumprun::systems::input::update_input_state;
use jumprun::systems::render::render;

/// Nominal tick rate the delta multiplier is normalized against.
const NOMINAL_TICK_RATE: f32 = 60.0;

/// Jump and Run 2D
#[derive(Parser)]
#[command(version, about = "A small jump-and-run platformer")]
struct Cli {
    /// Level description to load.
    #[arg(long, value_name = "PATH", default_value = "./assets/levels/level01.json")]
    level: PathBuf,

    /// Asset descriptions referenced by the level.
    #[arg(long, value_name = "PATH", default_value = "./assets/assets.json")]
    assets: PathBuf,

    /// Window configuration INI.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults

    let level = LevelConfig::load(&cli.level).unwrap_or_else(|err| {
        error!("failed to load level {}: {err}", cli.level.display());
        std::process::exit(1);
    });
    let assets = load_asset_descriptions(&cli.assets).unwrap_or_else(|err| {
        error!("failed to load assets {}: {err}", cli.assets.display());
        std::process::exit(1);
    });

    // --------------- Raylib window & textures ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Jump and Run")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit; ESC is the pause key.
    rl.set_exit_key(None);

    let mut textures = TextureStore::new();
    let mut catalog = AssetCatalog::new();
    for asset in assets.values() {
        for path in asset.all_image_paths() {
            if textures.contains(&path) {
                continue;
            }
            let texture = rl
                .load_texture(&thread, &path)
                .unwrap_or_else(|err| panic!("failed to load texture {path}: {err}"));
            catalog.insert(&path, texture.width as f32, texture.height as f32);
            textures.insert(&path, texture);
        }
    }
    info!("{} textures loaded", textures.len());

    // --------------- Registry & per-level state ---------------
    let mut registry = load_level(&level, &assets, &catalog).unwrap_or_else(|err| {
        error!("failed to build level: {err}");
        std::process::exit(1);
    });
    info!("level loaded with {} entities", registry.len());

    let mut input = InputState::default();
    let mut state = StateMachine::new();

    // --------------- Main loop ---------------
    while !rl.window_should_close() && state.current() != GameStates::Quitting {
        // Frame-normalized delta: 1.0 when the loop runs at the nominal rate.
        let delta = rl.get_frame_time() * NOMINAL_TICK_RATE;

        input.reset_edges();
        update_input_state(&rl, &mut input);

        let mut params = FrameParams {
            delta,
            gravity: level.physics.gravity,
            input: &input,
            state: &mut state,
        };
        if let Err(err) = run_frame(&mut registry, &mut params) {
            // A registry error mid-frame means the level data lied about
            // its component sets; continuing would desync the simulation.
            panic!("frame aborted: {err}");
        }

        let current = state.current();
        let mut d = rl.begin_drawing(&thread);
        if let Err(err) = render(&registry, &mut d, &textures, current) {
            panic!("render aborted: {err}");
        }
        // The draw handle presents on drop; nothing runs concurrently with it.
    }
}
