//! Raven scene viewer.
//!
//! Opens a raylib window, loads a scene manifest into a `bevy_ecs` world and
//! renders it every frame with the rendering core.
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib -- --scene assets/scene.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;

use ravenrender::rendering::RenderingSystem;
use ravenrender::resources::assets::AssetRegistry;
use ravenrender::resources::renderconfig::RenderConfig;
use ravenrender::resources::texturestore::ImageFileLoader;
use ravenrender::scene::SceneManifest;
use ravenrender::target::raylibtarget::RaylibTarget;

/// Raven 2D scene viewer
#[derive(Parser)]
#[command(version, about = "Renders a Raven scene manifest in a window.")]
struct Cli {
    /// Configuration file (INI).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Scene manifest to load instead of the one named in the config.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Directory texture keys are resolved against.
    #[arg(long, value_name = "DIR")]
    asset_root: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = RenderConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(root) = cli.asset_root {
        config.asset_root = root;
    }
    let scene_path = cli.scene.unwrap_or_else(|| config.scene_path());

    let mut world = World::new();
    world.insert_resource(AssetRegistry::with_loader(ImageFileLoader::new(
        config.asset_root.clone(),
    )));

    match SceneManifest::load(&scene_path) {
        Ok(scene) => {
            if let Err(e) = scene.apply(&mut world) {
                log::error!("Failed to apply scene {}: {}", scene_path.display(), e);
            }
        }
        Err(e) => log::error!("Failed to load scene {}: {}", scene_path.display(), e),
    }

    let target = RaylibTarget::open(&config);
    world.insert_resource(config);

    let mut rendering = RenderingSystem::new();
    rendering.initialize(&mut world, target);

    // --------------- Main loop ---------------
    loop {
        let Some(target) = rendering.target() else {
            break;
        };
        if target.window_should_close() {
            break;
        }
        let dt = target.frame_time();
        rendering.update(&mut world, dt);
    }
}
