//! Renderer configuration resource.
//!
//! Settings loaded from an INI configuration file, with defaults for a safe
//! startup when the file or a value is missing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1200
//! height = 800
//! target_fps = 60
//! title = Raven
//!
//! [assets]
//! root = ./assets
//! scene = scene.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

const DEFAULT_WINDOW_WIDTH: u32 = 1200;
const DEFAULT_WINDOW_HEIGHT: u32 = 800;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Raven";
const DEFAULT_ASSET_ROOT: &str = "./assets";
const DEFAULT_SCENE: &str = "scene.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub title: String,
    /// Directory texture keys are resolved against.
    pub asset_root: PathBuf,
    /// Scene manifest, relative to `asset_root`.
    pub scene: PathBuf,
    pub config_path: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            scene: PathBuf::from(DEFAULT_SCENE),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), RenderError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| RenderError::Config(format!("failed to load {:?}: {}", self.config_path, e)))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [assets] section
        if let Some(root) = config.get("assets", "root") {
            self.asset_root = PathBuf::from(root);
        }
        if let Some(scene) = config.get("assets", "scene") {
            self.scene = PathBuf::from(scene);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, assets at {:?}",
            self.window_width, self.window_height, self.target_fps, self.asset_root
        );

        Ok(())
    }

    /// Save configuration to the INI file. Creates the file if needed.
    pub fn save_to_file(&self) -> Result<(), RenderError> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        config.set("assets", "root", Some(self.asset_root.display().to_string()));
        config.set("assets", "scene", Some(self.scene.display().to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| RenderError::Config(format!("failed to save {:?}: {}", self.config_path, e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Full path of the scene manifest.
    pub fn scene_path(&self) -> PathBuf {
        if self.scene.is_absolute() {
            self.scene.clone()
        } else {
            self.asset_root.join(&self.scene)
        }
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_keeps_defaults() {
        let mut cfg = RenderConfig::with_path("/definitely/not/here/config.ini");
        assert!(matches!(cfg.load_from_file(), Err(RenderError::Config(_))));
        assert_eq!(cfg.window_size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }

    #[test]
    fn test_partial_file_overrides_only_present_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[window]\nwidth = 640\n\n[assets]\nroot = data\n").unwrap();

        let mut cfg = RenderConfig::with_path(&path);
        cfg.load_from_file().unwrap();
        assert_eq!(cfg.window_width, 640);
        assert_eq!(cfg.window_height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(cfg.asset_root, PathBuf::from("data"));
        assert_eq!(cfg.scene_path(), PathBuf::from("data").join(DEFAULT_SCENE));
    }

    #[test]
    fn test_save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut cfg = RenderConfig::with_path(&path);
        cfg.window_width = 320;
        cfg.target_fps = 30;
        cfg.title = "Editor".to_string();
        cfg.save_to_file().unwrap();

        let mut loaded = RenderConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, cfg);
    }
}
