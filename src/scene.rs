//! Scene manifests.
//!
//! A scene is a JSON document listing textures to preload, named animation
//! definitions, and entities with an optional transform and a renderer:
//!
//! ```json
//! {
//!   "textures": ["hero.png"],
//!   "animations": {
//!     "walk": { "texture": "hero.png", "frames": [...], "speed": 8.0, "looping": true }
//!   },
//!   "entities": [
//!     { "name": "Hero", "transform": { "pos": [320.0, 200.0] },
//!       "renderer": { "sprites": { "body": { "tex_key": "", "animation": { ... } } } } }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use bevy_ecs::prelude::*;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::components::name::EntityName;
use crate::components::renderer::Renderer;
use crate::components::transform::Transform;
use crate::error::RenderError;
use crate::resources::animationstore::AnimationDefinition;
use crate::resources::assets::AssetRegistry;
use crate::resources::entitynamer::EntityNamer;
use crate::serialize::Serializable;

const DEFAULT_ENTITY_NAME: &str = "Default Entity";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneEntity {
    /// Used as is when present; otherwise a numbered default name is issued.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub transform: Option<Transform>,
    #[serde(default)]
    pub renderer: Renderer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneManifest {
    #[serde(default)]
    pub textures: Vec<String>,
    #[serde(default)]
    pub animations: BTreeMap<String, AnimationDefinition>,
    #[serde(default)]
    pub entities: Vec<SceneEntity>,
}

impl SceneManifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        <Self as Serializable>::deserialize(&text)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let text = Serializable::serialize(self)?;
        std::fs::write(path.as_ref(), text)?;
        Ok(())
    }

    /// Register the scene's assets and spawn its entities into `world`.
    ///
    /// Textures that fail to load are logged and skipped. Animations without
    /// frames are rejected before anything is registered or spawned.
    pub fn apply(&self, world: &mut World) -> Result<Vec<Entity>, RenderError> {
        if let Some((name, _)) = self.animations.iter().find(|(_, def)| def.frames.is_empty()) {
            return Err(RenderError::Parse(format!("animation \"{name}\" has no frames")));
        }

        {
            let mut assets = world.get_resource_or_insert_with(AssetRegistry::default);
            for key in &self.textures {
                if let Err(e) = assets.register_texture(key) {
                    warn!("Scene texture skipped: {}", e);
                }
            }
            for (name, definition) in &self.animations {
                assets.register_animation(name, definition.clone());
            }
        }

        let mut spawned = Vec::with_capacity(self.entities.len());
        for entity in &self.entities {
            let name = match &entity.name {
                Some(name) => name.clone(),
                None => world
                    .get_resource_or_insert_with(EntityNamer::default)
                    .next_name(DEFAULT_ENTITY_NAME),
            };
            let mut e = world.spawn((EntityName(name), entity.renderer.clone()));
            if let Some(transform) = entity.transform {
                e.insert(transform);
            }
            spawned.push(e.id());
        }

        info!(
            "Scene applied: {} textures, {} animations, {} entities",
            self.textures.len(),
            self.animations.len(),
            spawned.len()
        );
        Ok(spawned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::texturestore::{TextureAsset, TextureLoader};

    struct BlankLoader;

    impl TextureLoader for BlankLoader {
        fn load(&self, key: &str) -> Result<TextureAsset, RenderError> {
            if key == "lost.png" {
                return Err(RenderError::TextureLoad {
                    key: key.to_string(),
                    reason: "missing".to_string(),
                });
            }
            Ok(TextureAsset::solid(key, 8, 8, [0; 4]))
        }
    }

    const SCENE: &str = r#"{
        "textures": ["bg.png", "lost.png"],
        "animations": {
            "walk": {
                "texture": "hero.png",
                "frames": [
                    { "x": 0.0, "y": 0.0, "width": 16.0, "height": 16.0 },
                    { "x": 16.0, "y": 0.0, "width": 16.0, "height": 16.0 }
                ],
                "speed": 8.0,
                "looping": true
            }
        },
        "entities": [
            {
                "name": "Hero",
                "transform": { "pos": [320.0, 200.0] },
                "renderer": {
                    "sprites": {
                        "body": { "tex_key": "", "animation": { "animation_key": "walk", "frame_index": 0, "progress": 0.0 } }
                    }
                }
            },
            { "renderer": { "texts": { "title": { "content": "Raven", "font_size": 20.0 } } } },
            { }
        ]
    }"#;

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(AssetRegistry::with_loader(BlankLoader));
        world
    }

    #[test]
    fn test_apply_registers_assets_and_spawns_entities() {
        let mut world = world();
        let scene = <SceneManifest as Serializable>::deserialize(SCENE).unwrap();
        let spawned = scene.apply(&mut world).unwrap();
        assert_eq!(spawned.len(), 3);

        let assets = world.resource::<AssetRegistry>();
        assert!(assets.textures.contains("bg.png"));
        assert!(assets.textures.contains("hero.png"));
        assert!(!assets.textures.contains("lost.png"));
        assert!(assets.animations.contains("walk"));

        assert_eq!(world.get::<EntityName>(spawned[0]).unwrap().as_str(), "Hero");
        assert_eq!(world.get::<Transform>(spawned[0]).unwrap().pos.x, 320.0);
        assert_eq!(world.get::<EntityName>(spawned[1]).unwrap().as_str(), "Default Entity 0");
        assert_eq!(world.get::<EntityName>(spawned[2]).unwrap().as_str(), "Default Entity 1");
        assert!(world.get::<Transform>(spawned[1]).is_none());
    }

    #[test]
    fn test_animation_without_frames_is_rejected() {
        let mut world = world();
        let mut scene = SceneManifest::default();
        scene
            .animations
            .insert("empty".to_string(), AnimationDefinition::new("a.png", Vec::new(), 1.0, true));
        scene.entities.push(SceneEntity::default());

        let err = scene.apply(&mut world).unwrap_err();
        assert!(matches!(err, RenderError::Parse(_)));
        assert!(world.resource::<AssetRegistry>().animations.is_empty());
        assert_eq!(world.query::<&EntityName>().iter(&world).count(), 0);
    }

    #[test]
    fn test_save_and_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let scene = <SceneManifest as Serializable>::deserialize(SCENE).unwrap();
        scene.save(&path).unwrap();

        let loaded = SceneManifest::load(&path).unwrap();
        assert_eq!(loaded.textures, scene.textures);
        assert_eq!(loaded.animations, scene.animations);
        assert_eq!(loaded.entities.len(), 3);

        assert!(matches!(
            SceneManifest::load(dir.path().join("absent.json")),
            Err(RenderError::Io(_))
        ));
    }
}
