//! The asset registry resource.
//!
//! [`AssetRegistry`] pairs the [`TextureStore`] and [`AnimationStore`] so
//! that registering an animation also registers the texture it draws from.
//! It also remembers keys that failed to load, so that on-demand
//! registration during a frame does not hit the loader again every frame.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::warn;
use rustc_hash::FxHashSet;

use crate::error::RenderError;
use crate::resources::animationstore::{AnimationDefinition, AnimationStore};
use crate::resources::texturestore::{TextureAsset, TextureLoader, TextureStore};

#[derive(Resource, Default)]
pub struct AssetRegistry {
    pub textures: TextureStore,
    pub animations: AnimationStore,
    failed: FxHashSet<String>,
}

impl AssetRegistry {
    pub fn with_loader(loader: impl TextureLoader + 'static) -> Self {
        Self {
            textures: TextureStore::new(loader),
            animations: AnimationStore::new(),
            failed: FxHashSet::default(),
        }
    }

    /// Load a texture if it is not registered yet. See [`TextureStore::register`].
    ///
    /// An explicit call always consults the loader for an absent key, even
    /// one that failed before.
    pub fn register_texture(&mut self, key: &str) -> Result<(), RenderError> {
        let result = self.textures.register(key);
        if result.is_ok() {
            self.failed.remove(key);
        } else {
            self.failed.insert(key.to_string());
        }
        result
    }

    /// Current texture for `key`, registering it first if needed.
    ///
    /// Empty keys resolve to `None`. A key whose last load failed is not
    /// retried here; call [`register_texture`](Self::register_texture) for that.
    pub fn texture_on_demand(&mut self, key: &str) -> Option<&Arc<TextureAsset>> {
        if key.is_empty() {
            return None;
        }
        if !self.textures.contains(key) && !self.failed.contains(key) {
            let _ = self.register_texture(key);
        }
        self.textures.get(key)
    }

    /// True if the last attempt to load `key` failed.
    pub fn has_failed(&self, key: &str) -> bool {
        self.failed.contains(key)
    }

    /// Store or overwrite an animation and register its texture.
    ///
    /// A texture that fails to load is logged; the animation stays
    /// registered and its sprites draw without a texture.
    ///
    /// # Panics
    ///
    /// Panics if `definition` has no frames. There is nothing to play and
    /// every later frame lookup would be out of range.
    pub fn register_animation(&mut self, name: &str, definition: AnimationDefinition) {
        assert!(
            !definition.frames.is_empty(),
            "attempt to register animation \"{name}\" without frames"
        );
        let texture = definition.texture.clone();
        self.animations.insert(name, definition);
        if let Err(e) = self.register_texture(&texture) {
            warn!("Animation \"{}\" registered without its texture: {}", name, e);
        }
    }

    pub fn lookup_texture(&self, key: &str) -> Result<&Arc<TextureAsset>, RenderError> {
        self.textures.lookup(key)
    }

    pub fn lookup_animation(&self, name: &str) -> Result<&AnimationDefinition, RenderError> {
        self.animations.lookup(name)
    }
}
