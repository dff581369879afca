//! Animation resource registry.
//!
//! This module provides a store for animation definitions that can be reused
//! by multiple sprite slots. Slots look up an animation by a string key and
//! drive their own playback from the immutable parameters stored here.

use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::sprite::FrameRect;
use crate::error::RenderError;

/// Immutable data describing a sprite-sheet animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDefinition {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub texture: String,
    /// Frame rectangles into the texture, in playback order.
    pub frames: Vec<FrameRect>,
    /// Frames per second. Negative values play the frames in reverse.
    pub speed: f32,
    /// Whether playback wraps around instead of holding the end frame.
    pub looping: bool,
}

impl AnimationDefinition {
    pub fn new(texture: impl Into<String>, frames: Vec<FrameRect>, speed: f32, looping: bool) -> Self {
        Self {
            texture: texture.into(),
            frames,
            speed,
            looping,
        }
    }

    /// Frames laid out left to right in a single row of a sprite sheet.
    pub fn strip(
        texture: impl Into<String>,
        origin: (f32, f32),
        frame_size: (f32, f32),
        frame_count: usize,
        speed: f32,
        looping: bool,
    ) -> Self {
        let frames = (0..frame_count)
            .map(|i| {
                FrameRect::new(
                    origin.0 + i as f32 * frame_size.0,
                    origin.1,
                    frame_size.0,
                    frame_size.1,
                )
            })
            .collect();
        Self::new(texture, frames, speed, looping)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Central registry of reusable animation definitions keyed by name.
#[derive(Debug, Default)]
pub struct AnimationStore {
    animations: FxHashMap<String, AnimationDefinition>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `definition` under `name`, replacing any previous definition.
    /// Returns the replaced definition.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        definition: AnimationDefinition,
    ) -> Option<AnimationDefinition> {
        let name = name.into();
        let previous = self.animations.insert(name.clone(), definition);
        if previous.is_some() {
            info!("Animation \"{}\" already registered, overwriting", name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&AnimationDefinition> {
        self.animations.get(name)
    }

    pub fn lookup(&self, name: &str) -> Result<&AnimationDefinition, RenderError> {
        self.animations
            .get(name)
            .ok_or_else(|| RenderError::AnimationNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn clear(&mut self) {
        self.animations.clear();
    }
}
