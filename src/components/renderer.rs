//! The `Renderer` component: every drawable an entity owns, by name.
//!
//! Names are unique per kind. Collections are ordered maps so that frame
//! output is deterministic for equal draw keys.

use std::collections::BTreeMap;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::shapes::{CircleShape, RectangleShape, TextLabel};
use crate::components::sprite::SpriteSlot;

#[derive(Component, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Renderer {
    #[serde(default)]
    pub sprites: BTreeMap<String, SpriteSlot>,
    #[serde(default)]
    pub rectangles: BTreeMap<String, RectangleShape>,
    #[serde(default)]
    pub circles: BTreeMap<String, CircleShape>,
    #[serde(default)]
    pub texts: BTreeMap<String, TextLabel>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sprite(mut self, name: impl Into<String>, sprite: SpriteSlot) -> Self {
        self.sprites.insert(name.into(), sprite);
        self
    }

    pub fn with_rectangle(mut self, name: impl Into<String>, rect: RectangleShape) -> Self {
        self.rectangles.insert(name.into(), rect);
        self
    }

    pub fn with_circle(mut self, name: impl Into<String>, circle: CircleShape) -> Self {
        self.circles.insert(name.into(), circle);
        self
    }

    pub fn with_text(mut self, name: impl Into<String>, text: TextLabel) -> Self {
        self.texts.insert(name.into(), text);
        self
    }

    pub fn sprite(&self, name: &str) -> Option<&SpriteSlot> {
        self.sprites.get(name)
    }

    pub fn sprite_mut(&mut self, name: &str) -> Option<&mut SpriteSlot> {
        self.sprites.get_mut(name)
    }

    /// Total number of drawables across all kinds.
    pub fn len(&self) -> usize {
        self.sprites.len() + self.rectangles.len() + self.circles.len() + self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Texture keys referenced by the sprite slots, skipping empty keys of
    /// animated slots that have not resolved their first frame yet.
    pub fn texture_keys(&self) -> impl Iterator<Item = &str> {
        self.sprites
            .values()
            .map(|s| s.tex_key.as_str())
            .filter(|k| !k.is_empty())
    }
}
