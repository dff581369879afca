use std::sync::Arc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::animation::AnimationPlayback;
use crate::components::layer::RenderLayer;
use crate::resources::texturestore::TextureAsset;

/// Sub-region of a texture in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FrameRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// A textured quad owned by a [`Renderer`](crate::components::renderer::Renderer).
///
/// `tex_key` names a texture in the asset registry and `source` selects the
/// region of it to draw. When `animation` is set, the animation clock keeps
/// `source` (and `tex_key`) in sync with the current frame.
///
/// `texture` is the bound texture object. It is refreshed by the texture
/// binding system and is never serialized.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpriteSlot {
    pub tex_key: String,
    #[serde(default)]
    pub source: FrameRect,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub layer: RenderLayer,
    #[serde(default)]
    pub priority: f32,
    #[serde(default)]
    pub animation: Option<AnimationPlayback>,
    #[serde(skip)]
    pub texture: Option<Arc<TextureAsset>>,
}

impl SpriteSlot {
    pub fn new(tex_key: impl Into<String>, source: FrameRect) -> Self {
        Self {
            tex_key: tex_key.into(),
            source,
            position: Vec2::ZERO,
            layer: RenderLayer::default(),
            priority: 0.0,
            animation: None,
            texture: None,
        }
    }

    /// A slot driven by the named animation. The texture key and source
    /// rectangle are filled in from the animation on the first update.
    pub fn animated(animation_key: impl Into<String>) -> Self {
        Self {
            animation: Some(AnimationPlayback::new(animation_key)),
            ..Self::new(String::new(), FrameRect::default())
        }
    }

    pub fn with_layer(mut self, layer: RenderLayer, priority: f32) -> Self {
        self.layer = layer;
        self.priority = priority;
        self
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// True if `texture` is the exact object currently bound to this slot.
    pub fn is_bound_to(&self, texture: &Arc<TextureAsset>) -> bool {
        self.texture
            .as_ref()
            .is_some_and(|bound| Arc::ptr_eq(bound, texture))
    }
}
