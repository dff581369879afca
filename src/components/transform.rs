use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A standard pixel-based unit of measurement along each axis.
pub const STD_UNIT: Vec2 = Vec2::new(64.0, 64.0);

/// World-space position of an entity's centre.
///
/// Drawables of an entity with a `Transform` are re-anchored every frame so
/// that their top-left corner sits half a [`STD_UNIT`] up and left of `pos`.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub pos: Vec2,
}

impl Transform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2 { x, y },
        }
    }

    /// Top-left draw position for drawables owned by this entity.
    pub fn anchor(&self) -> Vec2 {
        self.pos - STD_UNIT * 0.5
    }
}
