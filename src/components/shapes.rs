//! Untextured drawables: rectangles, circles and text labels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::layer::RenderLayer;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const RED: Color = Color::rgba(230, 41, 55, 255);
    pub const GREEN: Color = Color::rgba(0, 228, 48, 255);
    pub const BLUE: Color = Color::rgba(0, 121, 241, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Axis-aligned filled rectangle. `position` is the top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectangleShape {
    pub size: Vec2,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub layer: RenderLayer,
    #[serde(default)]
    pub priority: f32,
}

impl RectangleShape {
    pub fn new(size: Vec2, color: Color) -> Self {
        Self {
            size,
            color,
            position: Vec2::ZERO,
            layer: RenderLayer::default(),
            priority: 0.0,
        }
    }

    pub fn with_layer(mut self, layer: RenderLayer, priority: f32) -> Self {
        self.layer = layer;
        self.priority = priority;
        self
    }
}

/// Filled circle. `position` is the top-left corner of its bounding box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub radius: f32,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub layer: RenderLayer,
    #[serde(default)]
    pub priority: f32,
}

impl CircleShape {
    pub fn new(radius: f32, color: Color) -> Self {
        Self {
            radius,
            color,
            position: Vec2::ZERO,
            layer: RenderLayer::default(),
            priority: 0.0,
        }
    }

    pub fn with_layer(mut self, layer: RenderLayer, priority: f32) -> Self {
        self.layer = layer;
        self.priority = priority;
        self
    }

    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.radius)
    }
}

/// A run of text. Text is placed by its own `position` and does not follow
/// the owning entity's transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub content: String,
    pub font_size: f32,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub layer: RenderLayer,
    #[serde(default)]
    pub priority: f32,
}

impl TextLabel {
    pub fn new(content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
            position: Vec2::ZERO,
            layer: RenderLayer::Hud,
            priority: 0.0,
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

    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
