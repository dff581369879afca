//! Raven rendering core.
//!
//! The 2D rendering and animation core of a scene editor/runtime: texture
//! and animation registries, per-slot sprite animation, and per-frame draw
//! ordering across sprites, rectangles, circles and text. Entities and their
//! components live in a `bevy_ecs` world.

pub mod components;
pub mod error;
pub mod rendering;
pub mod resources;
pub mod scene;
pub mod serialize;
pub mod systems;
pub mod target;
