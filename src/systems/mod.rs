//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite-slot animations and bind their frames
//! - [`render`] – bind textures and collect drawables into the draw queue
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod render;
pub mod time;
