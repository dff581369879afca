//! ECS resources made available to the rendering systems.
//!
//! Overview
//! - `animationstore` – animation definitions reused across sprite slots
//! - `assets` – the asset registry pairing textures and animations
//! - `drawqueue` – per-frame draw-order resolver
//! - `entitynamer` – counter-backed unique names for spawned entities
//! - `renderconfig` – window and asset settings loaded from `config.ini`
//! - `texturestore` – loaded textures keyed by path-like strings
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod assets;
pub mod drawqueue;
pub mod entitynamer;
pub mod renderconfig;
pub mod texturestore;
pub mod worldtime;
