//! ECS components read and written by the rendering core.
//!
//! Submodules overview:
//! - [`animation`] – per-slot animation playback state and the frame clock
//! - [`layer`] – coarse render layer used for draw ordering
//! - [`name`] – display name for entities spawned from scenes
//! - [`renderer`] – per-entity named collections of drawables
//! - [`shapes`] – rectangles, circles, text labels and colors
//! - [`sprite`] – textured sprite slots and texture sub-rectangles
//! - [`transform`] – entity position that anchors its drawables

pub mod animation;
pub mod layer;
pub mod name;
pub mod renderer;
pub mod shapes;
pub mod sprite;
pub mod transform;
