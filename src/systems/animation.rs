//! Animation clock system.
//!
//! [`animation_clock_system`] advances every animated sprite slot by the
//! frame delta and points the slot at the current frame of its animation.
//!
//! # Animation Flow
//!
//! 1. Animation data is registered in [`AssetRegistry`]
//! 2. Sprite slots carry an [`AnimationPlayback`](crate::components::animation::AnimationPlayback) naming a key
//! 3. This system advances the playback and updates the slot's `source` and `tex_key`
//!
//! A slot whose animation is not registered is left as it is.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::renderer::Renderer;
use crate::resources::assets::AssetRegistry;
use crate::resources::worldtime::WorldTime;

pub fn animation_clock_system(
    mut query: Query<&mut Renderer>,
    assets: Res<AssetRegistry>,
    time: Res<WorldTime>,
) {
    for mut renderer in query.iter_mut() {
        for (name, slot) in renderer.sprites.iter_mut() {
            let Some(playback) = slot.animation.as_mut() else {
                continue;
            };
            let definition = match assets.lookup_animation(&playback.animation_key) {
                Ok(definition) => definition,
                Err(e) => {
                    debug!("Sprite \"{}\" skipped: {}", name, e);
                    continue;
                }
            };

            playback.advance(definition, time.delta);

            if let Some(frame) = definition.frames.get(playback.frame_index) {
                slot.source = *frame;
            }
            if slot.tex_key != definition.texture {
                slot.tex_key.clone_from(&definition.texture);
            }
        }
    }
}
