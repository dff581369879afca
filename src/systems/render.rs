//! Per-frame render preparation systems.
//!
//! - [`texture_binding_system`] registers unknown sprite textures on demand
//!   and keeps every slot bound to the registry's current object for its key.
//! - [`collect_drawables_system`] anchors drawables to their entity's
//!   [`Transform`] and fills the [`DrawQueue`] for this frame.
//! - [`prewarm_textures`] registers every texture referenced by existing
//!   renderers, once, before the first frame.
//!
//! Draining the queue into a render target is done by
//! [`RenderingSystem`](crate::rendering::RenderingSystem).

use std::sync::Arc;

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::renderer::Renderer;
use crate::components::transform::Transform;
use crate::resources::assets::AssetRegistry;
use crate::resources::drawqueue::{DrawItem, DrawQueue};

/// Register sprite textures the registry does not know yet, then rebind
/// slots whose bound object is not the registry's current one. Slots already
/// bound to the current object are left alone. Keys that failed to load stay
/// unbound without another load attempt.
pub fn texture_binding_system(mut query: Query<&mut Renderer>, mut assets: ResMut<AssetRegistry>) {
    for mut renderer in query.iter_mut() {
        for (name, slot) in renderer.sprites.iter_mut() {
            match assets.texture_on_demand(&slot.tex_key) {
                Some(current) if slot.is_bound_to(current) => {}
                Some(current) => {
                    debug!("Re-applying texture \"{}\" to sprite \"{}\"", slot.tex_key, name);
                    slot.texture = Some(Arc::clone(current));
                }
                None => {
                    if slot.texture.take().is_some() {
                        debug!("Texture \"{}\" left the registry, unbinding \"{}\"", slot.tex_key, name);
                    }
                }
            }
        }
    }
}

/// Push every sprite, rectangle, circle and text of every renderer into the
/// draw queue. Sprites, rectangles and circles of entities with a
/// [`Transform`] are moved to the transform's anchor first; the new position
/// is kept on the component. Text keeps its own position.
pub fn collect_drawables_system(
    mut query: Query<(&mut Renderer, Option<&Transform>)>,
    mut queue: ResMut<DrawQueue>,
) {
    if !queue.is_empty() {
        warn!("Draw queue held {} stale items, discarding", queue.len());
    }
    queue.clear();

    for (mut renderer, transform) in query.iter_mut() {
        let anchor = transform.map(Transform::anchor);
        let renderer = &mut *renderer;

        for slot in renderer.sprites.values_mut() {
            if let Some(anchor) = anchor {
                slot.position = anchor;
            }
            queue.push(DrawItem::Sprite(slot.clone()));
        }
        for rect in renderer.rectangles.values_mut() {
            if let Some(anchor) = anchor {
                rect.position = anchor;
            }
            queue.push(DrawItem::Rectangle(rect.clone()));
        }
        for circle in renderer.circles.values_mut() {
            if let Some(anchor) = anchor {
                circle.position = anchor;
            }
            queue.push(DrawItem::Circle(circle.clone()));
        }
        for text in renderer.texts.values() {
            queue.push(DrawItem::Text(text.clone()));
        }
    }
}

/// Register the textures of all sprite slots currently in the world.
/// Failures are logged by the registry and otherwise ignored.
pub fn prewarm_textures(world: &mut World) {
    let keys: Vec<String> = {
        let mut q = world.query::<&Renderer>();
        q.iter(world)
            .flat_map(|r| r.texture_keys().map(str::to_string).collect::<Vec<_>>())
            .collect()
    };

    let mut assets = world.get_resource_or_insert_with(AssetRegistry::default);
    for key in keys {
        let _ = assets.register_texture(&key);
    }
}
