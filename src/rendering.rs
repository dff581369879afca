//! The frame renderer.
//!
//! [`RenderingSystem`] owns the per-frame schedule and the bound render
//! target. Each [`update`](RenderingSystem::update):
//!
//! 1. advances [`WorldTime`] by `dt` scaled by its `time_scale`,
//! 2. runs the animation clock, texture binding (registering unknown sprite
//!    textures on demand) and drawable collection systems, in that order,
//! 3. drains the [`DrawQueue`] into the render target back-to-front.
//!
//! The bevy [`World`] is the entity store: renderers and transforms are read
//! from it, and the asset registry, draw queue and clock live in it as
//! resources.

use bevy_ecs::prelude::*;
use log::info;

use crate::error::RenderError;
use crate::resources::animationstore::AnimationDefinition;
use crate::resources::assets::AssetRegistry;
use crate::resources::drawqueue::{DrawItem, DrawQueue};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation_clock_system;
use crate::systems::render::{collect_drawables_system, prewarm_textures, texture_binding_system};
use crate::systems::time::update_world_time;
use crate::target::RenderTarget;

/// What a single frame drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub sprites: usize,
    pub rectangles: usize,
    pub circles: usize,
    pub texts: usize,
    /// Sprites drawn while no texture was bound to them.
    pub untextured_sprites: usize,
}

impl FrameStats {
    fn record(&mut self, item: &DrawItem) {
        match item {
            DrawItem::Sprite(sprite) => {
                self.sprites += 1;
                if sprite.texture.is_none() {
                    self.untextured_sprites += 1;
                }
            }
            DrawItem::Rectangle(_) => self.rectangles += 1,
            DrawItem::Circle(_) => self.circles += 1,
            DrawItem::Text(_) => self.texts += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.sprites + self.rectangles + self.circles + self.texts
    }
}

pub struct RenderingSystem<T: RenderTarget> {
    target: Option<T>,
    schedule: Schedule,
}

impl<T: RenderTarget> Default for RenderingSystem<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RenderTarget> RenderingSystem<T> {
    pub fn new() -> Self {
        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                animation_clock_system,
                texture_binding_system,
                collect_drawables_system,
            )
                .chain(),
        );
        Self {
            target: None,
            schedule,
        }
    }

    /// Bind `target` and prepare `world`: insert the rendering resources
    /// that are missing and register the textures of every existing
    /// [`Renderer`](crate::components::renderer::Renderer).
    ///
    /// Insert an [`AssetRegistry`] with a custom loader beforehand to load
    /// textures from somewhere other than the working directory.
    pub fn initialize(&mut self, world: &mut World, target: T) {
        Self::ensure_resources(world);
        prewarm_textures(world);
        self.target = Some(target);
        let assets = world.resource::<AssetRegistry>();
        info!(
            "Rendering initialized with {} textures and {} animations",
            assets.textures.len(),
            assets.animations.len()
        );
    }

    fn ensure_resources(world: &mut World) {
        world.get_resource_or_insert_with(AssetRegistry::default);
        world.get_resource_or_insert_with(WorldTime::default);
        world.init_resource::<DrawQueue>();
    }

    /// Replace the render target, returning the previous one.
    pub fn bind_target(&mut self, target: T) -> Option<T> {
        self.target.replace(target)
    }

    pub fn unbind_target(&mut self) -> Option<T> {
        self.target.take()
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.target.as_mut()
    }

    pub fn register_texture(&mut self, world: &mut World, key: &str) -> Result<(), RenderError> {
        world
            .get_resource_or_insert_with(AssetRegistry::default)
            .register_texture(key)
    }

    /// See [`AssetRegistry::register_animation`].
    pub fn register_animation(&mut self, world: &mut World, name: &str, definition: AnimationDefinition) {
        world
            .get_resource_or_insert_with(AssetRegistry::default)
            .register_animation(name, definition);
    }

    /// Run one frame.
    ///
    /// `dt` is wall-clock seconds since the previous frame. It is multiplied
    /// by [`WorldTime::time_scale`] before animations see it, so with a scale
    /// other than 1.0 the animation clock advances by `dt * time_scale`. The
    /// scale defaults to 1.0.
    ///
    /// Sprite textures not yet in the registry are registered before the
    /// frame is drawn.
    ///
    /// # Panics
    ///
    /// Panics if no render target is bound.
    pub fn update(&mut self, world: &mut World, dt: f32) -> FrameStats {
        let Some(target) = self.target.as_mut() else {
            panic!("RenderingSystem::update called before a render target was bound");
        };

        Self::ensure_resources(world);
        update_world_time(world, dt);
        self.schedule.run(world);

        world.resource_scope(|world, mut queue: Mut<DrawQueue>| {
            let assets = world.resource::<AssetRegistry>();
            let mut stats = FrameStats::default();
            target.begin_frame(assets);
            while let Some(item) = queue.pop() {
                stats.record(&item);
                target.draw(&item);
            }
            target.end_frame();
            stats
        })
    }
}
