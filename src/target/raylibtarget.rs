//! Raylib window target.
//!
//! Owns the raylib handle and thread. Textures from the asset registry are
//! uploaded to the GPU at the start of a frame, keyed by texture key and
//! re-uploaded whenever the registry holds a different object for the key.
//! An object that fails to upload is not tried again; its key draws without
//! a texture until the registry replaces the object.
//! Draw items are buffered during the frame and replayed inside a single
//! raylib drawing scope in `end_frame`.
//!
//! Note: raylib resources must be accessed from the main thread only.

use std::sync::Arc;

use ::raylib::prelude::*;
use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::components::shapes::Color as Rgba;
use crate::resources::assets::AssetRegistry;
use crate::resources::drawqueue::DrawItem;
use crate::resources::renderconfig::RenderConfig;
use crate::resources::texturestore::TextureAsset;
use crate::target::RenderTarget;

fn to_raylib(c: Rgba) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

struct GpuTexture {
    asset: Arc<TextureAsset>,
    texture: Texture2D,
}

pub struct RaylibTarget {
    rl: RaylibHandle,
    thread: RaylibThread,
    gpu: FxHashMap<String, GpuTexture>,
    rejected: FxHashMap<String, Arc<TextureAsset>>,
    pending: Vec<DrawItem>,
    clear_color: Color,
}

impl RaylibTarget {
    /// Open a window sized and titled from `config`.
    pub fn open(config: &RenderConfig) -> Self {
        let (mut rl, thread) = ::raylib::init()
            .size(config.window_width as i32, config.window_height as i32)
            .resizable()
            .title(&config.title)
            .build();
        rl.set_target_fps(config.target_fps);
        Self::new(rl, thread)
    }

    pub fn new(rl: RaylibHandle, thread: RaylibThread) -> Self {
        Self {
            rl,
            thread,
            gpu: FxHashMap::default(),
            rejected: FxHashMap::default(),
            pending: Vec::new(),
            clear_color: Color::RAYWHITE,
        }
    }

    pub fn set_clear_color(&mut self, color: Rgba) {
        self.clear_color = to_raylib(color);
    }

    pub fn window_should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    pub fn frame_time(&self) -> f32 {
        self.rl.get_frame_time()
    }

    fn upload(&mut self, asset: &TextureAsset) -> Option<Texture2D> {
        if !asset.has_complete_pixels() {
            warn!(
                "Texture \"{}\" has {} pixel bytes for {}x{}, not uploading",
                asset.key,
                asset.pixels.len(),
                asset.width,
                asset.height
            );
            return None;
        }
        let image = Image::gen_image_color(asset.width as i32, asset.height as i32, Color::BLANK);
        let mut texture = match self.rl.load_texture_from_image(&self.thread, &image) {
            Ok(texture) => texture,
            Err(e) => {
                warn!("GPU upload of \"{}\" failed: {}", asset.key, e);
                return None;
            }
        };
        if let Err(e) = texture.update_texture(&asset.pixels) {
            warn!("Pixel upload of \"{}\" failed: {}", asset.key, e);
            return None;
        }
        Some(texture)
    }
}

impl RenderTarget for RaylibTarget {
    fn begin_frame(&mut self, assets: &AssetRegistry) {
        self.gpu.retain(|key, _| assets.textures.contains(key));
        self.rejected.retain(|key, _| assets.textures.contains(key));

        for (key, asset) in assets.textures.iter() {
            let fresh = self
                .gpu
                .get(key)
                .is_some_and(|gpu| Arc::ptr_eq(&gpu.asset, asset));
            let rejected = self
                .rejected
                .get(key)
                .is_some_and(|failed| Arc::ptr_eq(failed, asset));
            if fresh || rejected {
                continue;
            }
            debug!("Uploading texture \"{}\" to the GPU", key);
            match self.upload(asset) {
                Some(texture) => {
                    self.rejected.remove(key);
                    self.gpu.insert(
                        key.to_string(),
                        GpuTexture {
                            asset: Arc::clone(asset),
                            texture,
                        },
                    );
                }
                None => {
                    self.gpu.remove(key);
                    self.rejected.insert(key.to_string(), Arc::clone(asset));
                }
            }
        }
        self.pending.clear();
    }

    fn draw(&mut self, item: &DrawItem) {
        self.pending.push(item.clone());
    }

    fn end_frame(&mut self) {
        let Self {
            rl,
            thread,
            gpu,
            pending,
            clear_color,
        } = self;

        let mut d = rl.begin_drawing(thread);
        d.clear_background(*clear_color);

        for item in pending.drain(..) {
            match &item {
                DrawItem::Sprite(sprite) => {
                    // Sprites without a valid texture are skipped
                    if sprite.texture.is_none() {
                        continue;
                    }
                    let Some(gpu_tex) = gpu.get(&sprite.tex_key) else {
                        continue;
                    };
                    let src = Rectangle::new(
                        sprite.source.x,
                        sprite.source.y,
                        sprite.source.width,
                        sprite.source.height,
                    );
                    let dest = Rectangle::new(
                        sprite.position.x,
                        sprite.position.y,
                        sprite.source.width,
                        sprite.source.height,
                    );
                    d.draw_texture_pro(&gpu_tex.texture, src, dest, Vector2::zero(), 0.0, Color::WHITE);
                }
                DrawItem::Rectangle(rect) => {
                    d.draw_rectangle_v(
                        Vector2::new(rect.position.x, rect.position.y),
                        Vector2::new(rect.size.x, rect.size.y),
                        to_raylib(rect.color),
                    );
                }
                DrawItem::Circle(circle) => {
                    let center = circle.center();
                    d.draw_circle_v(
                        Vector2::new(center.x, center.y),
                        circle.radius,
                        to_raylib(circle.color),
                    );
                }
                DrawItem::Text(text) => {
                    d.draw_text(
                        &text.content,
                        text.position.x as i32,
                        text.position.y as i32,
                        text.font_size as i32,
                        to_raylib(text.color),
                    );
                }
            }
        }
    }
}
