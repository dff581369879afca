//! Texture registry.
//!
//! Textures are keyed by a path-like string and loaded at most once per key
//! through a [`TextureLoader`]. Loaded textures are immutable and shared as
//! `Arc<TextureAsset>`; the `Arc` allocation is the texture's identity, so a
//! reload produces a new object that bound sprites can detect.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, error, info};
use rustc_hash::FxHashMap;

use crate::error::RenderError;

/// Decoded RGBA8 pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct TextureAsset {
    pub key: String,
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl TextureAsset {
    pub fn from_rgba(key: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            width,
            height,
            pixels,
        }
    }

    /// A texture filled with a single color.
    pub fn solid(key: impl Into<String>, width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba.repeat((width * height) as usize);
        Self::from_rgba(key, width, height, pixels)
    }

    /// True if `pixels` holds exactly `width * height` RGBA8 texels.
    pub fn has_complete_pixels(&self) -> bool {
        let expected = u64::from(self.width) * u64::from(self.height) * 4;
        self.pixels.len() as u64 == expected
    }
}

impl fmt::Debug for TextureAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureAsset")
            .field("key", &self.key)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Source of texture pixels. The registry only decides *when* to load.
pub trait TextureLoader: Send + Sync {
    fn load(&self, key: &str) -> Result<TextureAsset, RenderError>;
}

/// Loads image files from disk with the `image` crate. Keys are paths,
/// resolved against `root` when relative.
#[derive(Debug, Clone, Default)]
pub struct ImageFileLoader {
    root: PathBuf,
}

impl ImageFileLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, key: &str) -> PathBuf {
        let path = Path::new(key);
        if path.is_absolute() || self.root.as_os_str().is_empty() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl TextureLoader for ImageFileLoader {
    fn load(&self, key: &str) -> Result<TextureAsset, RenderError> {
        let path = self.resolve(key);
        debug!("Loading image from: {:?}", path);
        let img = image::open(&path).map_err(|e| RenderError::TextureLoad {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        info!("Loaded texture \"{}\" ({}x{})", key, width, height);
        Ok(TextureAsset::from_rgba(key, width, height, rgba.into_raw()))
    }
}

/// Map of texture keys to loaded textures.
pub struct TextureStore {
    map: FxHashMap<String, Arc<TextureAsset>>,
    loader: Box<dyn TextureLoader>,
}

impl TextureStore {
    pub fn new(loader: impl TextureLoader + 'static) -> Self {
        Self {
            map: FxHashMap::default(),
            loader: Box::new(loader),
        }
    }

    /// Load `key` unless it is already present.
    ///
    /// A failed load is logged and returned; the key stays absent so later
    /// draws see "no texture" instead of a broken one.
    pub fn register(&mut self, key: &str) -> Result<(), RenderError> {
        if self.map.contains_key(key) {
            debug!("Texture \"{}\" already registered", key);
            return Ok(());
        }
        info!("Texture \"{}\" not registered yet, loading", key);
        self.load_into_map(key)
    }

    /// Load `key` again and replace whatever is stored, even if the pixels
    /// are the same. Sprites bound to the old object are rebound on the next
    /// frame. On failure the previous texture is kept.
    pub fn reload(&mut self, key: &str) -> Result<(), RenderError> {
        self.load_into_map(key)
    }

    fn load_into_map(&mut self, key: &str) -> Result<(), RenderError> {
        match self.loader.load(key) {
            Ok(asset) => {
                self.map.insert(key.to_string(), Arc::new(asset));
                Ok(())
            }
            Err(e) => {
                error!("Texture file \"{}\" could not be loaded: {}", key, e);
                Err(e)
            }
        }
    }

    /// Install an already decoded texture under `key`, replacing any
    /// previous one.
    pub fn insert(&mut self, key: impl Into<String>, asset: TextureAsset) -> Arc<TextureAsset> {
        let key = key.into();
        let asset = Arc::new(asset);
        if self.map.insert(key.clone(), Arc::clone(&asset)).is_some() {
            info!("Texture \"{}\" already present, overwriting", key);
        }
        asset
    }

    pub fn get(&self, key: &str) -> Option<&Arc<TextureAsset>> {
        self.map.get(key)
    }

    pub fn lookup(&self, key: &str) -> Result<&Arc<TextureAsset>, RenderError> {
        self.map
            .get(key)
            .ok_or_else(|| RenderError::TextureNotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Arc<TextureAsset>> {
        self.map.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<TextureAsset>)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new(ImageFileLoader::default())
    }
}
