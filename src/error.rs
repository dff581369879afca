//! Error types for the rendering core.
//!
//! Only recoverable conditions live here. Wiring mistakes (drawing before a
//! render target is bound, registering an animation without frames) are
//! precondition violations and panic instead.

use thiserror::Error;

/// Recoverable errors surfaced by asset registration, lookup and parsing.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A texture file was missing or could not be decoded.
    #[error("texture \"{key}\" could not be loaded: {reason}")]
    TextureLoad { key: String, reason: String },

    /// Lookup of a texture key that is not in the registry.
    #[error("texture \"{0}\" is not registered")]
    TextureNotFound(String),

    /// Lookup of an animation name that is not in the registry.
    #[error("animation \"{0}\" is not registered")]
    AnimationNotFound(String),

    /// Textual form could not be parsed back into a value.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl RenderError {
    /// True for lookups of keys that were never registered.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RenderError::TextureNotFound(_) | RenderError::AnimationNotFound(_)
        )
    }
}
