//! Textual round-trip capability for assets and components.
//!
//! Anything that derives serde's `Serialize` and `Deserialize` gets
//! [`Serializable`] for free; the textual form is JSON.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::RenderError;

/// Types that can be written to and read back from a textual form.
pub trait Serializable: Sized {
    /// Produce the textual form of `self`.
    fn serialize(&self) -> Result<String, RenderError>;

    /// Rebuild a value from its textual form.
    fn deserialize(text: &str) -> Result<Self, RenderError>;
}

impl<T> Serializable for T
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self) -> Result<String, RenderError> {
        serde_json::to_string_pretty(self).map_err(|e| RenderError::Parse(e.to_string()))
    }

    fn deserialize(text: &str) -> Result<Self, RenderError> {
        serde_json::from_str(text).map_err(|e| RenderError::Parse(e.to_string()))
    }
}
