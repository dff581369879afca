//! Render layer component data.
//!
//! [`RenderLayer`] is the coarse draw-order category of a drawable. Layers
//! are drawn in ascending order, so [`RenderLayer::Gui`] always ends up on
//! top. Inside a layer the drawable's `priority` breaks ties.

use serde::{Deserialize, Serialize};

/// Coarse render-sorting layer.
///
/// - `Background`: environment behind the game space
/// - `Foreground`: the main game space
/// - `Hud`: overlays on top of the game space
/// - `Gui`: editor and menu widgets, above everything else
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RenderLayer {
    Background,
    #[default]
    Foreground,
    Hud,
    Gui,
}

impl RenderLayer {
    /// All layers in draw order.
    pub const ALL: [RenderLayer; 4] = [
        RenderLayer::Background,
        RenderLayer::Foreground,
        RenderLayer::Hud,
        RenderLayer::Gui,
    ];
}
