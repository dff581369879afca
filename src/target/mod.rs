//! Render targets: where drained draw items end up.
//!
//! The frame renderer calls [`RenderTarget::begin_frame`] once, then
//! [`RenderTarget::draw`] once per item in back-to-front order, then
//! [`RenderTarget::end_frame`].
//!
//! - [`RecordingTarget`] keeps the items in memory; used headless and in tests.
//! - [`raylibtarget::RaylibTarget`] (feature `raylib`) draws into a raylib window.

#[cfg(feature = "raylib")]
pub mod raylibtarget;

use crate::resources::assets::AssetRegistry;
use crate::resources::drawqueue::DrawItem;

pub trait RenderTarget {
    /// Called before the first draw of a frame with the current assets.
    fn begin_frame(&mut self, _assets: &AssetRegistry) {}

    /// Draw one item. Sprites may carry no texture; targets must tolerate it.
    fn draw(&mut self, item: &DrawItem);

    fn end_frame(&mut self) {}
}

/// Stores every frame's draw items in order.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    frames: Vec<Vec<DrawItem>>,
    current: Vec<DrawItem>,
    /// Keep at most this many finished frames (0 keeps all).
    keep: usize,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only remember the most recent `keep` frames.
    pub fn keeping(keep: usize) -> Self {
        Self {
            keep,
            ..Self::default()
        }
    }

    pub fn frames(&self) -> &[Vec<DrawItem>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[DrawItem]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl RenderTarget for RecordingTarget {
    fn begin_frame(&mut self, _assets: &AssetRegistry) {
        self.current.clear();
    }

    fn draw(&mut self, item: &DrawItem) {
        self.current.push(item.clone());
    }

    fn end_frame(&mut self) {
        self.frames.push(std::mem::take(&mut self.current));
        if self.keep > 0 && self.frames.len() > self.keep {
            let excess = self.frames.len() - self.keep;
            self.frames.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::shapes::{Color, TextLabel};

    fn text(s: &str) -> DrawItem {
        DrawItem::Text(TextLabel::new(s, 10.0, Color::BLACK))
    }

    #[test]
    fn test_recording_groups_items_per_frame() {
        let assets = AssetRegistry::default();
        let mut target = RecordingTarget::keeping(2);
        for frame in 0..3 {
            target.begin_frame(&assets);
            for i in 0..=frame {
                target.draw(&text(&format!("{frame}-{i}")));
            }
            target.end_frame();
        }
        assert_eq!(target.frame_count(), 2);
        assert_eq!(target.frames()[0].len(), 2);
        assert_eq!(target.last_frame().unwrap().len(), 3);
    }
}
