//! Per-slot animation playback state.
//!
//! Each [`SpriteSlot`](crate::components::sprite::SpriteSlot) that plays an
//! animation owns one [`AnimationPlayback`]. The shared, immutable frame data
//! lives in [`AnimationStore`](crate::resources::animationstore::AnimationStore);
//! slots that play the same animation keep independent phase.

use serde::{Deserialize, Serialize};

use crate::resources::animationstore::AnimationDefinition;

/// Mutable playback state: which frame is shown and how far the slot is
/// towards the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationPlayback {
    pub animation_key: String,
    pub frame_index: usize,
    /// Fractional frame progress. Whole frames are absorbed into
    /// `frame_index` once the accumulator passes +1 (or -1 in reverse).
    pub progress: f32,
    /// Set while a non-looping animation is held on its terminal frame.
    #[serde(default)]
    pub ended: bool,
}

impl AnimationPlayback {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            progress: 0.0,
            ended: false,
        }
    }

    /// Start at a given frame instead of the first one.
    pub fn at_frame(mut self, frame_index: usize) -> Self {
        self.frame_index = frame_index;
        self
    }

    /// Rewind to the first frame.
    pub fn restart(&mut self) {
        self.frame_index = 0;
        self.progress = 0.0;
        self.ended = false;
    }

    /// Switch to another animation. Switching to the current key is a no-op.
    pub fn play(&mut self, animation_key: &str) {
        if self.animation_key != animation_key {
            self.animation_key = animation_key.to_string();
            self.restart();
        }
    }

    /// Advance playback by `dt` seconds.
    ///
    /// Several frames may be skipped in one call when `dt * speed` is large.
    /// Looping animations wrap in both directions; others clamp on the first
    /// or last frame. A definition without frames leaves the state untouched.
    /// A non-finite step resets `progress` and keeps the current frame.
    pub fn advance(&mut self, definition: &AnimationDefinition, dt: f32) {
        let frame_count = definition.frames.len() as i64;
        if frame_count == 0 {
            return;
        }

        let speed = definition.speed;
        self.progress += dt * speed;
        if !self.progress.is_finite() {
            self.progress = 0.0;
        }

        let mut index = i64::try_from(self.frame_index).unwrap_or(i64::MAX);
        if (speed < 0.0 && self.progress < -1.0) || (speed > 0.0 && self.progress > 1.0) {
            let whole = self.progress.floor();
            self.progress -= whole;
            // reduce while still a float so huge steps cannot overflow the index
            let whole = f64::from(whole);
            let count = frame_count as f64;
            let step = if definition.looping {
                whole.rem_euclid(count)
            } else {
                whole.clamp(-count, count)
            };
            index = index.saturating_add(step as i64);
        }

        if definition.looping {
            index = index.rem_euclid(frame_count);
            self.ended = false;
        } else {
            index = index.clamp(0, frame_count - 1);
            self.ended = (speed > 0.0 && index == frame_count - 1) || (speed < 0.0 && index == 0);
        }
        self.frame_index = index as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::FrameRect;

    fn definition(frames: usize, speed: f32, looping: bool) -> AnimationDefinition {
        let frames = (0..frames)
            .map(|i| FrameRect::new(i as f32 * 16.0, 0.0, 16.0, 16.0))
            .collect();
        AnimationDefinition::new("sheet.png", frames, speed, looping)
    }

    #[test]
    fn test_looping_wraps_past_the_end() {
        let def = definition(4, 1.0, true);
        let mut pb = AnimationPlayback::new("walk");
        // 4 + 2 frame units in one tick
        pb.advance(&def, 6.0);
        assert_eq!(pb.frame_index, 2);
        assert!(pb.progress.abs() < 1e-6);
    }

    #[test]
    fn test_large_dt_skips_several_frames() {
        let def = definition(8, 10.0, true);
        let mut pb = AnimationPlayback::new("walk");
        pb.advance(&def, 0.35);
        assert_eq!(pb.frame_index, 3);
        assert!((pb.progress - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_huge_dt_does_not_overflow() {
        let looping = definition(4, 8.0, true);
        let mut pb = AnimationPlayback::new("walk").at_frame(1);
        pb.advance(&looping, 1.0e20);
        assert!(pb.frame_index < 4);
        assert!((0.0..1.0).contains(&pb.progress));

        let once = definition(4, 8.0, false);
        let mut pb = AnimationPlayback::new("once").at_frame(1);
        pb.advance(&once, 1.0e20);
        assert_eq!(pb.frame_index, 3);
        assert!(pb.ended);

        let reverse = definition(4, -8.0, false);
        let mut pb = AnimationPlayback::new("back").at_frame(2);
        pb.advance(&reverse, 1.0e20);
        assert_eq!(pb.frame_index, 0);
        assert!(pb.ended);
    }

    #[test]
    fn test_non_finite_step_keeps_frame() {
        let def = definition(4, 8.0, true);
        let mut pb = AnimationPlayback::new("walk").at_frame(2);
        pb.advance(&def, f32::INFINITY);
        assert_eq!(pb.frame_index, 2);
        assert_eq!(pb.progress, 0.0);
        pb.advance(&def, f32::NAN);
        assert_eq!(pb.frame_index, 2);
        assert_eq!(pb.progress, 0.0);
    }

    #[test]
    fn test_progress_below_threshold_holds_frame() {
        let def = definition(4, 1.0, true);
        let mut pb = AnimationPlayback::new("walk");
        pb.advance(&def, 0.5);
        assert_eq!(pb.frame_index, 0);
        // exactly 1.0 is not past the threshold yet
        pb.advance(&def, 0.5);
        assert_eq!(pb.frame_index, 0);
        pb.advance(&def, 0.25);
        assert_eq!(pb.frame_index, 1);
        assert!((pb.progress - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_non_looping_clamps_on_last_frame() {
        let def = definition(4, 1.0, false);
        let mut pb = AnimationPlayback::new("once");
        pb.advance(&def, 10.0);
        assert_eq!(pb.frame_index, 3);
        assert!(pb.ended);
        for _ in 0..5 {
            pb.advance(&def, 3.5);
            assert_eq!(pb.frame_index, 3);
        }
    }

    #[test]
    fn test_non_looping_reverse_clamps_on_first_frame() {
        let def = definition(4, -1.0, false);
        let mut pb = AnimationPlayback::new("once").at_frame(3);
        pb.advance(&def, 10.0);
        assert_eq!(pb.frame_index, 0);
        assert!(pb.ended);
        pb.advance(&def, 2.5);
        assert_eq!(pb.frame_index, 0);
    }

    #[test]
    fn test_reverse_playback_decreases_frame() {
        let def = definition(4, -1.0, false);
        let mut pb = AnimationPlayback::new("rewind").at_frame(3);
        pb.advance(&def, 0.5);
        assert_eq!(pb.frame_index, 3);
        pb.advance(&def, 1.0);
        // progress -1.5 absorbs floor(-1.5) = -2 frames, remainder 0.5
        assert_eq!(pb.frame_index, 1);
        assert!((pb.progress - 0.5).abs() < 1e-6);
        assert!(!pb.ended);
    }

    #[test]
    fn test_reverse_looping_wraps_below_zero() {
        let def = definition(4, -1.0, true);
        let mut pb = AnimationPlayback::new("spin");
        pb.advance(&def, 1.5);
        assert_eq!(pb.frame_index, 2);
    }

    #[test]
    fn test_empty_definition_is_ignored() {
        let def = AnimationDefinition::new("sheet.png", Vec::new(), 1.0, true);
        let mut pb = AnimationPlayback::new("nothing");
        pb.advance(&def, 5.0);
        assert_eq!(pb.frame_index, 0);
        assert_eq!(pb.progress, 0.0);
    }

    #[test]
    fn test_play_switches_and_restarts() {
        let mut pb = AnimationPlayback::new("walk").at_frame(2);
        pb.progress = 0.4;
        pb.play("walk");
        assert_eq!(pb.frame_index, 2);
        pb.play("jump");
        assert_eq!(pb.animation_key, "jump");
        assert_eq!(pb.frame_index, 0);
        assert_eq!(pb.progress, 0.0);
    }
}
