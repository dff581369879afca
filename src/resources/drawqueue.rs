//! Per-frame draw-order resolver.
//!
//! Every frame the collection system pushes one [`DrawItem`] per drawable
//! into the [`DrawQueue`], and the frame renderer pops them back-to-front:
//!
//! 1. by [`RenderLayer`] ascending (Background first, Gui last),
//! 2. within a layer by priority, higher first,
//! 3. then by insertion order.
//!
//! The order key is computed once on push and cached next to the payload.
//! The queue never carries entries from one frame into the next.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::Resource;

use crate::components::layer::RenderLayer;
use crate::components::shapes::{CircleShape, RectangleShape, TextLabel};
use crate::components::sprite::SpriteSlot;

/// One thing to draw this frame.
#[derive(Clone, Debug)]
pub enum DrawItem {
    Sprite(SpriteSlot),
    Rectangle(RectangleShape),
    Circle(CircleShape),
    Text(TextLabel),
}

impl DrawItem {
    pub fn layer(&self) -> RenderLayer {
        match self {
            DrawItem::Sprite(s) => s.layer,
            DrawItem::Rectangle(r) => r.layer,
            DrawItem::Circle(c) => c.layer,
            DrawItem::Text(t) => t.layer,
        }
    }

    pub fn priority(&self) -> f32 {
        match self {
            DrawItem::Sprite(s) => s.priority,
            DrawItem::Rectangle(r) => r.priority,
            DrawItem::Circle(c) => c.priority,
            DrawItem::Text(t) => t.priority,
        }
    }
}

/// Cached ordering key of a queued item.
#[derive(Clone, Copy, Debug)]
pub struct DrawKey {
    pub layer: RenderLayer,
    pub priority: f32,
    seq: u64,
}

#[derive(Debug)]
struct QueuedDraw {
    key: DrawKey,
    item: DrawItem,
}

// "Greater" means "drawn earlier", so the max-heap pops back-to-front.
impl Ord for QueuedDraw {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .layer
            .cmp(&self.key.layer)
            .then_with(|| self.key.priority.total_cmp(&other.key.priority))
            .then_with(|| other.key.seq.cmp(&self.key.seq))
    }
}

impl PartialOrd for QueuedDraw {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedDraw {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedDraw {}

#[derive(Resource, Debug, Default)]
pub struct DrawQueue {
    heap: BinaryHeap<QueuedDraw>,
    next_seq: u64,
}

impl DrawQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: DrawItem) {
        let key = DrawKey {
            layer: item.layer(),
            priority: item.priority(),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(QueuedDraw { key, item });
    }

    /// Next item to draw, back-most first.
    pub fn pop(&mut self) -> Option<DrawItem> {
        self.heap.pop().map(|q| q.item)
    }

    /// Key of the item [`pop`](Self::pop) would return.
    pub fn peek_key(&self) -> Option<DrawKey> {
        self.heap.peek().map(|q| q.key)
    }

    /// Pop everything in draw order.
    pub fn drain_sorted(&mut self) -> impl Iterator<Item = DrawItem> + '_ {
        std::iter::from_fn(move || self.pop())
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every queued item and restart insertion numbering.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::shapes::Color;
    use glam::Vec2;

    fn rect(layer: RenderLayer, priority: f32) -> DrawItem {
        DrawItem::Rectangle(RectangleShape::new(Vec2::ONE, Color::RED).with_layer(layer, priority))
    }

    fn order(queue: &mut DrawQueue) -> Vec<(RenderLayer, f32)> {
        queue
            .drain_sorted()
            .map(|i| (i.layer(), i.priority()))
            .collect()
    }

    #[test]
    fn test_layers_drain_back_to_front_regardless_of_insertion() {
        let inserts = [
            [RenderLayer::Gui, RenderLayer::Background, RenderLayer::Foreground],
            [RenderLayer::Foreground, RenderLayer::Gui, RenderLayer::Background],
            [RenderLayer::Background, RenderLayer::Foreground, RenderLayer::Gui],
        ];
        for layers in inserts {
            let mut queue = DrawQueue::new();
            for layer in layers {
                queue.push(rect(layer, 0.0));
            }
            let drained: Vec<RenderLayer> = order(&mut queue).into_iter().map(|(l, _)| l).collect();
            assert_eq!(
                drained,
                vec![RenderLayer::Background, RenderLayer::Foreground, RenderLayer::Gui]
            );
        }
    }

    #[test]
    fn test_higher_priority_drains_first_within_layer() {
        let mut queue = DrawQueue::new();
        queue.push(rect(RenderLayer::Foreground, 1.0));
        queue.push(rect(RenderLayer::Foreground, 5.0));
        queue.push(rect(RenderLayer::Hud, -10.0));
        queue.push(rect(RenderLayer::Foreground, 3.0));
        assert_eq!(
            order(&mut queue),
            vec![
                (RenderLayer::Foreground, 5.0),
                (RenderLayer::Foreground, 3.0),
                (RenderLayer::Foreground, 1.0),
                (RenderLayer::Hud, -10.0),
            ]
        );
    }

    #[test]
    fn test_equal_keys_keep_insertion_order() {
        let mut queue = DrawQueue::new();
        for i in 0..4 {
            queue.push(DrawItem::Text(TextLabel::new(
                format!("t{i}"),
                10.0,
                Color::BLACK,
            )));
        }
        let texts: Vec<String> = queue
            .drain_sorted()
            .map(|i| match i {
                DrawItem::Text(t) => t.content,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(texts, vec!["t0", "t1", "t2", "t3"]);
    }

    #[test]
    fn test_drain_leaves_queue_empty() {
        let mut queue = DrawQueue::new();
        queue.push(rect(RenderLayer::Background, 0.0));
        queue.push(rect(RenderLayer::Gui, 0.0));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek_key().map(|k| k.layer), Some(RenderLayer::Background));
        let _ = order(&mut queue);
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
    }
}
