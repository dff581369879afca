//! Unique display names for spawned entities.

use bevy_ecs::prelude::Resource;

/// Hands out "<base> <n>" names from a counter owned by the world.
#[derive(Resource, Debug, Default)]
pub struct EntityNamer {
    counter: u32,
}

impl EntityNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unique name for `base`. The counter is shared across bases.
    pub fn next_name(&mut self, base: &str) -> String {
        let name = format!("{} {}", base, self.counter);
        self.counter += 1;
        name
    }

    pub fn issued(&self) -> u32 {
        self.counter
    }
}
