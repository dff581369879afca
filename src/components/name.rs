use bevy_ecs::prelude::Component;

/// Human readable entity name, as shown in scene listings.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct EntityName(pub String);

impl EntityName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
