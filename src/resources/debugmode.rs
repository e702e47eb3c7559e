//! Debug overlay toggle.
//!
//! Flipped by [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent);
//! the render pass draws the position/FPS line while it is enabled.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {
    pub enabled: bool,
}

impl DebugMode {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}
