use bevy_ecs::prelude::Component;

/// Playback state of the walker's directional animation.
///
/// `elapsed_time` only advances while moving; idling shows frame 0 of the
/// current facing without touching the clock.
#[derive(Debug, Clone, Copy, Component, Default)]
pub struct Animation {
    pub frame_index: usize,
    pub elapsed_time: f32,
}
