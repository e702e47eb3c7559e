use bevy_ecs::prelude::Resource;

/// Simulation clock, advanced once per frame by
/// [`update_world_time`](crate::systems::time::update_world_time).
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Seconds simulated since start.
    pub elapsed: f32,
    /// Seconds simulated by the current frame.
    pub delta: f32,
    pub frame_count: u64,
}
