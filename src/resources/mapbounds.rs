//! Pixel extents of the loaded map.

use bevy_ecs::prelude::Resource;

/// Map size in world pixels (tile grid dimensions times tile size).
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub width: f32,
    pub height: f32,
}

impl MapBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
