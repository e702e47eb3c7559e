//! Screen size resource.
//!
//! Stores the virtual render resolution in pixels. The world is drawn at this
//! size into the render target and scaled to the window afterwards, so the
//! camera clamps against these extents, not the window's.

use bevy_ecs::prelude::Resource;

/// Virtual viewport size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    /// Half the visible world extent on each axis.
    pub fn half_extents(&self) -> (f32, f32) {
        (self.w as f32 / 2.0, self.h as f32 / 2.0)
    }
}
