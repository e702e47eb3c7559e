//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that the camera system and
//! the render pass agree on a single world/screen transform. The camera
//! system rewrites `target` every frame; `offset` is the viewport centre.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

use crate::resources::screensize::ScreenSize;

#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera centred on the viewport, looking at `target`.
    pub fn centered(screen: ScreenSize, target: Vector2) -> Self {
        let (half_w, half_h) = screen.half_extents();
        Self(Camera2D {
            target,
            offset: Vector2 {
                x: half_w,
                y: half_h,
            },
            rotation: 0.0,
            zoom: 1.0,
        })
    }
}
