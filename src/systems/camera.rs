//! Camera follow system.
//!
//! Centres the shared camera on the walker, clamped so the view never shows
//! past the map edges, and snapped to whole pixels to avoid texture shimmer.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::mapbounds::MapBounds;
use crate::resources::screensize::ScreenSize;

/// Camera coordinate on one axis.
///
/// When the map is narrower than the view on this axis the camera stays on
/// the map's centre; otherwise the target is kept at least `half` away from
/// both map edges.
pub fn camera_axis(target: f32, half: f32, extent: f32) -> f32 {
    if extent < 2.0 * half {
        extent / 2.0
    } else {
        target.clamp(half, extent - half)
    }
}

/// Pixel-snapped camera target for a box of `size` at `position`.
pub fn camera_target(position: Vector2, size: Vector2, screen: ScreenSize, bounds: MapBounds) -> Vector2 {
    let (half_w, half_h) = screen.half_extents();
    Vector2 {
        x: camera_axis(position.x + size.x / 2.0, half_w, bounds.width).round(),
        y: camera_axis(position.y + size.y / 2.0, half_h, bounds.height).round(),
    }
}

/// Point the camera at the player.
pub fn camera_follow(
    query: Query<(&MapPosition, &BoxCollider), With<Player>>,
    mut camera: ResMut<Camera2DRes>,
    screen: Res<ScreenSize>,
    bounds: Res<MapBounds>,
) {
    let Ok((position, collider)) = query.single() else {
        return;
    };
    camera.0.target = camera_target(position.pos, collider.size, *screen, *bounds);
}
