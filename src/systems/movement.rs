//! Axis-separated movement with static collision.
//!
//! The requested step is applied one axis at a time: X first, then Y from the
//! possibly-updated X. A blocked axis is dropped on its own, which lets the
//! walker slide along walls. The result is then clamped into the map.
use bevy_ecs::prelude::*;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::collisionset::CollisionSet;
use crate::resources::mapbounds::MapBounds;

/// Clamp that never panics: the lower bound is checked first, so when the
/// range is inverted (map smaller than the player) the value ends at `hi`
/// for anything above it and at `lo` for anything below.
pub fn clamp_lower_first(v: f32, lo: f32, hi: f32) -> f32 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Resolve one frame of movement for a box of `size` at `current`.
pub fn resolve_movement(
    current: Vector2,
    step: Vector2,
    size: Vector2,
    colliders: &CollisionSet,
    bounds: &MapBounds,
) -> Vector2 {
    let mut pos = current;

    let candidate_x = Rectangle {
        x: current.x + step.x,
        y: pos.y,
        width: size.x,
        height: size.y,
    };
    if !colliders.hits(&candidate_x) {
        pos.x = candidate_x.x;
    }

    let candidate_y = Rectangle {
        x: pos.x,
        y: current.y + step.y,
        width: size.x,
        height: size.y,
    };
    if !colliders.hits(&candidate_y) {
        pos.y = candidate_y.y;
    }

    pos.x = clamp_lower_first(pos.x, 0.0, bounds.width - size.x);
    pos.y = clamp_lower_first(pos.y, 0.0, bounds.height - size.y);
    pos
}

/// Move every player by its requested step, honouring collisions and map bounds.
pub fn movement(
    mut query: Query<(&mut MapPosition, &Player, &BoxCollider)>,
    colliders: Res<CollisionSet>,
    bounds: Res<MapBounds>,
) {
    for (mut position, player, collider) in query.iter_mut() {
        position.pos = resolve_movement(position.pos, player.step, collider.size, &colliders, &bounds);
    }
}
