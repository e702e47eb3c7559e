//! Input-to-motion controller.
//!
//! Reads the shared [`InputState`] and turns held direction keys into a
//! displacement for this frame plus the walker's facing and moving state.
//! Each axis is independent, so two keys on different axes walk diagonally
//! at full speed on both axes.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::player::{Facing, Player};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Outcome of evaluating the direction keys for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionIntent {
    pub step: Vector2,
    pub facing: Facing,
    pub moving: bool,
}

/// Evaluate held direction keys in [`Facing::CHECK_ORDER`].
///
/// Every held key adds `distance` along its axis and overwrites the facing,
/// so with several keys held the last one in the order wins. Opposite keys
/// cancel out on their axis but still count as moving. With no key held the
/// previous facing is kept.
pub fn resolve_intent(input: &InputState, previous: Facing, distance: f32) -> MotionIntent {
    let mut intent = MotionIntent {
        step: Vector2::zero(),
        facing: previous,
        moving: false,
    };
    for facing in Facing::CHECK_ORDER {
        if !input.direction(facing).active {
            continue;
        }
        let unit = facing.unit();
        intent.step.x += unit.x * distance;
        intent.step.y += unit.y * distance;
        intent.facing = facing;
        intent.moving = true;
    }
    intent
}

/// Update each player's requested step, facing and moving flag from input.
pub fn player_controller(
    mut query: Query<&mut Player>,
    input: Res<InputState>,
    time: Res<WorldTime>,
) {
    for mut player in query.iter_mut() {
        let intent = resolve_intent(&input, player.facing, player.speed * time.delta);
        player.step = intent.step;
        player.facing = intent.facing;
        player.moving = intent.moving;
    }
}
