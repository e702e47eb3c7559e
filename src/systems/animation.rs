//! Walk-cycle animation system.
//!
//! Picks the sprite frame for the walker from its facing and moving state:
//!
//! - moving: the facing's cycle is sampled at the current clock, then the
//!   clock advances by this frame's delta;
//! - idle: frame 0 of the facing's cycle, clock untouched.
//!
//! The chosen cell is written into the [`Sprite`] offset for the render pass.
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – per-entity clock and frame
//! - [`crate::resources::animationstore::AnimationStore`] – cycle definitions

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance the walker's animation and update its sprite frame.
///
/// Does nothing until the sprite sheet has been installed.
pub fn animation(
    mut query: Query<(&Player, &mut Animation, &mut Sprite)>,
    animation_store: Option<Res<AnimationStore>>,
    time: Res<WorldTime>,
) {
    let Some(animation_store) = animation_store else {
        return;
    };
    for (player, mut anim, mut sprite) in query.iter_mut() {
        let cycle = animation_store.get(player.facing);
        if player.moving {
            anim.frame_index = cycle.key_frame_index(anim.elapsed_time);
            anim.elapsed_time += time.delta;
        } else {
            anim.frame_index = 0;
        }
        sprite.tex_key.clone_from(&cycle.tex_key);
        sprite.offset = cycle.frame_offset(anim.frame_index);
    }
}
