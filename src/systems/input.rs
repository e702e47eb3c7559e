//! Input systems.
//!
//! - [`update_input_state`] samples the keyboard each frame and writes the
//!   results into [`InputState`]. It runs outside the schedule because the
//!   raylib handle is owned by the frame driver, not the world.
//! - [`debug_toggle`] fires a [`SwitchDebugEvent`] on the frame the toggle
//!   key goes down.
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Refresh the `InputState` resource from a held-key query.
pub fn update_input_state(world: &mut World, is_key_down: impl Fn(KeyboardKey) -> bool) {
    world.resource_mut::<InputState>().sample(is_key_down);
}

/// Toggle the debug overlay once per press, however long the key is held.
pub fn debug_toggle(input: Res<InputState>, mut commands: Commands) {
    if input.toggle_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
