//! Event and observer to toggle the debug overlay.
//!
//! Emitting a [`SwitchDebugEvent`] flips [`DebugMode::enabled`]. The render
//! pass draws the position/FPS line while it is enabled.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Event used to toggle the [`DebugMode`] overlay on/off.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Observer that flips the [`DebugMode`] flag.
pub fn switch_debug_observer(_trigger: On<SwitchDebugEvent>, mut debug_mode: ResMut<DebugMode>) {
    debug_mode.toggle();
    info!(
        "Debug overlay {}",
        if debug_mode.enabled { "enabled" } else { "disabled" }
    );
}
