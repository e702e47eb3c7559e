//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the walker cares about and exposes it
//! to systems via the [`InputState`] resource. Defaults use WASD for movement
//! and F3 for the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::player::Facing;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went from released to held this frame.
    pub just_pressed: bool,
    /// Whether the key went from held to released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    /// Feed this frame's held state. Edges are derived from the previous frame,
    /// so a key held across many frames reports `just_pressed` exactly once.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_up: BoolState,
    pub move_left: BoolState,
    pub move_down: BoolState,
    pub move_right: BoolState,
    pub toggle_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_up: BoolState::bound_to(KeyboardKey::KEY_W),
            move_left: BoolState::bound_to(KeyboardKey::KEY_A),
            move_down: BoolState::bound_to(KeyboardKey::KEY_S),
            move_right: BoolState::bound_to(KeyboardKey::KEY_D),
            toggle_debug: BoolState::bound_to(KeyboardKey::KEY_F3),
        }
    }
}

impl InputState {
    /// Key state driving movement in the given direction.
    pub fn direction(&self, facing: Facing) -> &BoolState {
        match facing {
            Facing::Up => &self.move_up,
            Facing::Left => &self.move_left,
            Facing::Down => &self.move_down,
            Facing::Right => &self.move_right,
        }
    }

    /// Refresh every binding from a held-key query.
    pub fn sample(&mut self, is_key_down: impl Fn(KeyboardKey) -> bool) {
        for state in [
            &mut self.move_up,
            &mut self.move_left,
            &mut self.move_down,
            &mut self.move_right,
            &mut self.toggle_debug,
        ] {
            let down = is_key_down(state.key_binding);
            state.update(down);
        }
    }
}
