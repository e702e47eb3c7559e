//! frogwalk library.
//!
//! A top-down tile-map walker: one sprite, static rectangle collision,
//! a following camera and a debug overlay, built on raylib and bevy_ecs.
//! The modules are exposed for the binary and for integration tests.

pub mod app;
pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
