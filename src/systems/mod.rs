//! Frame systems.
//!
//! Submodules overview
//! - [`animation`] – pick the walk-cycle frame from facing and moving state
//! - [`camera`] – follow the player, clamped to the map, pixel-snapped
//! - [`input`] – sample the keyboard into [`crate::resources::input::InputState`]
//!   and fire the debug toggle
//! - [`movement`] – axis-separated collision resolution and map clamping
//! - [`playercontroller`] – translate held keys into step, facing and moving
//! - [`render`] – draw the world and the debug line using raylib
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod camera;
pub mod input;
pub mod movement;
pub mod playercontroller;
pub mod render;
pub mod time;
