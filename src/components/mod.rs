//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – playback clock and selected frame of the walk cycle
//! - [`boxcollider`] – axis-aligned footprint used for collision tests
//! - [`mapposition`] – world-space position (top-left) of an entity
//! - [`player`] – movement intent, facing and moving state of the walker
//! - [`sprite`] – textured quad drawn from a sheet or tileset
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod mapposition;
pub mod player;
pub mod sprite;
pub mod zindex;
