//! Z-index component for render ordering.
//!
//! Entities with higher z-index values are drawn on top of those with lower
//! values. Tile layers get negative values in map order, the player sits at 0.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing. Higher values are drawn later.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
