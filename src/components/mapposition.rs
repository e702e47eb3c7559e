//! World-space position component.
//!
//! [`MapPosition`] stores the top-left corner of an entity in map pixels.
//! The y axis grows downwards, matching raylib's screen convention.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Top-left corner of an entity in world pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Position snapped to whole pixels, used when submitting draw calls.
    pub fn rounded(&self) -> Vector2 {
        Vector2 {
            x: self.pos.x.round(),
            y: self.pos.y.round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_snaps_to_nearest_pixel() {
        let p = MapPosition::new(10.4, 20.6);
        let r = p.rounded();
        assert_eq!(r.x, 10.0);
        assert_eq!(r.y, 21.0);
    }
}
