//! Player-controlled walker.
//!
//! The [`Player`] component carries the movement intent computed from input
//! each frame and the facing/moving state that drives the sprite animation.
//! Position lives in [`MapPosition`](crate::components::mapposition::MapPosition)
//! and the collision footprint in
//! [`BoxCollider`](crate::components::boxcollider::BoxCollider).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Default walking speed in pixels per second.
pub const DEFAULT_PLAYER_SPEED: f32 = 80.0;
/// Player footprint in pixels.
pub const PLAYER_WIDTH: f32 = 16.0;
pub const PLAYER_HEIGHT: f32 = 16.0;

/// Direction the walker looks at. Each variant owns one row of the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Down,
    Left,
    Right,
    Up,
}

impl Facing {
    /// Order in which held direction keys are evaluated each frame.
    /// Every held key overwrites the facing, so the last one checked wins.
    pub const CHECK_ORDER: [Facing; 4] = [Facing::Left, Facing::Right, Facing::Up, Facing::Down];

    /// Sprite sheet row holding this direction's walk cycle.
    pub fn row(self) -> usize {
        match self {
            Facing::Down => 0,
            Facing::Left => 1,
            Facing::Right => 2,
            Facing::Up => 3,
        }
    }

    /// Unit step for this direction (y grows downwards).
    pub fn unit(self) -> Vector2 {
        match self {
            Facing::Down => Vector2 { x: 0.0, y: 1.0 },
            Facing::Left => Vector2 { x: -1.0, y: 0.0 },
            Facing::Right => Vector2 { x: 1.0, y: 0.0 },
            Facing::Up => Vector2 { x: 0.0, y: -1.0 },
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    /// Walking speed in pixels per second.
    pub speed: f32,
    pub facing: Facing,
    /// True while at least one direction key is held.
    pub moving: bool,
    /// Displacement requested this frame, before collision resolution.
    pub step: Vector2,
}

impl Player {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            facing: Facing::Down,
            moving: false,
            step: Vector2::zero(),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_sheet_layout() {
        assert_eq!(Facing::Down.row(), 0);
        assert_eq!(Facing::Left.row(), 1);
        assert_eq!(Facing::Right.row(), 2);
        assert_eq!(Facing::Up.row(), 3);
    }

    #[test]
    fn test_check_order_is_left_right_up_down() {
        assert_eq!(
            Facing::CHECK_ORDER,
            [Facing::Left, Facing::Right, Facing::Up, Facing::Down]
        );
    }

    #[test]
    fn test_up_moves_towards_negative_y() {
        assert_eq!(Facing::Up.unit().y, -1.0);
        assert_eq!(Facing::Down.unit().y, 1.0);
    }

    #[test]
    fn test_new_player_faces_down_and_idles() {
        let p = Player::default();
        assert_eq!(p.facing, Facing::Down);
        assert!(!p.moving);
        assert_eq!(p.speed, DEFAULT_PLAYER_SPEED);
    }
}
