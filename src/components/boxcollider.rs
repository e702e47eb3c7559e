use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
        }
    }

    /// World-space rectangle of the collider for an entity at `position`.
    pub fn rect_at(&self, position: Vector2) -> Rectangle {
        Rectangle {
            x: position.x,
            y: position.y,
            width: self.size.x,
            height: self.size.y,
        }
    }
}

/// AABB vs AABB overlap test.
///
/// Strict on every edge: rectangles that only touch do not overlap, and a
/// rectangle with zero width or height never overlaps anything.
pub fn rects_overlap(a: &Rectangle, b: &Rectangle) -> bool {
    has_area(a)
        && has_area(b)
        && a.x < b.x + b.width
        && a.x + a.width > b.x
        && a.y < b.y + b.height
        && a.y + a.height > b.y
}

fn has_area(r: &Rectangle) -> bool {
    r.width > 0.0 && r.height > 0.0
}
