//! Static collision geometry.
//!
//! The rectangles come from the map's `collision` object layer and never
//! change after load.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;

use crate::components::boxcollider::rects_overlap;

#[derive(Resource, Debug, Clone, Default)]
pub struct CollisionSet {
    pub rects: Vec<Rectangle>,
}

impl CollisionSet {
    pub fn new(rects: Vec<Rectangle>) -> Self {
        Self { rects }
    }

    /// True if `rect` overlaps any blocking rectangle.
    pub fn hits(&self, rect: &Rectangle) -> bool {
        self.rects.iter().any(|c| rects_overlap(c, rect))
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_never_hits() {
        let set = CollisionSet::default();
        assert!(!set.hits(&Rectangle::new(0.0, 0.0, 100.0, 100.0)));
    }

    #[test]
    fn test_hits_any_rect() {
        let set = CollisionSet::new(vec![
            Rectangle::new(0.0, 0.0, 10.0, 10.0),
            Rectangle::new(50.0, 50.0, 10.0, 10.0),
        ]);
        assert!(set.hits(&Rectangle::new(55.0, 55.0, 16.0, 16.0)));
        assert!(!set.hits(&Rectangle::new(10.0, 10.0, 16.0, 16.0)));
    }
}
