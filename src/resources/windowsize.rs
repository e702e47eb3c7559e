//! Window size resource.
//!
//! Tracks the OS window dimensions in pixels, which differ from the virtual
//! render resolution. Only updated from resize notifications that carry a
//! positive size; a minimised window reports 0x0 and is ignored.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Apply a resize notification. Returns false and leaves the size
    /// untouched when either dimension is non-positive.
    pub fn apply_resize(&mut self, w: i32, h: i32) -> bool {
        if w <= 0 || h <= 0 {
            return false;
        }
        self.w = w;
        self.h = h;
        true
    }

    /// Destination rectangle that fits the virtual resolution into the window.
    ///
    /// Preserves the aspect ratio and centres the content, adding bars on the
    /// sides (pillarbox) or top and bottom (letterbox) as needed.
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        let game_aspect = game_w / game_h;
        let window_aspect = window_w / window_h;

        if window_aspect > game_aspect {
            // Window is wider than game - pillarbox
            let scale = window_h / game_h;
            let scaled_w = game_w * scale;
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            // Window is taller than game - letterbox
            let scale = window_w / game_w;
            let scaled_h = game_h * scale;
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_resize_is_ignored() {
        let mut size = WindowSize { w: 1280, h: 720 };
        assert!(!size.apply_resize(0, 0));
        assert!(!size.apply_resize(800, 0));
        assert!(!size.apply_resize(-1, 600));
        assert_eq!(size, WindowSize { w: 1280, h: 720 });
        assert!(size.apply_resize(800, 600));
        assert_eq!(size, WindowSize { w: 800, h: 600 });
    }

    #[test]
    fn test_exact_multiple_fills_window() {
        let size = WindowSize { w: 1280, h: 720 };
        let r = size.calculate_letterbox(320, 180);
        assert_eq!((r.x, r.y, r.width, r.height), (0.0, 0.0, 1280.0, 720.0));
    }

    #[test]
    fn test_wide_window_is_pillarboxed() {
        let size = WindowSize { w: 1000, h: 180 };
        let r = size.calculate_letterbox(320, 180);
        assert_eq!(r.width, 320.0);
        assert_eq!(r.x, 340.0);
        assert_eq!(r.y, 0.0);
    }

    #[test]
    fn test_tall_window_is_letterboxed() {
        let size = WindowSize { w: 320, h: 400 };
        let r = size.calculate_letterbox(320, 180);
        assert_eq!(r.height, 180.0);
        assert_eq!(r.y, 110.0);
    }
}
