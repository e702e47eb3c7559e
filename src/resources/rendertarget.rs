//! Render target resource for fixed-resolution rendering.
//!
//! The world is drawn into a framebuffer texture at the virtual resolution and
//! then scaled into the window by
//! [`WindowSize::calculate_letterbox`](crate::resources::windowsize::WindowSize::calculate_letterbox).
//! Point filtering keeps the pixel art sharp at any scale.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Framebuffer at the game's virtual resolution.
///
/// Non-send resource: `RenderTexture2D` owns GPU memory that must be released
/// on the main thread, before the window closes.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
}

impl RenderTarget {
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| anyhow::anyhow!("failed to create {width}x{height} render texture: {e}"))?;

        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }

        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Source rectangle for blitting the whole target.
    ///
    /// The height is negative to flip the Y axis, compensating for OpenGL's
    /// inverted render-texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}
