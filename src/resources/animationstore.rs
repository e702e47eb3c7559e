//! Walk-cycle definitions sliced from the sprite sheet.
//!
//! The sheet is a grid of square frames. Each of the first four rows is one
//! looping walk cycle (down, left, right, up); every row has as many frames
//! as the sheet has columns. The store is built once after the sheet is
//! loaded and is immutable afterwards.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::components::player::Facing;

/// Default seconds each walk frame stays on screen.
pub const DEFAULT_FRAME_DURATION: f32 = 0.12;
/// Default side of a square sheet cell in pixels.
pub const DEFAULT_FRAME_SIZE: u32 = 16;

/// Immutable data describing one looping sprite-sheet animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: String,
    /// Sheet row holding the frames.
    pub row: usize,
    /// Number of frames in the row.
    pub frame_count: usize,
    /// Side of a square frame in pixels.
    pub frame_size: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl AnimationResource {
    /// Frame shown after `elapsed` seconds of playback; wraps after the last.
    pub fn key_frame_index(&self, elapsed: f32) -> usize {
        if self.frame_count <= 1 || self.frame_duration <= 0.0 {
            return 0;
        }
        let frame = (elapsed / self.frame_duration).max(0.0) as usize;
        frame % self.frame_count
    }

    /// Top-left of `frame_index` inside the sheet.
    pub fn frame_offset(&self, frame_index: usize) -> Vector2 {
        Vector2 {
            x: frame_index as f32 * self.frame_size,
            y: self.row as f32 * self.frame_size,
        }
    }
}

/// Layout of a sprite sheet, measured from the loaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub width: u32,
    pub height: u32,
    pub frame_size: u32,
}

impl SheetLayout {
    pub fn columns(&self) -> u32 {
        self.width / self.frame_size.max(1)
    }

    pub fn rows(&self) -> u32 {
        self.height / self.frame_size.max(1)
    }
}

/// The four directional walk cycles of the player.
#[derive(Resource, Debug, Clone)]
pub struct AnimationStore {
    down: AnimationResource,
    left: AnimationResource,
    right: AnimationResource,
    up: AnimationResource,
}

impl AnimationStore {
    /// Slice a sheet into four looping rows.
    ///
    /// Fails if the sheet has fewer than four rows or no full column.
    pub fn from_sheet(
        tex_key: impl Into<String>,
        layout: SheetLayout,
        frame_duration: f32,
    ) -> anyhow::Result<Self> {
        if layout.frame_size == 0 {
            anyhow::bail!("sprite sheet frame size must be positive");
        }
        if layout.columns() < 1 || layout.rows() < 4 {
            anyhow::bail!(
                "sprite sheet {}x{} holds {}x{} frames of {}px, need at least 1x4",
                layout.width,
                layout.height,
                layout.columns(),
                layout.rows(),
                layout.frame_size
            );
        }
        let tex_key = tex_key.into();
        let cycle = |facing: Facing| AnimationResource {
            tex_key: tex_key.clone(),
            row: facing.row(),
            frame_count: layout.columns() as usize,
            frame_size: layout.frame_size as f32,
            frame_duration,
        };
        Ok(Self {
            down: cycle(Facing::Down),
            left: cycle(Facing::Left),
            right: cycle(Facing::Right),
            up: cycle(Facing::Up),
        })
    }

    pub fn get(&self, facing: Facing) -> &AnimationResource {
        match facing {
            Facing::Down => &self.down,
            Facing::Left => &self.left,
            Facing::Right => &self.right,
            Facing::Up => &self.up,
        }
    }
}
