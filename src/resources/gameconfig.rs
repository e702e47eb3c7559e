//! Game configuration resource.
//!
//! Settings loaded from an INI file. Every value has a safe default, so a
//! missing or partial file still starts the game.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 320
//! height = 180
//!
//! [window]
//! width = 1280
//! height = 720
//! vsync = true
//! target_fps = 60
//!
//! [player]
//! speed = 80
//!
//! [assets]
//! map = ./assets/maps/map.tmj
//! sprite_sheet = ./assets/sprites/frog-sprite-sheet.png
//! frame_size = 16
//! frame_duration = 0.12
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::player::DEFAULT_PLAYER_SPEED;
use crate::resources::animationstore::{DEFAULT_FRAME_DURATION, DEFAULT_FRAME_SIZE};

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 320;
const DEFAULT_RENDER_HEIGHT: u32 = 180;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_MAP_PATH: &str = "./assets/maps/map.tmj";
const DEFAULT_SPRITE_SHEET_PATH: &str = "./assets/sprites/frog-sprite-sheet.png";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Virtual render width in pixels.
    pub render_width: u32,
    /// Virtual render height in pixels.
    pub render_height: u32,
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    /// Player walking speed in pixels per second.
    pub player_speed: f32,
    /// Tiled JSON map.
    pub map_path: PathBuf,
    /// Player sprite sheet.
    pub sprite_sheet_path: PathBuf,
    /// Side of one square sheet cell in pixels.
    pub frame_size: u32,
    /// Seconds per walk frame.
    pub frame_duration: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            player_speed: DEFAULT_PLAYER_SPEED,
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            sprite_sheet_path: PathBuf::from(DEFAULT_SPRITE_SHEET_PATH),
            frame_size: DEFAULT_FRAME_SIZE,
            frame_duration: DEFAULT_FRAME_DURATION,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, vsync={}, map={:?}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.map_path
        );

        Ok(())
    }

    /// Parse configuration from INI text. Used by tests and embedded defaults.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = speed as f32;
        }

        // [assets] section
        if let Some(map) = config.get("assets", "map") {
            self.map_path = PathBuf::from(map);
        }
        if let Some(sheet) = config.get("assets", "sprite_sheet") {
            self.sprite_sheet_path = PathBuf::from(sheet);
        }
        if let Some(size) = config.getuint("assets", "frame_size").ok().flatten() {
            self.frame_size = size as u32;
        }
        if let Some(duration) = config.getfloat("assets", "frame_duration").ok().flatten() {
            self.frame_duration = duration as f32;
        }
    }

    /// Player spawn: centre of the virtual viewport, minus half the player.
    pub fn spawn_position(&self, player_width: f32, player_height: f32) -> (f32, f32) {
        (
            self.render_width as f32 / 2.0 - player_width / 2.0,
            self.render_height as f32 / 2.0 - player_height / 2.0,
        )
    }
}
