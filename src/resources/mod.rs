//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, rendering
//! handles, asset data and the loaded map.
//!
//! Overview
//! - `animationstore` – the four directional walk cycles sliced from the sheet
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `collisionset` – static blocking rectangles from the map
//! - `debugmode` – toggles the position/FPS overlay
//! - `gameconfig` – INI-backed settings
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `mapbounds` – map size in pixels
//! - `rendertarget` – fixed-resolution framebuffer
//! - `screensize` – virtual render resolution
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tilemap` – Tiled JSON map model and loader
//! - `windowsize` – OS window size and letterboxing
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod camera2d;
pub mod collisionset;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod mapbounds;
pub mod rendertarget;
pub mod screensize;
pub mod texturestore;
pub mod tilemap;
pub mod windowsize;
pub mod worldtime;
