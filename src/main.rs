//! frogwalk entry point.
//!
//! A minimal top-down game written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - **bevy_ecs** for the per-frame simulation
//!
//! # Main Loop
//!
//! 1. Parse the command line and load `config.ini` (defaults if missing)
//! 2. Load the Tiled map and build the ECS world
//! 3. Open the window, load the sprite sheet and tilesets
//! 4. Every frame: sample input, move with collision, animate, follow with
//!    the camera, render
//! 5. Release textures before the window closes
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --map assets/maps/map.tmj
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use frogwalk::app;
use frogwalk::game::Game;
use frogwalk::resources::gameconfig::GameConfig;
use frogwalk::resources::tilemap::TiledMap;

/// Walk a frog around a Tiled map.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Tiled JSON map to load, overriding the config file.
    #[arg(long, value_name = "PATH")]
    map: Option<PathBuf>,

    /// Player sprite sheet, overriding the config file.
    #[arg(long, value_name = "PATH")]
    sprite_sheet: Option<PathBuf>,

    /// Start with the debug overlay visible.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{e}, using defaults");
    }
    if let Some(map) = cli.map {
        config.map_path = map;
    }
    if let Some(sheet) = cli.sprite_sheet {
        config.sprite_sheet_path = sheet;
    }

    // Fail on a bad map before a window ever opens.
    let map = TiledMap::load(&config.map_path)?;

    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("frogwalk");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    info!("Window open at {}x{}", config.window_width, config.window_height);

    // Declared after `rl` so it is dropped first, releasing its textures
    // before the window closes, also when unwinding.
    let mut game = Game::new(&config, &map);
    if cli.debug {
        game.set_debug(true);
    }
    app::run(&mut game, &mut rl, &thread)
}
