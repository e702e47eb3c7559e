//! World setup and the [`Game`] frame application.
//!
//! [`Game`] owns the ECS world and the update schedule. Building it only
//! needs parsed data (config and map), so the whole simulation can run
//! headless; [`FrameApp::init`] adds the GPU side (textures and the render
//! target) once a window exists.

use std::path::PathBuf;

use anyhow::Context;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::{debug, info, warn};
use raylib::prelude::*;

use crate::app::FrameApp;
use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::{PLAYER_HEIGHT, PLAYER_WIDTH, Player};
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationstore::{AnimationStore, SheetLayout};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::collisionset::CollisionSet;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::mapbounds::MapBounds;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::{COLLISION_LAYER, TiledMap};
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::camera::{camera_follow, camera_target};
use crate::systems::input::{debug_toggle, update_input_state};
use crate::systems::movement::movement;
use crate::systems::playercontroller::player_controller;
use crate::systems::render::render_frame;
use crate::systems::time::update_world_time;

/// Texture key of the player sprite sheet.
pub const SPRITE_SHEET_KEY: &str = "player";

pub struct Game {
    world: World,
    update: Schedule,
    player: Entity,
    tileset_images: Vec<(String, PathBuf)>,
    render_target: Option<RenderTarget>,
    gpu_loaded: bool,
}

impl Game {
    /// Build the world: resources, tile sprites, the player and the schedule.
    pub fn new(config: &GameConfig, map: &TiledMap) -> Self {
        let mut world = World::new();

        let screen = ScreenSize {
            w: config.render_width as i32,
            h: config.render_height as i32,
        };
        let (map_w, map_h) = map.pixel_size();
        let bounds = MapBounds::new(map_w, map_h);

        let colliders = match map.collision_rects() {
            Some(rects) => CollisionSet::new(rects),
            None => {
                warn!("Map has no {COLLISION_LAYER:?} layer, nothing will block movement");
                CollisionSet::default()
            }
        };
        info!(
            "Map is {}x{}px with {} collision rectangles",
            map_w,
            map_h,
            colliders.len()
        );

        spawn_tiles(&mut world, map);
        let player = spawn_player(&mut world, config, &colliders);

        let player_pos = world
            .get::<MapPosition>(player)
            .map(|p| p.pos)
            .unwrap_or_else(Vector2::zero);
        let size = Vector2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        let camera = Camera2DRes::centered(screen, camera_target(player_pos, size, screen, bounds));

        world.insert_resource(WorldTime::default());
        world.insert_resource(InputState::default());
        world.insert_resource(DebugMode::default());
        world.insert_resource(screen);
        world.insert_resource(WindowSize {
            w: config.window_width as i32,
            h: config.window_height as i32,
        });
        world.insert_resource(bounds);
        world.insert_resource(colliders);
        world.insert_resource(camera);
        world.insert_resource(config.clone());
        world.insert_non_send_resource(TextureStore::new());

        world.spawn(Observer::new(switch_debug_observer));
        world.flush();

        let mut update = Schedule::default();
        update.set_executor_kind(ExecutorKind::SingleThreaded);
        update.add_systems(
            (
                debug_toggle,
                player_controller,
                movement,
                animation,
                camera_follow,
            )
                .chain(),
        );

        Self {
            world,
            update,
            player,
            tileset_images: map.tileset_images(&config.map_path),
            render_target: None,
            gpu_loaded: false,
        }
    }

    /// Slice the player sheet into walk cycles and show the idle frame.
    pub fn install_sprite_sheet(&mut self, layout: SheetLayout) -> anyhow::Result<()> {
        let frame_duration = self.world.resource::<GameConfig>().frame_duration;
        let store = AnimationStore::from_sheet(SPRITE_SHEET_KEY, layout, frame_duration)?;
        let facing = self.player().facing;
        let idle = store.get(facing).frame_offset(0);
        if let Some(mut sprite) = self.world.get_mut::<Sprite>(self.player) {
            sprite.offset = idle;
        }
        self.world.insert_resource(store);
        Ok(())
    }

    /// Run one simulation step without a window.
    pub fn step(&mut self, dt: f32, is_key_down: impl Fn(KeyboardKey) -> bool) {
        update_world_time(&mut self.world, dt);
        update_input_state(&mut self.world, is_key_down);
        self.update.run(&mut self.world);
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.world.resource_mut::<DebugMode>().enabled = enabled;
    }

    pub fn debug_enabled(&self) -> bool {
        self.world.resource::<DebugMode>().enabled
    }

    pub fn player_entity(&self) -> Entity {
        self.player
    }

    pub fn player_position(&self) -> Vector2 {
        self.world
            .get::<MapPosition>(self.player)
            .map(|p| p.pos)
            .unwrap_or_else(Vector2::zero)
    }

    pub fn player(&self) -> Player {
        self.world
            .get::<Player>(self.player)
            .copied()
            .unwrap_or_default()
    }

    pub fn camera_target(&self) -> Vector2 {
        self.world.resource::<Camera2DRes>().0.target
    }

    pub fn window_size(&self) -> WindowSize {
        *self.world.resource::<WindowSize>()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn load_textures(&mut self, rl: &mut RaylibHandle, th: &RaylibThread) -> anyhow::Result<()> {
        let config = self.world.resource::<GameConfig>().clone();

        let sheet = rl
            .load_texture(th, &config.sprite_sheet_path.to_string_lossy())
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| {
                format!("failed to load sprite sheet {}", config.sprite_sheet_path.display())
            })?;
        let layout = SheetLayout {
            width: sheet.width.max(0) as u32,
            height: sheet.height.max(0) as u32,
            frame_size: config.frame_size,
        };
        self.install_sprite_sheet(layout)
            .with_context(|| format!("bad sprite sheet {}", config.sprite_sheet_path.display()))?;
        debug!(
            "Sprite sheet {}x{}: {} frames per cycle",
            layout.width,
            layout.height,
            layout.columns()
        );

        let mut textures = TextureStore::new();
        textures.insert(SPRITE_SHEET_KEY, sheet);
        for (key, path) in &self.tileset_images {
            let texture = rl
                .load_texture(th, &path.to_string_lossy())
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("failed to load tileset image {}", path.display()))?;
            textures.insert(key.as_str(), texture);
        }
        info!("Loaded {} textures", textures.len());
        self.world.insert_non_send_resource(textures);
        Ok(())
    }
}

impl FrameApp for Game {
    fn init(&mut self, rl: &mut RaylibHandle, th: &RaylibThread) -> anyhow::Result<()> {
        self.load_textures(rl, th)?;
        let screen = *self.world.resource::<ScreenSize>();
        self.render_target = Some(RenderTarget::new(
            rl,
            th,
            screen.w as u32,
            screen.h as u32,
        )?);
        self.gpu_loaded = true;
        Ok(())
    }

    fn update(&mut self, dt: f32, is_key_down: &dyn Fn(KeyboardKey) -> bool) {
        self.step(dt, is_key_down);
    }

    fn render(&mut self, rl: &mut RaylibHandle, th: &RaylibThread) {
        if let Some(target) = self.render_target.as_mut() {
            render_frame(&mut self.world, rl, th, target);
        }
    }

    fn resize(&mut self, width: i32, height: i32) {
        let mut window = self.world.resource_mut::<WindowSize>();
        if window.apply_resize(width, height) {
            debug!("Window resized to {width}x{height}");
        } else {
            debug!("Ignoring resize to {width}x{height}");
        }
    }

    fn dispose(&mut self) {
        if !self.gpu_loaded {
            return;
        }
        self.render_target = None;
        if let Some(mut textures) = self.world.get_non_send_resource_mut::<TextureStore>() {
            textures.clear();
        }
        self.gpu_loaded = false;
        let time = self.world.resource::<WorldTime>();
        info!(
            "Released GPU resources after {} frames ({:.1}s)",
            time.frame_count, time.elapsed
        );
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Spawn one sprite per non-empty tile. With N tile layers the first is
/// drawn at z -N and the last at -1, all below the player.
fn spawn_tiles(world: &mut World, map: &TiledMap) {
    let layer_count = map.layers.len() as i32;
    let tiles = map.tile_placements();
    debug!("Spawning {} tiles", tiles.len());
    world.spawn_batch(tiles.into_iter().map(move |tile| {
        (
            MapPosition::new(tile.position.x, tile.position.y),
            Sprite::new(tile.tex_key, tile.width, tile.height).with_offset(tile.offset.x, tile.offset.y),
            ZIndex(-(layer_count - tile.layer_index as i32)),
        )
    }));
}

fn spawn_player(world: &mut World, config: &GameConfig, colliders: &CollisionSet) -> Entity {
    let (x, y) = config.spawn_position(PLAYER_WIDTH, PLAYER_HEIGHT);
    let collider = BoxCollider::new(PLAYER_WIDTH, PLAYER_HEIGHT);
    if colliders.hits(&collider.rect_at(Vector2::new(x, y))) {
        warn!("Player spawns inside a collision rectangle at ({x}, {y})");
    }
    world
        .spawn((
            Player::new(config.player_speed),
            MapPosition::new(x, y),
            collider,
            Animation::default(),
            Sprite::new(SPRITE_SHEET_KEY, PLAYER_WIDTH, PLAYER_HEIGHT),
            ZIndex(0),
        ))
        .id()
}
