//! Whole-loop tests: a [`Game`] built from an inline Tiled map, stepped
//! headless with scripted key states.

use raylib::prelude::{KeyboardKey, Vector2};

use frogwalk::app::FrameApp;
use frogwalk::components::boxcollider::{BoxCollider, rects_overlap};
use frogwalk::components::player::Facing;
use frogwalk::components::sprite::Sprite;
use frogwalk::game::Game;
use frogwalk::resources::animationstore::SheetLayout;
use frogwalk::resources::gameconfig::GameConfig;
use frogwalk::resources::tilemap::TiledMap;
use frogwalk::resources::windowsize::WindowSize;

const DT: f32 = 0.0625;

/// 640x320 map with a full-height wall at x 200 and a crate at (100, 150).
const ROOM: &str = r#"{
    "width": 40, "height": 20, "tilewidth": 16, "tileheight": 16,
    "layers": [
        {"type": "tilelayer", "name": "ground", "width": 40, "height": 20,
         "data": [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
                  1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]},
        {"type": "objectgroup", "name": "collision", "objects": [
            {"id": 1, "x": 200, "y": 0, "width": 16, "height": 320},
            {"id": 2, "x": 100, "y": 150, "width": 32, "height": 32}
        ]}
    ],
    "tilesets": [
        {"firstgid": 1, "name": "grass", "image": "grass.png", "columns": 4}
    ]
}"#;

/// 100x300 map: narrower than the 320px view.
const CORRIDOR: &str = r#"{
    "width": 10, "height": 30, "tilewidth": 10, "tileheight": 10,
    "layers": [{"type": "objectgroup", "name": "collision", "objects": []}]
}"#;

fn make_game(json: &str) -> Game {
    let map = TiledMap::from_json(json).unwrap();
    let mut game = Game::new(&GameConfig::new(), &map);
    game.install_sprite_sheet(SheetLayout {
        width: 64,
        height: 64,
        frame_size: 16,
    })
    .unwrap();
    game
}

fn step_holding(game: &mut Game, keys: &[KeyboardKey]) {
    game.step(DT, |k| keys.contains(&k));
}

fn player_sprite(game: &Game) -> Sprite {
    game.world().get::<Sprite>(game.player_entity()).unwrap().clone()
}

#[test]
fn player_starts_at_view_centre_facing_down() {
    let game = make_game(ROOM);
    assert_eq!(game.player_position(), Vector2::new(152.0, 82.0));
    assert_eq!(game.player().facing, Facing::Down);
    assert_eq!(game.camera_target(), Vector2::new(160.0, 90.0));
    assert_eq!(player_sprite(&game).offset, Vector2::new(0.0, 0.0));
    assert!(!game.debug_enabled());
}

#[test]
fn tiles_are_spawned_below_the_player() {
    let mut game = make_game(ROOM);
    let draws = frogwalk::systems::render::collect_draw_list(game.world_mut());
    // Top two rows are grass; columns 0 through 20 touch the 320px view.
    assert_eq!(draws.len(), 2 * 21 + 1);
    assert_eq!(draws.last().unwrap().tex_key, "player");
    assert!(draws[..draws.len() - 1].iter().all(|d| d.tex_key == "tileset:1"));
}

#[test]
fn diagonal_into_wall_stops_x_and_keeps_sliding_y() {
    let mut game = make_game(ROOM);
    for _ in 0..10 {
        step_holding(&mut game, &[KeyboardKey::KEY_D, KeyboardKey::KEY_S]);
    }
    let pos = game.player_position();
    assert_eq!(pos.x, 182.0);
    assert_eq!(pos.y, 132.0);
}

#[test]
fn player_is_clamped_to_map_corner() {
    let mut game = make_game(ROOM);
    for _ in 0..100 {
        step_holding(&mut game, &[KeyboardKey::KEY_A, KeyboardKey::KEY_W]);
    }
    assert_eq!(game.player_position(), Vector2::new(0.0, 0.0));
    assert_eq!(game.camera_target(), Vector2::new(160.0, 90.0));
}

#[test]
fn idle_after_walking_right_shows_right_row_first_frame() {
    let mut game = make_game(ROOM);
    for _ in 0..5 {
        step_holding(&mut game, &[KeyboardKey::KEY_D]);
    }
    assert!(game.player().moving);
    step_holding(&mut game, &[]);

    let player = game.player();
    assert_eq!(player.facing, Facing::Right);
    assert!(!player.moving);
    assert_eq!(player_sprite(&game).offset, Vector2::new(0.0, 32.0));
}

#[test]
fn opposite_keys_cancel_and_later_key_sets_facing() {
    let mut game = make_game(ROOM);
    step_holding(&mut game, &[KeyboardKey::KEY_A, KeyboardKey::KEY_D]);
    let player = game.player();
    assert_eq!(player.facing, Facing::Right);
    assert!(player.moving);
    assert_eq!(game.player_position(), Vector2::new(152.0, 82.0));

    step_holding(&mut game, &[KeyboardKey::KEY_D, KeyboardKey::KEY_S]);
    assert_eq!(game.player().facing, Facing::Down);
}

#[test]
fn debug_key_is_edge_triggered() {
    let mut game = make_game(ROOM);
    for _ in 0..10 {
        step_holding(&mut game, &[KeyboardKey::KEY_F3]);
    }
    assert!(game.debug_enabled());

    step_holding(&mut game, &[]);
    step_holding(&mut game, &[KeyboardKey::KEY_F3]);
    assert!(!game.debug_enabled());
}

#[test]
fn resize_only_touches_window_size() {
    let mut game = make_game(ROOM);
    for _ in 0..3 {
        step_holding(&mut game, &[KeyboardKey::KEY_S]);
    }
    let pos = game.player_position();
    let cam = game.camera_target();
    let before = game.window_size();

    game.resize(0, 0);
    assert_eq!(game.window_size(), before);

    game.resize(800, 600);
    assert_eq!(game.window_size(), WindowSize { w: 800, h: 600 });
    assert_eq!(game.player_position(), pos);
    assert_eq!(game.camera_target(), cam);
}

#[test]
fn camera_is_pinned_to_centre_of_narrow_map() {
    let mut game = make_game(CORRIDOR);
    for _ in 0..20 {
        step_holding(&mut game, &[KeyboardKey::KEY_D]);
        assert_eq!(game.camera_target().x, 50.0);
    }
    for _ in 0..20 {
        step_holding(&mut game, &[KeyboardKey::KEY_A]);
        assert_eq!(game.camera_target().x, 50.0);
    }
    assert_eq!(game.player_position().x, 0.0);
}

#[test]
fn scripted_walk_never_overlaps_a_collider() {
    let map = TiledMap::from_json(ROOM).unwrap();
    let colliders = map.collision_rects().unwrap();
    let mut game = make_game(ROOM);
    let body = BoxCollider::new(16.0, 16.0);

    let script: [&[KeyboardKey]; 6] = [
        &[KeyboardKey::KEY_D, KeyboardKey::KEY_S],
        &[KeyboardKey::KEY_A],
        &[KeyboardKey::KEY_S],
        &[KeyboardKey::KEY_A, KeyboardKey::KEY_W],
        &[KeyboardKey::KEY_D],
        &[KeyboardKey::KEY_W, KeyboardKey::KEY_D],
    ];
    for keys in script.iter().cycle().take(6 * 40) {
        // Hold each input for a while so the walker actually reaches walls.
        for _ in 0..3 {
            step_holding(&mut game, keys);
            let rect = body.rect_at(game.player_position());
            assert!(
                colliders.iter().all(|c| !rects_overlap(&rect, c)),
                "player overlaps a collider at {:?}",
                game.player_position()
            );
        }
    }
}

#[test]
fn bundled_map_loads_and_spawn_is_clear() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/maps/map.tmj");
    let map = TiledMap::load(&path).unwrap();
    assert_eq!(map.pixel_size(), (640.0, 480.0));

    let colliders = map.collision_rects().unwrap();
    assert!(!colliders.is_empty());
    let game = Game::new(&GameConfig::new(), &map);
    let spawn = BoxCollider::new(16.0, 16.0).rect_at(game.player_position());
    assert!(colliders.iter().all(|c| !rects_overlap(&spawn, c)));

    let images = map.tileset_images(&path);
    assert_eq!(images.len(), 1);
    assert!(images[0].1.ends_with("tiles/terrain.png"));
}
