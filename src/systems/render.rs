use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;

/// Background behind the map, rgb(0.12, 0.14, 0.20).
pub const CLEAR_COLOR: Color = Color::new(31, 36, 51, 255);
/// Bars around the letterboxed render target.
pub const LETTERBOX_COLOR: Color = Color::BLACK;
/// Screen position and size of the debug line.
const DEBUG_TEXT_X: i32 = 4;
const DEBUG_TEXT_Y: i32 = 4;
const DEBUG_FONT_SIZE: i32 = 10;

/// One textured quad ready for submission.
#[derive(Debug, Clone)]
pub struct SpriteDraw {
    pub tex_key: String,
    pub src: Rectangle,
    pub dest: Rectangle,
    pub z: ZIndex,
}

/// Build the z-ordered list of sprites visible through the camera.
///
/// Positions are rounded to whole pixels. The visible world rectangle is
/// derived from the camera target and offset, so no draw handle is needed.
pub fn collect_draw_list(world: &mut World) -> Vec<SpriteDraw> {
    let cam = world.resource::<Camera2DRes>().0;
    let screen = *world.resource::<ScreenSize>();

    let view_min = Vector2 {
        x: cam.target.x - cam.offset.x / cam.zoom,
        y: cam.target.y - cam.offset.y / cam.zoom,
    };
    let view_max = Vector2 {
        x: view_min.x + screen.w as f32 / cam.zoom,
        y: view_min.y + screen.h as f32 / cam.zoom,
    };

    let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
    let mut to_draw: Vec<SpriteDraw> = q
        .iter(world)
        .filter_map(|(sprite, position, z)| {
            let pos = position.rounded();
            let max = Vector2 {
                x: pos.x + sprite.width,
                y: pos.y + sprite.height,
            };
            let outside = max.x < view_min.x
                || pos.x > view_max.x
                || max.y < view_min.y
                || pos.y > view_max.y;
            if outside {
                return None;
            }
            Some(SpriteDraw {
                tex_key: sprite.tex_key.clone(),
                src: Rectangle {
                    x: sprite.offset.x,
                    y: sprite.offset.y,
                    width: sprite.width,
                    height: sprite.height,
                },
                dest: Rectangle {
                    x: pos.x,
                    y: pos.y,
                    width: sprite.width,
                    height: sprite.height,
                },
                z: *z,
            })
        })
        .collect();

    // Stable sort keeps map order within a layer.
    to_draw.sort_by_key(|draw| draw.z);
    to_draw
}

/// Text of the debug line, or `None` while the overlay is off.
pub fn debug_overlay_text(world: &mut World, fps: u32) -> Option<String> {
    if !world.get_resource::<DebugMode>().is_some_and(|d| d.enabled) {
        return None;
    }
    let mut q = world.query_filtered::<&MapPosition, With<Player>>();
    let position = q.iter(world).next()?;
    Some(format!(
        "x = {} y = {} fps = {}",
        position.pos.x as i32, position.pos.y as i32, fps
    ))
}

/// Draw one frame: world into the render target, then the target into the window.
pub fn render_frame(
    world: &mut World,
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    target: &mut RenderTarget,
) {
    let draws = collect_draw_list(world);
    let overlay = debug_overlay_text(world, rl.get_fps());
    let cam = world.resource::<Camera2DRes>().0;
    let window = *world.resource::<WindowSize>();
    let textures = world.non_send_resource::<TextureStore>();

    let mut d = rl.begin_drawing(th);
    {
        let mut td = d.begin_texture_mode(th, &mut target.texture);
        td.clear_background(CLEAR_COLOR);
        {
            let mut d2 = td.begin_mode2D(cam);
            for draw in &draws {
                if let Some(tex) = textures.get(&draw.tex_key) {
                    d2.draw_texture_pro(tex, draw.src, draw.dest, Vector2::zero(), 0.0, Color::WHITE);
                }
            }
        }
        if let Some(text) = &overlay {
            td.draw_text(text, DEBUG_TEXT_X, DEBUG_TEXT_Y, DEBUG_FONT_SIZE, Color::WHITE);
        }
    }

    d.clear_background(LETTERBOX_COLOR);
    let dest = window.calculate_letterbox(target.game_width, target.game_height);
    d.draw_texture_pro(
        &target.texture,
        target.source_rect(),
        dest,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );
}
