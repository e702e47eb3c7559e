//! Frame application lifecycle.
//!
//! [`FrameApp`] is the contract between a windowing backend and the game:
//! acquire resources once, then update, render and occasionally resize every
//! frame, and release everything once at the end. [`run`] drives any
//! implementation with a raylib window.

use log::info;
use raylib::prelude::*;

pub trait FrameApp {
    /// Acquire GPU resources. Called once, after the window exists.
    fn init(&mut self, rl: &mut RaylibHandle, th: &RaylibThread) -> anyhow::Result<()>;

    /// Advance the simulation by `dt` seconds with the current held keys.
    fn update(&mut self, dt: f32, is_key_down: &dyn Fn(KeyboardKey) -> bool);

    /// Submit this frame's draw calls.
    fn render(&mut self, rl: &mut RaylibHandle, th: &RaylibThread);

    /// The window changed size. Non-positive sizes must be ignored.
    fn resize(&mut self, width: i32, height: i32);

    /// Release everything acquired in `init`. Must be safe to call twice.
    fn dispose(&mut self);
}

/// Run `app` until the window is closed.
///
/// If `init` fails the error is returned without entering the loop; the
/// implementation is expected to release partial acquisitions on drop.
pub fn run<A: FrameApp>(app: &mut A, rl: &mut RaylibHandle, th: &RaylibThread) -> anyhow::Result<()> {
    app.init(rl, th)?;
    app.resize(rl.get_screen_width(), rl.get_screen_height());
    info!("Entering main loop");

    while !rl.window_should_close() {
        if rl.is_window_resized() {
            app.resize(rl.get_screen_width(), rl.get_screen_height());
        }
        let dt = rl.get_frame_time();
        app.update(dt, &|key| rl.is_key_down(key));
        app.render(rl, th);
    }

    info!("Window closed, shutting down");
    app.dispose();
    Ok(())
}
