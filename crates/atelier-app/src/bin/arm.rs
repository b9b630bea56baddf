//! Articulated-arm demo: three display lists compiled once, replayed every
//! frame with accumulating joint angles. The keyboard still edits the
//! (undrawn) scene and the palette overlay still works while SPACE is held.

use anyhow::Result;
use clap::Parser;
use glam::{Affine2, Vec2};
use sdl2::{
    event::{Event, WindowEvent},
    mouse::MouseButton,
    pixels::Color,
};

use atelier::{
    arm::{Arm, JointAngles},
    board::{Action, Board, Mode},
    palette,
    viewport::{Extents, Viewport},
};
use atelier_app::{
    bindings::Bindings,
    raster::CanvasRaster,
    window::{self, Dimensions, FrameLimiter},
};

/// Degrees added to every joint each rendered frame.
const ANGLE_STEP: f32 = 1.0;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long, default_value = "700x700")]
    /// Window dimensions in format `width`x`height`
    dimensions: Dimensions,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let sdl = window::init_sdl()?;
    let mut canvas = window::create_canvas(&sdl, "atelier arm", args.dimensions)?;
    let mut event_pump = sdl.event_pump().map_err(anyhow::Error::msg)?;

    let mut viewport = Viewport::new(
        args.dimensions.width,
        args.dimensions.height,
        Extents::symmetric(Vec2::splat(100.0)),
    );
    let mut board = Board::new();
    let bindings = Bindings::default();

    let arm = Arm::new();
    let mut spin = 50.0;

    let mut limiter = FrameLimiter::start();
    while board.is_running() {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => board.apply(Action::Quit),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(action) = bindings.press(key) {
                        board.apply(action);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(action) = bindings.release(key) {
                        board.apply(action);
                    }
                }
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => board.click(x, y, &viewport),
                Event::Window {
                    win_event: WindowEvent::SizeChanged(w, h),
                    ..
                } => viewport.resize(w as u32, h as u32),
                _ => {}
            }
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        {
            let mut raster = CanvasRaster::new(&mut canvas, viewport);
            if board.mode() == Mode::PaletteSelect {
                palette::swatches(viewport.extents).draw(&mut raster, Affine2::IDENTITY)?;
            } else {
                spin += ANGLE_STEP;
                arm.draw(
                    &mut raster,
                    JointAngles {
                        shoulder: 45.0 + spin,
                        elbow: -10.0 + spin,
                        wrist: 35.0 + spin,
                    },
                )?;
            }
        }
        canvas.present();

        limiter.wait();
    }

    Ok(())
}
