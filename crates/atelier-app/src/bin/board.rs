//! The full drawing board: interactive primitives, palette, canonical
//! overlay shapes, right-drag view rotation.

use anyhow::Result;
use clap::Parser;
use glam::{Affine2, Vec2};
use rand::Rng;
use sdl2::{
    event::{Event, WindowEvent},
    mouse::MouseButton,
    pixels::Color,
};

use atelier::{
    board::{Action, Board, Mode},
    color,
    display::{DisplayList, ListBuilder},
    palette, render, shapes,
    viewport::{Extents, Viewport},
};
use atelier_app::{
    bindings::Bindings,
    raster::CanvasRaster,
    window::{self, Dimensions, FrameLimiter},
};

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long, default_value = "800x600")]
    /// Window dimensions in format `width`x`height`
    dimensions: Dimensions,
}

fn shape_list(f: impl FnOnce(&mut ListBuilder)) -> DisplayList {
    let mut b = ListBuilder::new();
    f(&mut b);
    b.build()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let sdl = window::init_sdl()?;
    let mut canvas = window::create_canvas(&sdl, "atelier board", args.dimensions)?;
    let mut event_pump = sdl.event_pump().map_err(anyhow::Error::msg)?;

    let mut viewport = Viewport::new(
        args.dimensions.width,
        args.dimensions.height,
        Extents::symmetric(Vec2::new(4.0, 3.0)),
    );
    let mut board = Board::new();
    let bindings = Bindings::default();
    let mut rng = rand::thread_rng();

    let square_outline = shape_list(|b| shapes::square(b, color::YELLOW, false));
    let square_filled = shape_list(|b| shapes::square(b, color::YELLOW, true));
    let jitter_outline = shape_list(|b| shapes::square(b, color::BLUE, false));
    let jitter_filled = shape_list(|b| shapes::square(b, color::BLUE, true));
    let landmark = shape_list(shapes::landmark);

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
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Right,
                    ..
                } => board.drag_start(),
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => board.click(x, y, &viewport),
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Right,
                    ..
                } => board.drag_end(),
                Event::MouseMotion { x, y, .. } => board.motion(x, y, &viewport),
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
                let view = Affine2::from_angle(board.view_rotation().to_radians());
                render::draw_scene(&mut raster, board.scene(), view)?;

                let square = if board.filled() {
                    &square_filled
                } else {
                    &square_outline
                };
                square.draw(&mut raster, view)?;

                let jitter = Vec2::new(
                    rng.gen_range(-1..=1) as f32,
                    rng.gen_range(-1..=1) as f32,
                );
                let jitter_square = if board.filled() {
                    &jitter_filled
                } else {
                    &jitter_outline
                };
                jitter_square.draw(&mut raster, view * Affine2::from_translation(jitter))?;

                landmark.draw(&mut raster, Affine2::IDENTITY)?;
            }
        }
        canvas.present();

        limiter.wait();
    }

    Ok(())
}
