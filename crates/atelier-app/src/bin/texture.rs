//! Image viewer: decodes an image at startup, uploads it into a streaming
//! texture and draws it on a center quad squeezed to half width. A missing
//! or unreadable image is fatal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use sdl2::{
    event::{Event, WindowEvent},
    pixels::{Color, PixelFormatEnum},
    rect::Rect,
};

use atelier::viewport::{Extents, Viewport};
use atelier_app::window::{self, Dimensions, FrameLimiter};

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long, default_value = "800x800")]
    /// Window dimensions in format `width`x`height`
    dimensions: Dimensions,

    /// Image file drawn on the quad
    #[arg(default_value = "images.bmp")]
    image: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let sdl = window::init_sdl()?;
    let mut canvas = window::create_canvas(&sdl, "atelier texture", args.dimensions)?;
    let mut event_pump = sdl.event_pump().map_err(anyhow::Error::msg)?;

    let mut viewport = Viewport::new(
        args.dimensions.width,
        args.dimensions.height,
        Extents::symmetric(Vec2::ONE),
    );

    let image = image::open(&args.image)
        .with_context(|| format!("could not load {}", args.image.display()))?
        .to_rgb8();
    let (width, height) = image.dimensions();
    log::info!("loaded {} ({width}x{height})", args.image.display());

    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::RGB24, width, height)
        .context("could not allocate the texture")?;
    texture
        .update(None, image.as_raw(), 3 * width as usize)
        .context("could not upload the texture")?;

    let mut running = true;
    let mut limiter = FrameLimiter::start();
    while running {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => running = false,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(w, h),
                    ..
                } => viewport.resize(w as u32, h as u32),
                _ => {}
            }
        }

        canvas.set_draw_color(Color::RGB(26, 26, 26));
        canvas.clear();

        // Unit quad squeezed to half width, mapped through the projection.
        let (x0, y0) = viewport.screen_from_world(Vec2::new(-0.25, 0.5));
        let (x1, y1) = viewport.screen_from_world(Vec2::new(0.25, -0.5));
        let dst = Rect::new(x0, y0, (x1 - x0).max(0) as u32, (y1 - y0).max(0) as u32);
        canvas.copy(&texture, None, dst).map_err(anyhow::Error::msg)?;

        canvas.present();
        limiter.wait();
    }

    Ok(())
}
