use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use sdl2::{render::Canvas, video::Window, Sdl};

/// Minimum interval between two rendered frames.
pub const FRAME_BUDGET: Duration = Duration::from_millis(1000 / 60);

#[derive(Clone, Copy, Debug)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((a, b)) = s.split_once('x') else {
            return Err(anyhow::anyhow!("Incorrect format, see help"));
        };
        let width: u32 = a.parse()?;
        let height: u32 = b.parse()?;

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

pub fn init_sdl() -> Result<Sdl> {
    sdl2::init()
        .map_err(anyhow::Error::msg)
        .context("could not initialize SDL")
}

/// Open a resizable window and turn it into a render canvas. Any failure
/// here is fatal for the exercise binaries.
pub fn create_canvas(sdl: &Sdl, title: &str, dim: Dimensions) -> Result<Canvas<Window>> {
    let video = sdl.video().map_err(anyhow::Error::msg)?;
    let window = video
        .window(title, dim.width, dim.height)
        .position_centered()
        .resizable()
        .build()
        .context("could not open the window")?;

    window
        .into_canvas()
        .build()
        .context("could not create a render canvas")
}

/// End-of-frame pacing: measures the loop iteration and sleeps away the
/// remainder of [`FRAME_BUDGET`].
pub struct FrameLimiter {
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn start() -> Self {
        Self {
            frame_start: Instant::now(),
        }
    }

    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < FRAME_BUDGET {
            std::thread::sleep(FRAME_BUDGET - elapsed);
        }
        self.frame_start = Instant::now();
    }
}
