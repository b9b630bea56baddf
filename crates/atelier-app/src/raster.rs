use anyhow::Result;
use glam::Vec2;
use sdl2::{gfx::primitives::DrawRenderer, pixels::Color, render::Canvas, video::Window};

use atelier::{color::Rgb, render::Raster, viewport::Viewport};

/// SDL canvas backend of the [`Raster`] contract. World positions go
/// through the viewport; drawing uses the gfx primitives, which handle the
/// filled triangles and polygons plain `Canvas` cannot.
pub struct CanvasRaster<'a> {
    canvas: &'a mut Canvas<Window>,
    viewport: Viewport,
}

impl<'a> CanvasRaster<'a> {
    pub fn new(canvas: &'a mut Canvas<Window>, viewport: Viewport) -> Self {
        Self { canvas, viewport }
    }

    fn screen(&self, p: Vec2) -> (i16, i16) {
        let (x, y) = self.viewport.screen_from_world(p);
        (
            x.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
            y.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
        )
    }
}

fn sdl_color(c: Rgb) -> Color {
    let [r, g, b] = c.to_array();
    Color::RGB(r, g, b)
}

impl Raster for CanvasRaster<'_> {
    fn point(&mut self, p: Vec2, color: Rgb) -> Result<()> {
        let (x, y) = self.screen(p);
        self.canvas.pixel(x, y, sdl_color(color)).map_err(anyhow::Error::msg)
    }

    fn line(&mut self, a: Vec2, b: Vec2, color: Rgb) -> Result<()> {
        let (x1, y1) = self.screen(a);
        let (x2, y2) = self.screen(b);
        self.canvas
            .line(x1, y1, x2, y2, sdl_color(color))
            .map_err(anyhow::Error::msg)
    }

    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgb) -> Result<()> {
        let (x1, y1) = self.screen(a);
        let (x2, y2) = self.screen(b);
        let (x3, y3) = self.screen(c);
        self.canvas
            .filled_trigon(x1, y1, x2, y2, x3, y3, sdl_color(color))
            .map_err(anyhow::Error::msg)
    }

    fn polygon(&mut self, corners: &[Vec2], color: Rgb) -> Result<()> {
        let mut vx = Vec::with_capacity(corners.len());
        let mut vy = Vec::with_capacity(corners.len());
        for &corner in corners {
            let (x, y) = self.screen(corner);
            vx.push(x);
            vy.push(y);
        }
        self.canvas
            .filled_polygon(&vx, &vy, sdl_color(color))
            .map_err(anyhow::Error::msg)
    }
}
