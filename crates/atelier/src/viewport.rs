use glam::Vec2;

/// Orthographic projection bounds, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub min: Vec2,
    pub max: Vec2,
}

impl Extents {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Symmetric extents: `[-half.x, half.x] × [-half.y, half.y]`.
    pub fn symmetric(half: Vec2) -> Self {
        Self {
            min: -half,
            max: half,
        }
    }

    pub fn span(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Window state a frame is drawn against: pixel size plus the projection
/// extents it maps to. Rebuilt on resize events and passed by reference, so
/// input mapping and rendering always agree on the same geometry.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub extents: Extents,
}

impl Viewport {
    pub fn new(width: u32, height: u32, extents: Extents) -> Self {
        Self {
            width,
            height,
            extents,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Map a pixel position to world coordinates. Screen y grows downward,
    /// world y upward.
    pub fn world_from_screen(&self, x: i32, y: i32) -> Vec2 {
        let e = self.extents;
        let wx = e.min.x + e.span().x * x as f32 / self.width as f32;
        let wy = e.max.y - e.span().y * y as f32 / self.height as f32;
        Vec2::new(wx, wy)
    }

    /// Map a world position back to pixels (rounded to the nearest pixel).
    pub fn screen_from_world(&self, p: Vec2) -> (i32, i32) {
        let e = self.extents;
        let sx = (p.x - e.min.x) / e.span().x * self.width as f32;
        let sy = (e.max.y - p.y) / e.span().y * self.height as f32;
        (sx.round() as i32, sy.round() as i32)
    }
}
