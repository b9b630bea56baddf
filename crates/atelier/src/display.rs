use anyhow::Result;
use glam::{Affine2, Vec2};

use crate::{
    color::Rgb,
    render::{draw_batch, Raster},
    scene::{Point, PrimitiveKind},
};

/// One compiled `(kind, vertices)` run inside a display list.
#[derive(Debug, Clone)]
pub struct Batch {
    pub kind: PrimitiveKind,
    pub points: Vec<Point>,
}

/// Fixed geometry compiled once and replayed every frame, optionally under a
/// per-frame transform.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    batches: Vec<Batch>,
}

impl DisplayList {
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn draw<R: Raster + ?Sized>(&self, r: &mut R, transform: Affine2) -> Result<()> {
        for batch in &self.batches {
            draw_batch(r, batch.kind, &batch.points, transform)?;
        }
        Ok(())
    }
}

/// Accumulates batches under an explicit transform cursor; the cursor plus
/// [`ListBuilder::scoped`] stand in for the fixed-function matrix stack.
///
/// Transforms compose the way nested matrix calls do: the innermost
/// operation applies to local coordinates first.
pub struct ListBuilder {
    batches: Vec<Batch>,
    stack: Vec<Affine2>,
    cursor: Affine2,
}

impl ListBuilder {
    pub fn new() -> Self {
        Self {
            batches: Vec::new(),
            stack: Vec::new(),
            cursor: Affine2::IDENTITY,
        }
    }

    /// Run `f` with the current transform saved; restores it afterwards.
    pub fn scoped(&mut self, f: impl FnOnce(&mut Self)) {
        self.stack.push(self.cursor);
        f(self);
        self.cursor = self
            .stack
            .pop()
            .expect("scoped always pushes before popping");
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.cursor = self.cursor * Affine2::from_translation(offset);
    }

    pub fn rotate(&mut self, radians: f32) {
        self.cursor = self.cursor * Affine2::from_angle(radians);
    }

    pub fn scale(&mut self, factor: Vec2) {
        self.cursor = self.cursor * Affine2::from_scale(factor);
    }

    /// Record a single-color batch; positions are taken through the current
    /// transform at compile time.
    pub fn emit(
        &mut self,
        kind: PrimitiveKind,
        color: Rgb,
        positions: impl IntoIterator<Item = Vec2>,
    ) {
        let points = positions
            .into_iter()
            .map(|p| Point::new(self.cursor.transform_point2(p), color))
            .collect();
        self.batches.push(Batch { kind, points });
    }

    /// Replay an already-compiled list under the current transform.
    pub fn call(&mut self, list: &DisplayList) {
        for batch in &list.batches {
            let points = batch
                .points
                .iter()
                .map(|p| Point::new(self.cursor.transform_point2(p.pos), p.color))
                .collect();
            self.batches.push(Batch {
                kind: batch.kind,
                points,
            });
        }
    }

    pub fn build(self) -> DisplayList {
        DisplayList {
            batches: self.batches,
        }
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self::new()
    }
}
