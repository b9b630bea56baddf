//! Canonical shape geometry, all built around the origin in unit size and
//! positioned by the caller's transform.

use glam::Vec2;

use crate::{
    color::{self, Rgb},
    display::ListBuilder,
    scene::PrimitiveKind,
};

/// Segment count used to approximate circles.
pub const CIRCLE_SEGMENTS: u32 = 100;

/// Square of side 1 centered on the origin. Outline is four explicit edges;
/// filled is a single quad.
pub fn square(b: &mut ListBuilder, color: Rgb, filled: bool) {
    if filled {
        b.emit(
            PrimitiveKind::Quads,
            color,
            [
                Vec2::new(-0.5, -0.5),
                Vec2::new(-0.5, 0.5),
                Vec2::new(0.5, 0.5),
                Vec2::new(0.5, -0.5),
            ],
        );
    } else {
        b.emit(
            PrimitiveKind::Lines,
            color,
            [
                Vec2::new(-0.5, -0.5),
                Vec2::new(-0.5, 0.5),
                Vec2::new(0.5, 0.5),
                Vec2::new(0.5, -0.5),
                Vec2::new(-0.5, 0.5),
                Vec2::new(0.5, 0.5),
                Vec2::new(-0.5, -0.5),
                Vec2::new(0.5, -0.5),
            ],
        );
    }
}

/// Circle of diameter 1: a closed line strip when outlined, a fan around the
/// center when filled.
pub fn circle(b: &mut ListBuilder, color: Rgb, filled: bool) {
    let rim = (0..=CIRCLE_SEGMENTS).map(|i| {
        let angle = std::f32::consts::TAU * i as f32 / CIRCLE_SEGMENTS as f32;
        Vec2::new(angle.cos(), angle.sin()) * 0.5
    });

    if filled {
        b.emit(
            PrimitiveKind::TriangleFan,
            color,
            std::iter::once(Vec2::ZERO).chain(rim),
        );
    } else {
        b.emit(PrimitiveKind::LineStrip, color, rim);
    }
}

/// Square of side 1 with rounded corners: two overlapped filled squares plus
/// a filled circle in each corner.
pub fn rounded_square(b: &mut ListBuilder, color: Rgb) {
    b.scoped(|b| {
        b.scale(Vec2::new(0.8, 1.0));
        square(b, color, true);
    });
    b.scoped(|b| {
        b.scale(Vec2::new(1.0, 0.8));
        square(b, color, true);
    });
    for corner in [
        Vec2::new(-0.4, -0.4),
        Vec2::new(0.4, 0.4),
        Vec2::new(0.4, -0.4),
        Vec2::new(-0.4, 0.4),
    ] {
        b.scoped(|b| {
            b.translate(corner);
            b.scale(Vec2::splat(0.2));
            circle(b, color, true);
        });
    }
}

/// Unit axes cross: red x segment, green y segment.
pub fn landmark(b: &mut ListBuilder) {
    b.emit(
        PrimitiveKind::Lines,
        color::RED,
        [Vec2::new(-0.5, 0.0), Vec2::new(0.5, 0.0)],
    );
    b.emit(
        PrimitiveKind::Lines,
        color::GREEN,
        [Vec2::new(0.0, -0.5), Vec2::new(0.0, 0.5)],
    );
}
