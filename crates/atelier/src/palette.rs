use glam::Vec2;

use crate::{
    color::{self, Rgb},
    display::{DisplayList, ListBuilder},
    scene::PrimitiveKind,
    viewport::Extents,
};

/// The drawing colors, in swatch order. Index 0 is the startup color.
pub const PALETTE: [Rgb; 8] = [
    color::WHITE,
    color::BLACK,
    color::RED,
    color::GREEN,
    color::BLUE,
    color::YELLOW,
    color::CYAN,
    color::MAGENTA,
];

/// Map a click x position to a palette index: the window is split into
/// equal columns, one per color. Total over any input, clamped into range.
pub fn pick(x: i32, window_width: u32) -> usize {
    if window_width == 0 {
        return 0;
    }
    let index = x as i64 * PALETTE.len() as i64 / window_width as i64;
    index.clamp(0, PALETTE.len() as i64 - 1) as usize
}

/// The palette-select overlay: one filled column per color, spanning the
/// whole projection.
pub fn swatches(extents: Extents) -> DisplayList {
    let mut b = ListBuilder::new();
    let column = extents.span().x / PALETTE.len() as f32;
    for (i, &color) in PALETTE.iter().enumerate() {
        let left = extents.min.x + column * i as f32;
        b.emit(
            PrimitiveKind::Quads,
            color,
            [
                Vec2::new(left, extents.max.y),
                Vec2::new(left + column, extents.max.y),
                Vec2::new(left + column, extents.min.y),
                Vec2::new(left, extents.min.y),
            ],
        );
    }
    b.build()
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::{pick, swatches, PALETTE};
    use crate::viewport::Extents;

    #[test]
    fn pick_is_monotonic_and_bounded() {
        let width = 400;
        let mut last = 0;
        for x in 0..width {
            let index = pick(x, width as u32);
            assert!(index < PALETTE.len());
            assert!(index >= last);
            last = index;
        }
    }

    #[test]
    fn pick_boundaries() {
        assert_eq!(pick(0, 400), 0);
        assert_eq!(pick(399, 400), PALETTE.len() - 1);
        // Out-of-window positions stay clamped.
        assert_eq!(pick(-10, 400), 0);
        assert_eq!(pick(5000, 400), PALETTE.len() - 1);
    }

    #[test]
    fn swatches_cover_the_extents() {
        let extents = Extents::symmetric(Vec2::new(4.0, 3.0));
        let list = swatches(extents);

        assert_eq!(list.batches().len(), PALETTE.len());
        assert_eq!(list.batches()[0].points[0].pos.x, -4.0);
        let last = list.batches().last().unwrap();
        assert_eq!(last.points[1].pos.x, 4.0);
        assert_eq!(last.points[0].color, PALETTE[PALETTE.len() - 1]);
    }
}
