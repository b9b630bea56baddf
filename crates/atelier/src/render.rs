use anyhow::Result;
use glam::{Affine2, Vec2};
use itertools::Itertools;

use crate::{
    color::Rgb,
    scene::{Point, PrimitiveKind, Scene},
};

/// Drawing surface contract. Implementations rasterize world-space
/// positions; everything above this trait is backend-agnostic.
pub trait Raster {
    fn point(&mut self, p: Vec2, color: Rgb) -> Result<()>;
    fn line(&mut self, a: Vec2, b: Vec2, color: Rgb) -> Result<()>;
    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgb) -> Result<()>;
    fn polygon(&mut self, corners: &[Vec2], color: Rgb) -> Result<()>;
}

/// Tessellate one `(kind, vertices)` batch into raster calls, applying
/// `transform` to every vertex.
///
/// Connectivity follows the fixed-function rules: Lines consumes pairs,
/// Triangles triples, Quads quadruples, and an incomplete trailing group
/// draws nothing. Filled and segment sub-primitives take the color of their
/// last vertex.
pub fn draw_batch<R: Raster + ?Sized>(
    r: &mut R,
    kind: PrimitiveKind,
    points: &[Point],
    transform: Affine2,
) -> Result<()> {
    let at = |p: &Point| transform.transform_point2(p.pos);

    match kind {
        PrimitiveKind::Points => {
            for p in points {
                r.point(at(p), p.color)?;
            }
        }
        PrimitiveKind::Lines => {
            for (a, b) in points.iter().tuples() {
                r.line(at(a), at(b), b.color)?;
            }
        }
        PrimitiveKind::LineStrip => {
            for (a, b) in points.iter().tuple_windows() {
                r.line(at(a), at(b), b.color)?;
            }
        }
        PrimitiveKind::LineLoop => {
            for (a, b) in points.iter().tuple_windows() {
                r.line(at(a), at(b), b.color)?;
            }
            if points.len() > 2 {
                let (first, last) = (&points[0], &points[points.len() - 1]);
                r.line(at(last), at(first), first.color)?;
            }
        }
        PrimitiveKind::Triangles => {
            for (a, b, c) in points.iter().tuples() {
                r.triangle(at(a), at(b), at(c), c.color)?;
            }
        }
        PrimitiveKind::TriangleFan => {
            if let Some((hub, rim)) = points.split_first() {
                for (b, c) in rim.iter().tuple_windows() {
                    r.triangle(at(hub), at(b), at(c), c.color)?;
                }
            }
        }
        PrimitiveKind::Quads => {
            for (a, b, c, d) in points.iter().tuples() {
                r.polygon(&[at(a), at(b), at(c), at(d)], d.color)?;
            }
        }
    }

    Ok(())
}

/// Draw the whole scene, newest primitive first. Pure read; the scene is
/// never mutated by rendering.
pub fn draw_scene<R: Raster + ?Sized>(r: &mut R, scene: &Scene, view: Affine2) -> Result<()> {
    for primitive in scene.iter() {
        draw_batch(r, primitive.kind(), primitive.points(), view)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Test backend that records every raster call.
    #[derive(Debug, PartialEq)]
    pub enum Op {
        Point(Vec2, Rgb),
        Line(Vec2, Vec2, Rgb),
        Triangle(Vec2, Vec2, Vec2, Rgb),
        Polygon(Vec<Vec2>, Rgb),
    }

    #[derive(Default)]
    pub struct Recorder(pub Vec<Op>);

    impl Raster for Recorder {
        fn point(&mut self, p: Vec2, color: Rgb) -> Result<()> {
            self.0.push(Op::Point(p, color));
            Ok(())
        }
        fn line(&mut self, a: Vec2, b: Vec2, color: Rgb) -> Result<()> {
            self.0.push(Op::Line(a, b, color));
            Ok(())
        }
        fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgb) -> Result<()> {
            self.0.push(Op::Triangle(a, b, c, color));
            Ok(())
        }
        fn polygon(&mut self, corners: &[Vec2], color: Rgb) -> Result<()> {
            self.0.push(Op::Polygon(corners.to_vec(), color));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Affine2, Vec2};

    use super::recording::{Op, Recorder};
    use super::*;
    use crate::color;

    fn pts(coords: &[(f32, f32)]) -> Vec<Point> {
        coords
            .iter()
            .map(|&(x, y)| Point::new(Vec2::new(x, y), color::WHITE))
            .collect()
    }

    #[test]
    fn lines_pair_up_and_drop_trailing_vertex() {
        let mut r = Recorder::default();
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        draw_batch(&mut r, PrimitiveKind::Lines, &points, Affine2::IDENTITY).unwrap();

        assert_eq!(
            r.0,
            vec![Op::Line(
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                color::WHITE
            )]
        );
    }

    #[test]
    fn strip_connects_consecutive_vertices() {
        let mut r = Recorder::default();
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        draw_batch(&mut r, PrimitiveKind::LineStrip, &points, Affine2::IDENTITY).unwrap();

        assert_eq!(r.0.len(), 2);
    }

    #[test]
    fn loop_adds_a_closing_edge() {
        let mut r = Recorder::default();
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        draw_batch(&mut r, PrimitiveKind::LineLoop, &points, Affine2::IDENTITY).unwrap();

        assert_eq!(r.0.len(), 3);
        assert_eq!(
            r.0[2],
            Op::Line(Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0), color::WHITE)
        );
    }

    #[test]
    fn fan_shares_its_hub() {
        let mut r = Recorder::default();
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        draw_batch(&mut r, PrimitiveKind::TriangleFan, &points, Affine2::IDENTITY).unwrap();

        assert_eq!(
            r.0,
            vec![
                Op::Triangle(
                    Vec2::new(0.0, 0.0),
                    Vec2::new(1.0, 0.0),
                    Vec2::new(1.0, 1.0),
                    color::WHITE
                ),
                Op::Triangle(
                    Vec2::new(0.0, 0.0),
                    Vec2::new(1.0, 1.0),
                    Vec2::new(0.0, 1.0),
                    color::WHITE
                ),
            ]
        );
    }

    #[test]
    fn quads_become_filled_polygons() {
        let mut r = Recorder::default();
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (9.0, 9.0)]);
        draw_batch(&mut r, PrimitiveKind::Quads, &points, Affine2::IDENTITY).unwrap();

        // The fifth vertex is an incomplete quad and draws nothing.
        assert_eq!(r.0.len(), 1);
        assert!(matches!(&r.0[0], Op::Polygon(corners, _) if corners.len() == 4));
    }

    #[test]
    fn transform_applies_to_every_vertex() {
        let mut r = Recorder::default();
        let points = pts(&[(1.0, 0.0)]);
        let transform = Affine2::from_translation(Vec2::new(2.0, 3.0));
        draw_batch(&mut r, PrimitiveKind::Points, &points, transform).unwrap();

        assert_eq!(r.0, vec![Op::Point(Vec2::new(3.0, 3.0), color::WHITE)]);
    }

    #[test]
    fn scene_draws_newest_first() {
        let mut scene = Scene::new();
        scene.active_mut().append(Point::new(Vec2::ZERO, color::WHITE));
        scene.push_front(PrimitiveKind::Points);
        scene
            .active_mut()
            .append(Point::new(Vec2::ONE, color::RED));

        let mut r = Recorder::default();
        draw_scene(&mut r, &scene, Affine2::IDENTITY).unwrap();

        assert_eq!(
            r.0,
            vec![
                Op::Point(Vec2::ONE, color::RED),
                Op::Point(Vec2::ZERO, color::WHITE),
            ]
        );
    }
}
