use std::collections::VecDeque;

use glam::Vec2;

use crate::color::Rgb;

/// Connectivity tag of a vertex batch, following the classic fixed-function
/// draw modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PrimitiveKind {
    #[display("points")]
    Points,
    #[display("lines")]
    Lines,
    #[display("line-strip")]
    LineStrip,
    #[display("line-loop")]
    LineLoop,
    #[display("triangles")]
    Triangles,
    #[display("triangle-fan")]
    TriangleFan,
    #[display("quads")]
    Quads,
}

/// A single colored vertex in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    pub color: Rgb,
}

impl Point {
    pub fn new(pos: Vec2, color: Rgb) -> Self {
        Self { pos, color }
    }
}

/// One drawable unit: a kind tag and the vertices it connects, in the order
/// they were placed. Order is meaningful for every non-point kind.
#[derive(Debug, Clone)]
pub struct Primitive {
    kind: PrimitiveKind,
    points: Vec<Point>,
}

impl Primitive {
    pub fn new(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Append a vertex at the tail, preserving placement order.
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// The whole interactive scene: primitives in most-recently-created-first
/// order. The head is the *active* primitive, the one new points go to.
///
/// A scene is never empty: construction and [`Scene::reset`] both install a
/// default points primitive.
#[derive(Debug)]
pub struct Scene {
    primitives: VecDeque<Primitive>,
}

impl Scene {
    pub fn new() -> Self {
        let mut primitives = VecDeque::new();
        primitives.push_front(Primitive::new(PrimitiveKind::Points));
        Self { primitives }
    }

    /// Start a new primitive; it becomes the active one.
    pub fn push_front(&mut self, kind: PrimitiveKind) {
        self.primitives.push_front(Primitive::new(kind));
    }

    pub fn active(&self) -> &Primitive {
        self.primitives
            .front()
            .expect("a scene always holds at least one primitive")
    }

    pub fn active_mut(&mut self) -> &mut Primitive {
        self.primitives
            .front_mut()
            .expect("a scene always holds at least one primitive")
    }

    /// Newest-first, the order primitives are drawn in.
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Drop everything and restore the startup state: a single empty points
    /// primitive.
    pub fn reset(&mut self) {
        self.primitives.clear();
        self.primitives.push_front(Primitive::new(PrimitiveKind::Points));
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
