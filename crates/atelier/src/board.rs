use crate::{
    palette,
    scene::{Point, PrimitiveKind, Scene},
    viewport::Viewport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Drawing,
    PaletteSelect,
}

/// What a key press means to the board, independent of the key table that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NewPrimitive(PrimitiveKind),
    Undo,
    Reset,
    Dump,
    Quit,
    PaletteHold(bool),
    FilledHold(bool),
}

/// Interaction state over the scene: current mode, drawing color, the
/// filled/rotation modifiers, and the loop-continue flag.
pub struct Board {
    scene: Scene,
    mode: Mode,
    color_index: usize,
    filled: bool,
    rotation_drag: bool,
    view_rotation: f32,
    running: bool,
}

impl Board {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            mode: Mode::Drawing,
            color_index: 0,
            filled: false,
            rotation_drag: false,
            view_rotation: 0.0,
            running: true,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn filled(&self) -> bool {
        self.filled
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Accumulated right-drag view rotation, in degrees.
    pub fn view_rotation(&self) -> f32 {
        self.view_rotation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::NewPrimitive(kind) => {
                self.mode = Mode::Drawing;
                self.scene.push_front(kind);
            }
            Action::Undo => {
                self.mode = Mode::Drawing;
                self.scene.active_mut().clear();
            }
            Action::Reset => {
                self.mode = Mode::Drawing;
                self.scene.reset();
            }
            Action::Dump => self.dump(),
            Action::Quit => self.running = false,
            Action::PaletteHold(held) => {
                self.mode = if held {
                    Mode::PaletteSelect
                } else {
                    Mode::Drawing
                };
            }
            Action::FilledHold(held) => self.filled = held,
        }
    }

    /// Left click: picks a color in palette mode, otherwise appends a point
    /// of the current color to the active primitive at the click's world
    /// position.
    pub fn click(&mut self, x: i32, y: i32, viewport: &Viewport) {
        match self.mode {
            Mode::PaletteSelect => {
                self.color_index = palette::pick(x, viewport.width);
            }
            Mode::Drawing => {
                let pos = viewport.world_from_screen(x, y);
                let color = palette::PALETTE[self.color_index];
                self.scene.active_mut().append(Point::new(pos, color));
            }
        }
    }

    pub fn drag_start(&mut self) {
        self.rotation_drag = true;
    }

    pub fn drag_end(&mut self) {
        self.rotation_drag = false;
    }

    /// Mouse motion: while a right-drag is active, the view rotation tracks
    /// the pointer's world position.
    pub fn motion(&mut self, x: i32, y: i32, viewport: &Viewport) {
        if self.rotation_drag {
            let w = viewport.world_from_screen(x, y);
            self.view_rotation = 10.0 * w.x * w.y;
        }
    }

    /// Log the scene contents.
    pub fn dump(&self) {
        log::info!("scene: {} primitive(s)", self.scene.len());
        for (i, primitive) in self.scene.iter().enumerate() {
            log::info!(
                "  [{i}] {} with {} point(s)",
                primitive.kind(),
                primitive.len()
            );
            for point in primitive.points() {
                let [r, g, b] = point.color.to_array();
                log::info!(
                    "    ({:.3}, {:.3}) rgb({r}, {g}, {b})",
                    point.pos.x,
                    point.pos.y
                );
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::{Action, Board, Mode};
    use crate::{
        color,
        scene::PrimitiveKind,
        viewport::{Extents, Viewport},
    };

    fn square_viewport() -> Viewport {
        Viewport::new(400, 400, Extents::symmetric(Vec2::ONE))
    }

    #[test]
    fn two_clicks_append_two_white_points() {
        let vp = square_viewport();
        let mut board = Board::new();
        board.apply(Action::NewPrimitive(PrimitiveKind::Lines));
        board.click(100, 100, &vp);
        board.click(200, 100, &vp);

        let active = board.scene().active();
        assert_eq!(active.kind(), PrimitiveKind::Lines);
        assert_eq!(active.len(), 2);
        assert_eq!(active.points()[0].pos, Vec2::new(-0.5, 0.5));
        assert_eq!(active.points()[1].pos, Vec2::new(0.0, 0.5));
        assert_eq!(active.points()[0].color, color::WHITE);
    }

    #[test]
    fn palette_click_changes_the_drawing_color() {
        let vp = square_viewport();
        let mut board = Board::new();

        board.apply(Action::PaletteHold(true));
        assert_eq!(board.mode(), Mode::PaletteSelect);
        board.click(399, 100, &vp);
        assert_eq!(board.scene().active().len(), 0);

        board.apply(Action::PaletteHold(false));
        board.click(100, 100, &vp);
        assert_eq!(board.scene().active().points()[0].color, color::MAGENTA);
    }

    #[test]
    fn undo_clears_only_the_active_primitive() {
        let vp = square_viewport();
        let mut board = Board::new();
        board.click(10, 10, &vp);
        board.apply(Action::NewPrimitive(PrimitiveKind::Triangles));
        board.click(20, 20, &vp);
        board.click(30, 30, &vp);
        board.click(40, 40, &vp);

        board.apply(Action::Undo);
        assert_eq!(board.scene().active().len(), 0);
        assert_eq!(board.scene().len(), 2);
        assert_eq!(board.scene().iter().nth(1).unwrap().len(), 1);

        // Undo on an already-empty primitive stays a no-op.
        board.apply(Action::Undo);
        assert_eq!(board.scene().active().len(), 0);
    }

    #[test]
    fn reset_shrinks_to_a_single_empty_primitive() {
        let vp = square_viewport();
        let mut board = Board::new();
        board.click(10, 10, &vp);
        board.click(20, 20, &vp);
        board.apply(Action::NewPrimitive(PrimitiveKind::Quads));
        board.click(30, 30, &vp);
        board.click(40, 40, &vp);
        board.click(50, 50, &vp);

        board.apply(Action::Reset);
        assert_eq!(board.scene().len(), 1);
        assert_eq!(board.scene().active().kind(), PrimitiveKind::Points);
        assert_eq!(board.scene().active().len(), 0);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut board = Board::new();
        assert!(board.is_running());
        board.apply(Action::Quit);
        assert!(!board.is_running());
    }

    #[test]
    fn motion_rotates_only_while_dragging() {
        let vp = Viewport::new(800, 600, Extents::symmetric(Vec2::new(4.0, 3.0)));
        let mut board = Board::new();

        board.motion(800, 0, &vp);
        assert_eq!(board.view_rotation(), 0.0);

        board.drag_start();
        board.motion(800, 0, &vp);
        // World position (4, 3) -> 10 * 4 * 3 degrees.
        assert_eq!(board.view_rotation(), 120.0);

        board.drag_end();
        board.motion(0, 0, &vp);
        assert_eq!(board.view_rotation(), 120.0);
    }
}
