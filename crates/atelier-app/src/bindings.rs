use sdl2::keyboard::Keycode;

use atelier::{board::Action, scene::PrimitiveKind};

/// Keyboard layout of the exercises. A field per binding so callers can
/// rebind without touching the event loop.
pub struct Bindings {
    pub points: Keycode,
    pub lines: Keycode,
    pub triangles: Keycode,
    pub quads: Keycode,
    pub line_strip: Keycode,
    pub filled_hold: Keycode,
    pub palette_hold: Keycode,
    pub undo: Keycode,
    pub reset: Keycode,
    pub dump: Keycode,
    pub quit: Keycode,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            points: Keycode::P,
            lines: Keycode::L,
            triangles: Keycode::T,
            quads: Keycode::C,
            line_strip: Keycode::S,
            filled_hold: Keycode::F,
            palette_hold: Keycode::Space,
            undo: Keycode::Z,
            reset: Keycode::R,
            dump: Keycode::A,
            quit: Keycode::Q,
        }
    }
}

impl Bindings {
    pub fn press(&self, key: Keycode) -> Option<Action> {
        match key {
            k if k == self.points => Some(Action::NewPrimitive(PrimitiveKind::Points)),
            k if k == self.lines => Some(Action::NewPrimitive(PrimitiveKind::Lines)),
            k if k == self.triangles => Some(Action::NewPrimitive(PrimitiveKind::Triangles)),
            k if k == self.quads => Some(Action::NewPrimitive(PrimitiveKind::Quads)),
            k if k == self.line_strip => Some(Action::NewPrimitive(PrimitiveKind::LineStrip)),
            k if k == self.filled_hold => Some(Action::FilledHold(true)),
            k if k == self.palette_hold => Some(Action::PaletteHold(true)),
            k if k == self.undo => Some(Action::Undo),
            k if k == self.reset => Some(Action::Reset),
            k if k == self.dump => Some(Action::Dump),
            k if k == self.quit => Some(Action::Quit),
            _ => None,
        }
    }

    /// Releases only matter for the two hold keys.
    pub fn release(&self, key: Keycode) -> Option<Action> {
        match key {
            k if k == self.filled_hold => Some(Action::FilledHold(false)),
            k if k == self.palette_hold => Some(Action::PaletteHold(false)),
            _ => None,
        }
    }
}
