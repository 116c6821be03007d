//! Keyboard and pointer state
//!
//! Event handlers (DOM closures on wasm) write into a `Controller`; the
//! frame loop reads it once per tick. The pending click is a one-shot:
//! `take_click` clears it so a single click is never processed across
//! two frames.

use glam::Vec2;

/// The fixed key set the game reacts to: start and steer. Everything
/// else is ignored at the mapping layer, never reaches the controller,
/// and keeps its browser default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    Left,
    Right,
    A,
    D,
}

impl Key {
    pub const COUNT: usize = 6;

    /// Map a DOM `KeyboardEvent.code` value. Unmapped codes return `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Enter" => Some(Key::Enter),
            "Space" => Some(Key::Space),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "KeyA" => Some(Key::A),
            "KeyD" => Some(Key::D),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Key::Enter => 0,
            Key::Space => 1,
            Key::Left => 2,
            Key::Right => 3,
            Key::A => 4,
            Key::D => 5,
        }
    }
}

/// Shared input state written by event handlers, read once per tick
#[derive(Debug, Default)]
pub struct Controller {
    pressed: [bool; Key::COUNT],
    click: Option<Vec2>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down for a mapped code; unmapped codes are a no-op.
    /// Returns whether the code was mapped (callers use this to decide
    /// whether to suppress the browser default).
    pub fn key_down(&mut self, code: &str) -> bool {
        match Key::from_code(code) {
            Some(key) => {
                self.pressed[key.index()] = true;
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.pressed[key.index()] = false;
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    pub fn any_pressed(&self, keys: &[Key]) -> bool {
        keys.iter().any(|&k| self.is_pressed(k))
    }

    pub fn record_click(&mut self, pos: Vec2) {
        self.click = Some(pos);
    }

    /// Consume the pending click. Called exactly once per tick by the
    /// frame loop; a second call in the same frame sees `None`.
    pub fn take_click(&mut self) -> Option<Vec2> {
        self.click.take()
    }
}
