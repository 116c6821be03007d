//! 2D drawing surface abstraction
//!
//! The simulation renders through `DrawSurface` and never touches the
//! backend. On wasm the backend is a `CanvasRenderingContext2d`; tests
//! and native runs use `NullSurface`.

use glam::Vec2;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Fixed-size 2D render target with a save/restore/translate transform
/// stack. Colors are CSS color strings, matching the canvas backend.
pub trait DrawSurface {
    /// Clear the whole surface
    fn clear(&mut self);

    fn fill_rect(&mut self, color: &str, pos: Vec2, size: Vec2);

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str, align: TextAlign);

    /// Global alpha applied to subsequent draws (until the matching pop)
    fn set_alpha(&mut self, alpha: f32);

    /// Push the current transform/alpha state
    fn push(&mut self);

    /// Pop back to the state at the matching push
    fn pop(&mut self);

    /// Translate subsequent draws by `offset`
    fn translate(&mut self, offset: Vec2);
}

/// Surface that discards all draws. Lets the simulation run headless.
#[derive(Debug, Default)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear(&mut self) {}
    fn fill_rect(&mut self, _color: &str, _pos: Vec2, _size: Vec2) {}
    fn fill_text(&mut self, _text: &str, _pos: Vec2, _font: &str, _color: &str, _align: TextAlign) {
    }
    fn set_alpha(&mut self, _alpha: f32) {}
    fn push(&mut self) {}
    fn pop(&mut self) {}
    fn translate(&mut self, _offset: Vec2) {}
}


#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

#[cfg(target_arch = "wasm32")]
mod canvas {
    use super::{DrawSurface, TextAlign};
    use crate::consts::{GAME_HEIGHT, GAME_WIDTH};
    use glam::Vec2;
    use web_sys::CanvasRenderingContext2d;

    /// `DrawSurface` over the browser's 2D canvas context
    pub struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl CanvasSurface {
        pub fn new(ctx: CanvasRenderingContext2d) -> Self {
            Self { ctx }
        }
    }

    impl DrawSurface for CanvasSurface {
        fn clear(&mut self) {
            self.ctx
                .clear_rect(0.0, 0.0, GAME_WIDTH as f64, GAME_HEIGHT as f64);
        }

        fn fill_rect(&mut self, color: &str, pos: Vec2, size: Vec2) {
            self.ctx.set_fill_style_str(color);
            self.ctx
                .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        }

        fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str, align: TextAlign) {
            self.ctx.set_font(font);
            self.ctx.set_fill_style_str(color);
            self.ctx.set_text_align(match align {
                TextAlign::Left => "left",
                TextAlign::Center => "center",
            });
            let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
        }

        fn set_alpha(&mut self, alpha: f32) {
            self.ctx.set_global_alpha(alpha as f64);
        }

        fn push(&mut self) {
            self.ctx.save();
        }

        fn pop(&mut self) {
            self.ctx.restore();
        }

        fn translate(&mut self, offset: Vec2) {
            let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
        }
    }
}
