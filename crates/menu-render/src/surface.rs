//! The draw-command boundary and a recording implementation for tests.
//!
//! Widgets emit commands in a fixed order per `draw()` call and never query
//! backend state. `RecordingSurface` captures the stream verbatim so tests
//! can assert both content and ordering (including the draw-idempotence
//! property: two draws with no intervening update record identical streams).

use crate::style::{ImageHandle, TextStyle};

/// Axis-aligned clip rectangle in backend coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Backend drawing interface.
///
/// A pen position carried between calls keeps the command stream compact:
/// `draw_text`/`draw_image` render at the current pen. `push_state` saves the
/// pen and clip; `pop_state` restores them.
pub trait DrawSurface {
    fn move_to(&mut self, x: f32, y: f32);
    fn move_rel(&mut self, dx: f32, dy: f32);
    fn draw_text(&mut self, text: &str, style: &TextStyle, alpha: f32);
    fn draw_image(&mut self, image: &ImageHandle, alpha: f32);
    fn set_clip(&mut self, clip: Option<Rect>);
    fn push_state(&mut self);
    fn pop_state(&mut self);
}

/// One recorded command. Text and image ops carry the resolved pen position
/// so assertions do not have to replay the move ops.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        style: TextStyle,
        alpha: f32,
    },
    Image {
        x: f32,
        y: f32,
        path: String,
        alpha: f32,
    },
    Clip(Option<Rect>),
    Push,
    Pop,
}

/// Test backend: records every command.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    pen: (f32, f32),
    clip: Option<Rect>,
    stack: Vec<((f32, f32), Option<Rect>)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.pen = (0.0, 0.0);
        self.clip = None;
        self.stack.clear();
    }

    /// Text ops only, in draw order.
    pub fn texts(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn move_to(&mut self, x: f32, y: f32) {
        self.pen = (x, y);
    }

    fn move_rel(&mut self, dx: f32, dy: f32) {
        self.pen.0 += dx;
        self.pen.1 += dy;
    }

    fn draw_text(&mut self, text: &str, style: &TextStyle, alpha: f32) {
        self.ops.push(DrawOp::Text {
            x: self.pen.0,
            y: self.pen.1,
            text: text.to_string(),
            style: *style,
            alpha,
        });
    }

    fn draw_image(&mut self, image: &ImageHandle, alpha: f32) {
        if image.is_missing() {
            // Degrade: absent image occupies no space and emits nothing.
            return;
        }
        self.ops.push(DrawOp::Image {
            x: self.pen.0,
            y: self.pen.1,
            path: image.path.clone(),
            alpha,
        });
    }

    fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
        self.ops.push(DrawOp::Clip(clip));
    }

    fn push_state(&mut self) {
        self.stack.push((self.pen, self.clip));
        self.ops.push(DrawOp::Push);
    }

    fn pop_state(&mut self) {
        if let Some((pen, clip)) = self.stack.pop() {
            self.pen = pen;
            self.clip = clip;
        }
        self.ops.push(DrawOp::Pop);
    }
}
