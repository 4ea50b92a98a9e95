//! Flippable coordinate system description.
//!
//! The original renderer allows any combination of axis directions (left or
//! right origin, top or bottom origin). The widget core only needs the
//! direction signs: the reveal clip rectangle must grow away from a glyph's
//! origin in the direction text advances, which flips with the axes.

use crate::surface::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordSys {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl CoordSys {
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// y grows downward, origin top-left. The terminal-cell convention.
    pub const fn top_down(width: f32, height: f32) -> Self {
        Self::new(0.0, width, height, 0.0)
    }

    /// y grows upward, origin bottom-left. The GL convention.
    pub const fn bottom_up(width: f32, height: f32) -> Self {
        Self::new(0.0, width, 0.0, height)
    }

    /// +1 when x increases left-to-right, -1 when flipped.
    pub fn x_dir(&self) -> f32 {
        if self.right >= self.left { 1.0 } else { -1.0 }
    }

    /// +1 when y increases bottom-to-top, -1 when flipped.
    pub fn y_dir(&self) -> f32 {
        if self.top >= self.bottom { 1.0 } else { -1.0 }
    }

    /// Rectangle spanning `w × h` away from origin `(x, y)` along the axis
    /// directions, normalized so the result always has non-negative extent.
    pub fn oriented_rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        let (x, w) = if self.x_dir() >= 0.0 {
            (x, w)
        } else {
            (x - w, w)
        };
        let (y, h) = if self.y_dir() >= 0.0 {
            (y, h)
        } else {
            (y - h, h)
        };
        Rect { x, y, w, h }
    }
}
