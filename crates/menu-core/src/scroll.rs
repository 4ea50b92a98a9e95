//! Scroll window state and transition animation.
//!
//! The animator owns the logical window origin (`top_row`, `left_col`) and a
//! single bounded-duration transition between the previous window and the
//! current one. The logical origin moves immediately; drawing interpolates
//! through `offset()` so content slides into place. A new scroll while a
//! transition is in flight retargets it (timer restarts, direction updates).

use bitflags::bitflags;

bitflags! {
    /// Scroll arrow sides.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Arrows: u8 {
        const UP    = 0b0001;
        const DOWN  = 0b0010;
        const LEFT  = 0b0100;
        const RIGHT = 0b1000;
    }
}

/// Presentation state of one scroll arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowState {
    /// No scrolling on this axis at all.
    Hidden,
    /// Scrolling exists on the axis but no content lies beyond this side.
    Greyed,
    /// Content exists beyond the visible window on this side.
    Active,
}

/// Arrow flags recomputed after every structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrowFlags {
    /// Sides whose axis scrolls (window smaller than grid).
    pub shown: Arrows,
    /// Sides with content beyond the window.
    pub active: Arrows,
}

impl ArrowFlags {
    pub fn state(&self, side: Arrows) -> ArrowState {
        if !self.shown.contains(side) {
            ArrowState::Hidden
        } else if self.active.contains(side) {
            ArrowState::Active
        } else {
            ArrowState::Greyed
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    top_row: usize,
    left_col: usize,
    in_progress: bool,
    elapsed_ms: u32,
    duration_ms: u32,
    row_delta: i32,
    col_delta: i32,
}

impl ScrollAnimator {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            top_row: 0,
            left_col: 0,
            in_progress: false,
            elapsed_ms: 0,
            duration_ms: duration_ms.max(1),
            row_delta: 0,
            col_delta: 0,
        }
    }

    pub fn top_row(&self) -> usize {
        self.top_row
    }

    pub fn left_col(&self) -> usize {
        self.left_col
    }

    pub fn is_scrolling(&self) -> bool {
        self.in_progress
    }

    /// Shift the window by whole rows/columns and begin (or retarget) the
    /// transition. Deltas are clamped at zero on the low side by the caller.
    pub fn shift(&mut self, row_delta: i32, col_delta: i32) {
        if row_delta == 0 && col_delta == 0 {
            return;
        }
        self.top_row = add_delta(self.top_row, row_delta);
        self.left_col = add_delta(self.left_col, col_delta);
        self.row_delta = row_delta;
        self.col_delta = col_delta;
        self.elapsed_ms = 0;
        self.in_progress = true;
    }

    /// Snap to a window origin, discarding any in-flight transition.
    pub fn reset(&mut self, top_row: usize, left_col: usize) {
        self.top_row = top_row;
        self.left_col = left_col;
        self.in_progress = false;
        self.elapsed_ms = 0;
        self.row_delta = 0;
        self.col_delta = 0;
    }

    pub fn update(&mut self, dt_ms: u32) {
        if !self.in_progress {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms >= self.duration_ms {
            self.in_progress = false;
        }
    }

    /// Fractional (rows, cols) displacement to add to drawn cell positions.
    /// Starts at the full delta when a shift begins and decays to zero.
    pub fn offset(&self) -> (f32, f32) {
        if !self.in_progress {
            return (0.0, 0.0);
        }
        let remaining = 1.0 - self.elapsed_ms as f32 / self.duration_ms as f32;
        (
            self.row_delta as f32 * remaining,
            self.col_delta as f32 * remaining,
        )
    }
}

fn add_delta(base: usize, delta: i32) -> usize {
    if delta >= 0 {
        base + delta as usize
    } else {
        base.saturating_sub(delta.unsigned_abs() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_moves_window_immediately() {
        let mut s = ScrollAnimator::new(100);
        s.shift(1, 0);
        assert_eq!(s.top_row(), 1);
        assert!(s.is_scrolling());
    }

    #[test]
    fn offset_decays_to_zero() {
        let mut s = ScrollAnimator::new(100);
        s.shift(1, 0);
        assert_eq!(s.offset(), (1.0, 0.0));
        s.update(50);
        assert_eq!(s.offset(), (0.5, 0.0));
        s.update(50);
        assert!(!s.is_scrolling());
        assert_eq!(s.offset(), (0.0, 0.0));
    }

    #[test]
    fn retarget_restarts_timer() {
        let mut s = ScrollAnimator::new(100);
        s.shift(1, 0);
        s.update(80);
        s.shift(1, 0);
        assert_eq!(s.top_row(), 2);
        assert_eq!(s.offset(), (1.0, 0.0));
    }

    #[test]
    fn reset_discards_transition() {
        let mut s = ScrollAnimator::new(100);
        s.shift(2, 1);
        s.reset(0, 0);
        assert!(!s.is_scrolling());
        assert_eq!((s.top_row(), s.left_col()), (0, 0));
    }

    #[test]
    fn negative_delta_clamped_at_zero() {
        let mut s = ScrollAnimator::new(100);
        s.shift(-3, 0);
        assert_eq!(s.top_row(), 0);
    }

    #[test]
    fn arrow_states() {
        let flags = ArrowFlags {
            shown: Arrows::UP | Arrows::DOWN,
            active: Arrows::DOWN,
        };
        assert_eq!(flags.state(Arrows::DOWN), ArrowState::Active);
        assert_eq!(flags.state(Arrows::UP), ArrowState::Greyed);
        assert_eq!(flags.state(Arrows::LEFT), ArrowState::Hidden);
    }
}
