//! Selection cursor blink state.
//!
//! Tri-state: hidden, solid, or blinking. Only the blinking state consumes
//! the accumulated timer; the other two are static and ignore `update`.
//! Single-threaded by contract: the owning widget calls `update(dt)` once
//! per frame, there is no shared clock.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    Hidden,
    #[default]
    Visible,
    Blinking,
}

#[derive(Debug, Clone)]
pub struct CursorAnimator {
    mode: CursorMode,
    blink_on: bool,
    elapsed_ms: u32,
    period_ms: u32,
}

impl CursorAnimator {
    /// `period_ms` is the time between visibility toggles.
    pub fn new(period_ms: u32) -> Self {
        Self {
            mode: CursorMode::default(),
            blink_on: true,
            elapsed_ms: 0,
            period_ms: period_ms.max(1),
        }
    }

    pub fn mode(&self) -> CursorMode {
        self.mode
    }

    /// Switching modes restarts the blink phase at "on".
    pub fn set_mode(&mut self, mode: CursorMode) {
        self.mode = mode;
        self.blink_on = true;
        self.elapsed_ms = 0;
    }

    pub fn update(&mut self, dt_ms: u32) {
        if self.mode != CursorMode::Blinking {
            return;
        }
        self.elapsed_ms += dt_ms;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            self.blink_on = !self.blink_on;
        }
    }

    /// Whether the cursor should be drawn this frame.
    pub fn visible(&self) -> bool {
        match self.mode {
            CursorMode::Hidden => false,
            CursorMode::Visible => true,
            CursorMode::Blinking => self.blink_on,
        }
    }
}
