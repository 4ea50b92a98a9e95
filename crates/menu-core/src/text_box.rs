//! Progressive text reveal control.
//!
//! Five display modes: instant, per-character, alpha-fading per character,
//! alpha-fading per line, and a clipped "typewriter wipe" per character. The
//! engine is a pure accumulated-millisecond timer: `update(dt)` advances,
//! `draw` derives everything from `elapsed / end_time` and mutates nothing.
//!
//! `set_display_text` with text identical to the stored text is a no-op so a
//! caller can re-feed its current string every frame without restarting the
//! reveal.

use menu_config::TextConfig;
use menu_render::TextStyle;
use menu_text::{
    HAlign, Metrics, TextReformatter, VAlign, anchor_x, anchor_y, grapheme_at, grapheme_count,
    grapheme_prefix,
};
use tracing::warn;

use crate::widget::{DrawCtx, Drawable, PositionOwning, Updatable};

/// Nominal characters per line used to pace `FadeLine` reveals.
pub const CHARS_PER_LINE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Whole block at once, no timer.
    Instant,
    /// Characters appear one at a time.
    #[default]
    Char,
    /// As `Char`, with the newest character alpha-fading in.
    FadeChar,
    /// Whole lines alpha-fade in one after another.
    FadeLine,
    /// As `FadeChar`, but the newest character is clipped instead of faded.
    Reveal,
}

pub struct TextBox {
    text: String,
    lines: Vec<String>,
    mode: DisplayMode,
    speed_cps: f32,
    elapsed_ms: u32,
    end_time_ms: u32,
    finished: bool,
    num_chars: u32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    x_align: HAlign,
    y_align: VAlign,
    text_xpos: f32,
    text_ypos: f32,
    style: TextStyle,
}

impl Default for TextBox {
    fn default() -> Self {
        Self::with_defaults(TextConfig::default())
    }
}

impl TextBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(text: TextConfig) -> Self {
        Self {
            text: String::new(),
            lines: Vec::new(),
            mode: DisplayMode::default(),
            speed_cps: text.default_speed_cps,
            elapsed_ms: 0,
            end_time_ms: 0,
            finished: false,
            num_chars: 0,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            x_align: HAlign::default(),
            y_align: VAlign::default(),
            text_xpos: 0.0,
            text_ypos: 0.0,
            style: TextStyle::default(),
        }
    }

    // ---- configuration -------------------------------------------------

    /// Reveal speed in characters per second. Non-positive values are
    /// rejected; the previous speed stays in effect.
    pub fn set_display_speed(&mut self, cps: f32) {
        if cps <= 0.0 {
            warn!(target: "menu.text", cps, "rejected_display_speed");
            return;
        }
        self.speed_cps = cps;
        self.recompute_end_time();
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.recompute_end_time();
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    /// Alignment of the wrapped block inside the box. Anchors are derived
    /// from the current lines, so metrics are required.
    pub fn set_alignment(&mut self, metrics: &dyn Metrics, x_align: HAlign, y_align: VAlign) {
        self.x_align = x_align;
        self.y_align = y_align;
        self.recompute_anchors(metrics);
    }

    pub fn set_text_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    // ---- text lifecycle ------------------------------------------------

    /// Store new display text and restart the reveal. A no-op when `text`
    /// equals the currently stored text (the timer is not reset).
    pub fn set_display_text(&mut self, metrics: &dyn Metrics, text: &str) {
        if text == self.text {
            return;
        }
        self.text = text.to_string();
        self.lines = TextReformatter::new(metrics).wrap(text, self.width);
        self.num_chars = text
            .split('\n')
            .map(grapheme_count)
            .sum::<usize>() as u32;
        self.elapsed_ms = 0;
        self.finished = false;
        self.recompute_end_time();
        self.recompute_anchors(metrics);
    }

    /// Discard stored text and any in-flight reveal.
    pub fn clear_text(&mut self) {
        self.text.clear();
        self.lines.clear();
        self.num_chars = 0;
        self.elapsed_ms = 0;
        self.end_time_ms = 0;
        self.finished = false;
    }

    /// Jump the reveal to its end.
    pub fn force_finish(&mut self) {
        self.elapsed_ms = self.end_time_ms;
        if !self.text.is_empty() {
            self.finished = true;
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn recompute_end_time(&mut self) {
        self.end_time_ms = match self.mode {
            DisplayMode::Instant => 0,
            DisplayMode::Char | DisplayMode::FadeChar | DisplayMode::Reveal => {
                (1000.0 * self.num_chars as f32 / self.speed_cps) as u32
            }
            DisplayMode::FadeLine => {
                (1000.0 * self.lines.len() as f32 * CHARS_PER_LINE as f32 / self.speed_cps) as u32
            }
        };
        if !self.text.is_empty() {
            self.finished =
                self.mode == DisplayMode::Instant || self.elapsed_ms >= self.end_time_ms;
        }
    }

    fn recompute_anchors(&mut self, metrics: &dyn Metrics) {
        let content_h = self.lines.len() as f32 * metrics.line_height();
        let content_w = self
            .lines
            .iter()
            .map(|l| metrics.text_width(l))
            .fold(0.0f32, f32::max);
        self.text_xpos = anchor_x(self.x_align, self.width, content_w);
        self.text_ypos = anchor_y(self.y_align, self.height, content_h);
    }

    // ---- frame ---------------------------------------------------------

    pub fn update(&mut self, dt_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if !self.text.is_empty() && self.elapsed_ms >= self.end_time_ms {
            self.finished = true;
        }
    }

    pub fn draw(&self, ctx: &mut DrawCtx<'_>) {
        if self.text.is_empty() {
            return;
        }
        let percent = if self.finished || self.end_time_ms == 0 {
            1.0
        } else {
            (self.elapsed_ms as f32 / self.end_time_ms as f32).min(1.0)
        };
        match self.mode {
            DisplayMode::Instant => self.draw_instant(ctx),
            DisplayMode::FadeLine => self.draw_fade_line(ctx, percent),
            DisplayMode::Char | DisplayMode::FadeChar | DisplayMode::Reveal => {
                self.draw_per_char(ctx, percent)
            }
        }
    }

    /// Origin of line `i` in backend coordinates.
    fn line_origin(&self, ctx: &DrawCtx<'_>, i: usize, line: &str) -> (f32, f32) {
        let right = ctx.coords.x_dir();
        let down = -ctx.coords.y_dir();
        let x = self.x + right * anchor_x(self.x_align, self.width, ctx.metrics.text_width(line));
        let y = self.y + down * (self.text_ypos + i as f32 * ctx.metrics.line_height());
        (x, y)
    }

    /// One draw op for the whole block, the pre-rendered-image path.
    fn draw_instant(&self, ctx: &mut DrawCtx<'_>) {
        let right = ctx.coords.x_dir();
        let down = -ctx.coords.y_dir();
        ctx.surface.move_to(
            self.x + right * self.text_xpos,
            self.y + down * self.text_ypos,
        );
        ctx.surface.draw_text(&self.text, &self.style, 1.0);
    }

    fn draw_fade_line(&self, ctx: &mut DrawCtx<'_>, percent: f32) {
        let budget = percent * self.lines.len() as f32;
        let whole = budget.floor() as usize;
        let fract = budget - whole as f32;
        for (i, line) in self.lines.iter().enumerate() {
            let (x, y) = self.line_origin(ctx, i, line);
            if i < whole {
                ctx.surface.move_to(x, y);
                ctx.surface.draw_text(line, &self.style, 1.0);
            } else if i == whole && fract > 0.0 {
                ctx.surface.move_to(x, y);
                ctx.surface.draw_text(line, &self.style, fract);
                break;
            } else {
                break;
            }
        }
    }

    fn draw_per_char(&self, ctx: &mut DrawCtx<'_>, percent: f32) {
        let budget = percent * self.num_chars as f32;
        let whole = budget.floor() as usize;
        let fract = budget - whole as f32;
        let mut consumed = 0usize;
        for (i, line) in self.lines.iter().enumerate() {
            let line_len = grapheme_count(line);
            let (x, y) = self.line_origin(ctx, i, line);
            if consumed + line_len <= whole {
                // Fully revealed line.
                ctx.surface.move_to(x, y);
                ctx.surface.draw_text(line, &self.style, 1.0);
                consumed += line_len;
                continue;
            }
            // The straddling line: completed prefix, then the boundary
            // character per mode. Later lines draw nothing.
            let shown = whole - consumed;
            let prefix = grapheme_prefix(line, shown);
            if !prefix.is_empty() {
                ctx.surface.move_to(x, y);
                ctx.surface.draw_text(prefix, &self.style, 1.0);
            }
            if let Some(boundary) = grapheme_at(line, shown) {
                self.draw_boundary_char(ctx, x, y, prefix, boundary, fract);
            }
            break;
        }
    }

    fn draw_boundary_char(
        &self,
        ctx: &mut DrawCtx<'_>,
        line_x: f32,
        line_y: f32,
        prefix: &str,
        boundary: &str,
        fract: f32,
    ) {
        if fract <= 0.0 {
            return;
        }
        let right = ctx.coords.x_dir();
        let char_x = line_x + right * ctx.metrics.text_width(prefix);
        match self.mode {
            DisplayMode::FadeChar => {
                ctx.surface.move_to(char_x, line_y);
                ctx.surface.draw_text(boundary, &self.style, fract);
            }
            DisplayMode::Reveal => {
                let char_w = ctx.metrics.text_width(boundary);
                let line_h = ctx.metrics.line_height();
                // Clip spans the glyph cell from its top edge to its bottom
                // edge; width grows with the fractional character. Origin is
                // the line's bottom so the rect normalizes correctly under
                // either vertical direction.
                let bottom = line_y - ctx.coords.y_dir() * line_h;
                let clip = ctx
                    .coords
                    .oriented_rect(char_x, bottom, fract * char_w, line_h);
                ctx.surface.push_state();
                ctx.surface.set_clip(Some(clip));
                ctx.surface.move_to(char_x, line_y);
                ctx.surface.draw_text(boundary, &self.style, 1.0);
                ctx.surface.pop_state();
            }
            // Plain Char mode reveals whole characters only.
            _ => {}
        }
    }
}

impl Updatable for TextBox {
    fn update(&mut self, dt_ms: u32) {
        TextBox::update(self, dt_ms);
    }
}

impl Drawable for TextBox {
    fn draw(&self, ctx: &mut DrawCtx<'_>) {
        TextBox::draw(self, ctx);
    }
}

impl PositionOwning for TextBox {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn set_dimensions(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}
