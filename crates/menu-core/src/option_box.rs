//! Grid-based selectable option control.
//!
//! Owns a logical `rows x columns` grid of parsed options (insertion order is
//! row-major), a visible sub-window, and the cursor/scroll animators.
//! Discrete input calls mutate selection state and return at most one
//! [`MenuEvent`]. Drawing is read-only and emits a fixed-order command
//! stream through the supplied [`DrawCtx`].
//!
//! Invariants:
//! * `selection < number_of_options()` whenever any option exists.
//! * `first_selection` is only ever set in Double select mode.
//! * A rejected configuration call leaves the previous configuration intact.

use menu_config::TimingConfig;
use menu_render::{Color, TextStyle};
use menu_text::{HAlign, anchor_x};
use tracing::{debug, warn};

use crate::cursor::{CursorAnimator, CursorMode};
use crate::event::{Direction, MenuEvent};
use crate::markup::{self, ParseError};
use crate::option::{ElementKind, MenuOption};
use crate::scroll::{ArrowFlags, Arrows, ScrollAnimator};
use crate::widget::{DrawCtx, Drawable, PositionOwning, Updatable};

/// Policy for navigation that would exit the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Stay put and report `Bounds`.
    #[default]
    None,
    /// Wrap to the opposite edge of the same row/column.
    Straight,
    /// Wrap to the opposite edge, shifted one row/column further.
    Shifted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    #[default]
    Single,
    /// Two confirms required; enables select-then-swap when switching is on.
    Double,
}

/// Outcome of applying the wrap policy to one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Moved(usize),
    Blocked,
}

pub struct OptionBox {
    options: Vec<MenuOption>,
    rows: usize,
    columns: usize,
    visible_rows: usize,
    visible_columns: usize,
    selection: Option<usize>,
    first_selection: Option<usize>,
    h_wrap: WrapMode,
    v_wrap: WrapMode,
    select_mode: SelectMode,
    skip_disabled: bool,
    switching_enabled: bool,
    cursor: CursorAnimator,
    scroll: ScrollAnimator,
    arrows: ArrowFlags,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    cursor_dx: f32,
    cursor_dy: f32,
    style: TextStyle,
}

const CURSOR_MARKER: &str = ">";

impl Default for OptionBox {
    fn default() -> Self {
        Self::with_timing(TimingConfig::default())
    }
}

impl OptionBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(timing: TimingConfig) -> Self {
        Self {
            options: Vec::new(),
            rows: 1,
            columns: 1,
            visible_rows: 1,
            visible_columns: 1,
            selection: None,
            first_selection: None,
            h_wrap: WrapMode::default(),
            v_wrap: WrapMode::default(),
            select_mode: SelectMode::default(),
            skip_disabled: false,
            switching_enabled: false,
            cursor: CursorAnimator::new(timing.cursor_blink_ms),
            scroll: ScrollAnimator::new(timing.scroll_ms),
            arrows: ArrowFlags::default(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            cursor_dx: -16.0,
            cursor_dy: 0.0,
            style: TextStyle::default(),
        }
    }

    // ---- configuration -------------------------------------------------

    /// Set the logical grid size. The visible window is clamped to it.
    pub fn set_grid(&mut self, rows: usize, columns: usize) {
        if rows == 0 || columns == 0 {
            warn!(target: "menu.option", rows, columns, "rejected_zero_grid");
            return;
        }
        self.rows = rows;
        self.columns = columns;
        // Full window by default; `set_visible` narrows it afterwards.
        self.visible_rows = rows;
        self.visible_columns = columns;
        self.scroll.reset(0, 0);
        self.recompute_arrows();
    }

    /// Set the visible sub-window. Must fit inside the logical grid.
    pub fn set_visible(&mut self, rows: usize, columns: usize) {
        if rows == 0 || columns == 0 || rows > self.rows || columns > self.columns {
            warn!(
                target: "menu.option",
                rows, columns,
                grid_rows = self.rows,
                grid_columns = self.columns,
                "rejected_visible_window"
            );
            return;
        }
        self.visible_rows = rows;
        self.visible_columns = columns;
        self.scroll.reset(0, 0);
        if let Some(sel) = self.selection {
            self.snap_visible(sel);
        }
        self.recompute_arrows();
    }

    pub fn set_vertical_wrap_mode(&mut self, mode: WrapMode) {
        self.v_wrap = mode;
    }

    pub fn set_horizontal_wrap_mode(&mut self, mode: WrapMode) {
        self.h_wrap = mode;
    }

    pub fn set_select_mode(&mut self, mode: SelectMode) {
        self.select_mode = mode;
        if mode == SelectMode::Single {
            self.first_selection = None;
        }
    }

    pub fn set_skip_disabled(&mut self, skip: bool) {
        self.skip_disabled = skip;
    }

    pub fn set_switching_enabled(&mut self, enabled: bool) {
        self.switching_enabled = enabled;
    }

    pub fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.cursor.set_mode(mode);
    }

    pub fn set_cursor_offset(&mut self, dx: f32, dy: f32) {
        self.cursor_dx = dx;
        self.cursor_dy = dy;
    }

    pub fn set_text_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    // ---- option management ---------------------------------------------

    /// Replace all options from format strings, all-or-nothing: if any
    /// string fails to parse, the previously committed options (and the
    /// selection) are left untouched.
    pub fn set_options<S: AsRef<str>>(&mut self, formats: &[S]) -> Result<(), ParseError> {
        let mut staged = Vec::with_capacity(formats.len());
        for format in formats {
            match markup::parse(format.as_ref()) {
                Ok(option) => staged.push(option),
                Err(e) => {
                    warn!(target: "menu.parse", error = %e, "set_options_batch_rejected");
                    return Err(e);
                }
            }
        }
        self.options = staged;
        self.first_selection = None;
        self.selection = match self.selection {
            Some(sel) if sel < self.options.len() => Some(sel),
            _ if !self.options.is_empty() => Some(0),
            _ => None,
        };
        self.scroll.reset(0, 0);
        if let Some(sel) = self.selection {
            self.snap_visible(sel);
        }
        self.recompute_arrows();
        Ok(())
    }

    /// Append a single option.
    pub fn add_option(&mut self, format: &str) -> Result<(), ParseError> {
        let option = markup::parse(format)?;
        self.options.push(option);
        if self.selection.is_none() {
            self.selection = Some(0);
        }
        self.recompute_arrows();
        Ok(())
    }

    /// Replace one option's content in place. An out-of-range index is a
    /// warned no-op.
    pub fn set_option_text(&mut self, index: usize, format: &str) -> Result<(), ParseError> {
        if index >= self.options.len() {
            warn!(target: "menu.option", index, len = self.options.len(), "set_option_text_out_of_range");
            return Ok(());
        }
        let parsed = markup::parse(format)?;
        let disabled = self.options[index].disabled;
        let action = self.options[index].action;
        self.options[index] = MenuOption {
            disabled,
            action,
            ..parsed
        };
        Ok(())
    }

    pub fn enable_option(&mut self, index: usize, enabled: bool) {
        match self.options.get_mut(index) {
            Some(option) => option.disabled = !enabled,
            None => {
                warn!(target: "menu.option", index, len = self.options.len(), "enable_option_out_of_range");
            }
        }
    }

    pub fn is_option_enabled(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|o| !o.disabled)
    }

    /// Attach an opaque action id reported back in `Confirm` events.
    pub fn set_option_action(&mut self, index: usize, action: u32) {
        match self.options.get_mut(index) {
            Some(option) => option.action = Some(action),
            None => {
                warn!(target: "menu.option", index, len = self.options.len(), "set_option_action_out_of_range");
            }
        }
    }

    /// Drop all options and any in-flight scroll animation.
    pub fn clear_options(&mut self) {
        self.options.clear();
        self.selection = None;
        self.first_selection = None;
        self.scroll.reset(0, 0);
        self.recompute_arrows();
    }

    pub fn number_of_options(&self) -> usize {
        self.options.len()
    }

    pub fn option(&self, index: usize) -> Option<&MenuOption> {
        self.options.get(index)
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn first_selection(&self) -> Option<usize> {
        self.first_selection
    }

    /// Move the selection directly. Out-of-range indices are warned no-ops.
    pub fn set_selection(&mut self, index: usize) {
        if index >= self.options.len() {
            warn!(target: "menu.option", index, len = self.options.len(), "set_selection_out_of_range");
            return;
        }
        self.selection = Some(index);
        if self.select_mode == SelectMode::Single {
            self.first_selection = None;
        }
        self.ensure_visible(index);
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_scrolling()
    }

    pub fn arrows(&self) -> ArrowFlags {
        self.arrows
    }

    pub fn scroll_window(&self) -> (usize, usize) {
        (self.scroll.top_row(), self.scroll.left_col())
    }

    // ---- input ---------------------------------------------------------

    pub fn input_up(&mut self) -> Option<MenuEvent> {
        self.input_move(Direction::Up)
    }

    pub fn input_down(&mut self) -> Option<MenuEvent> {
        self.input_move(Direction::Down)
    }

    pub fn input_left(&mut self) -> Option<MenuEvent> {
        self.input_move(Direction::Left)
    }

    pub fn input_right(&mut self) -> Option<MenuEvent> {
        self.input_move(Direction::Right)
    }

    pub fn input_confirm(&mut self) -> Option<MenuEvent> {
        let sel = self.selection?;
        if self.options[sel].disabled {
            debug!(target: "menu.option", index = sel, "confirm_on_disabled_ignored");
            return None;
        }
        match self.select_mode {
            SelectMode::Single => Some(MenuEvent::Confirm {
                index: sel,
                action: self.options[sel].action,
            }),
            SelectMode::Double => match self.first_selection {
                None => {
                    self.first_selection = Some(sel);
                    None
                }
                Some(first) if first == sel => {
                    self.first_selection = None;
                    Some(MenuEvent::Confirm {
                        index: sel,
                        action: self.options[sel].action,
                    })
                }
                Some(first) => {
                    if self.switching_enabled {
                        self.options.swap(first, sel);
                        self.first_selection = None;
                        Some(MenuEvent::Switch {
                            first,
                            second: sel,
                        })
                    } else {
                        self.first_selection = Some(sel);
                        None
                    }
                }
            },
        }
    }

    /// Cancel clears a pending first selection before it surfaces as an
    /// event; with nothing pending it reports `Cancel`.
    pub fn input_cancel(&mut self) -> Option<MenuEvent> {
        if self.first_selection.take().is_some() {
            return None;
        }
        Some(MenuEvent::Cancel)
    }

    fn input_move(&mut self, dir: Direction) -> Option<MenuEvent> {
        let sel = self.selection?;
        let target = if self.skip_disabled {
            self.find_enabled(sel, dir)
        } else {
            match self.step_from(sel, dir) {
                Step::Moved(i) => Some(i),
                Step::Blocked => None,
            }
        };
        match target {
            Some(i) if i != sel => {
                self.selection = Some(i);
                if self.select_mode == SelectMode::Single {
                    self.first_selection = None;
                }
                self.ensure_visible(i);
                None
            }
            // Wrapped onto itself (single row/column): no movement, no event.
            Some(_) => None,
            None => Some(MenuEvent::Bounds(dir)),
        }
    }

    /// One navigation step from `index`, applying the axis wrap policy. A
    /// candidate beyond the last option behaves as out-of-bounds.
    fn step_from(&self, index: usize, dir: Direction) -> Step {
        let cols = self.columns;
        let rows = self.rows;
        let (row, col) = (index / cols, index % cols);
        let candidate = match dir {
            Direction::Up => {
                if row > 0 {
                    Some(index - cols)
                } else {
                    match self.v_wrap {
                        WrapMode::None => None,
                        WrapMode::Straight => Some((rows - 1) * cols + col),
                        WrapMode::Shifted => {
                            Some((rows - 1) * cols + (col + cols - 1) % cols)
                        }
                    }
                }
            }
            Direction::Down => {
                if row + 1 < rows {
                    Some(index + cols)
                } else {
                    match self.v_wrap {
                        WrapMode::None => None,
                        WrapMode::Straight => Some(col),
                        WrapMode::Shifted => Some((col + 1) % cols),
                    }
                }
            }
            Direction::Left => {
                if col > 0 {
                    Some(index - 1)
                } else {
                    match self.h_wrap {
                        WrapMode::None => None,
                        WrapMode::Straight => Some(index + cols - 1),
                        WrapMode::Shifted => {
                            Some(((row + rows - 1) % rows) * cols + cols - 1)
                        }
                    }
                }
            }
            Direction::Right => {
                if col + 1 < cols {
                    Some(index + 1)
                } else {
                    match self.h_wrap {
                        WrapMode::None => None,
                        WrapMode::Straight => Some(index + 1 - cols),
                        WrapMode::Shifted => Some(((row + 1) % rows) * cols),
                    }
                }
            }
        };
        match candidate {
            Some(i) if i < self.options.len() => Step::Moved(i),
            _ => Step::Blocked,
        }
    }

    /// Repeat `step_from` until a non-disabled option is reached. Bounded by
    /// the grid size so a fully disabled loop terminates.
    fn find_enabled(&self, start: usize, dir: Direction) -> Option<usize> {
        let mut current = start;
        for _ in 0..self.rows * self.columns {
            match self.step_from(current, dir) {
                Step::Moved(i) => {
                    if i == start {
                        return None;
                    }
                    if !self.options[i].disabled {
                        return Some(i);
                    }
                    current = i;
                }
                Step::Blocked => return None,
            }
        }
        None
    }

    // ---- scrolling -----------------------------------------------------

    /// Shift the window (animated) until `index` is inside it.
    fn ensure_visible(&mut self, index: usize) {
        let (row, col) = (index / self.columns, index % self.columns);
        let top = self.scroll.top_row();
        let left = self.scroll.left_col();
        let mut row_delta = 0i32;
        let mut col_delta = 0i32;
        if row < top {
            row_delta = -((top - row) as i32);
        } else if row >= top + self.visible_rows {
            row_delta = (row - (top + self.visible_rows - 1)) as i32;
        }
        if col < left {
            col_delta = -((left - col) as i32);
        } else if col >= left + self.visible_columns {
            col_delta = (col - (left + self.visible_columns - 1)) as i32;
        }
        self.scroll.shift(row_delta, col_delta);
        self.recompute_arrows();
    }

    /// As `ensure_visible` but without animation (structural changes).
    fn snap_visible(&mut self, index: usize) {
        self.ensure_visible(index);
        self.scroll
            .reset(self.scroll.top_row(), self.scroll.left_col());
    }

    fn occupied_rows(&self) -> usize {
        self.options.len().div_ceil(self.columns)
    }

    fn occupied_columns(&self) -> usize {
        self.options.len().min(self.columns)
    }

    fn recompute_arrows(&mut self) {
        let mut shown = Arrows::empty();
        let mut active = Arrows::empty();
        let occ_rows = self.occupied_rows();
        let occ_cols = self.occupied_columns();
        if occ_rows > self.visible_rows {
            shown |= Arrows::UP | Arrows::DOWN;
            if self.scroll.top_row() > 0 {
                active |= Arrows::UP;
            }
            if self.scroll.top_row() + self.visible_rows < occ_rows {
                active |= Arrows::DOWN;
            }
        }
        if occ_cols > self.visible_columns {
            shown |= Arrows::LEFT | Arrows::RIGHT;
            if self.scroll.left_col() > 0 {
                active |= Arrows::LEFT;
            }
            if self.scroll.left_col() + self.visible_columns < occ_cols {
                active |= Arrows::RIGHT;
            }
        }
        self.arrows = ArrowFlags { shown, active };
    }

    // ---- frame ---------------------------------------------------------

    pub fn update(&mut self, dt_ms: u32) {
        self.cursor.update(dt_ms);
        self.scroll.update(dt_ms);
    }

    pub fn draw(&self, ctx: &mut DrawCtx<'_>) {
        if self.options.is_empty() || self.visible_rows == 0 || self.visible_columns == 0 {
            return;
        }
        let cell_w = self.width / self.visible_columns as f32;
        let cell_h = self.height / self.visible_rows as f32;
        let down = -ctx.coords.y_dir();
        let right = ctx.coords.x_dir();
        let (row_off, col_off) = self.scroll.offset();
        let top = self.scroll.top_row();
        let left = self.scroll.left_col();

        ctx.surface.push_state();
        // Clip to the box while content slides during a scroll transition.
        // Rows advance along `down`, so the box's low edge sits a full height
        // away from its origin.
        ctx.surface.set_clip(Some(ctx.coords.oriented_rect(
            self.x,
            self.y + down * self.height,
            self.width,
            self.height,
        )));

        for vis_row in 0..self.visible_rows {
            for vis_col in 0..self.visible_columns {
                let row = top + vis_row;
                let col = left + vis_col;
                if col >= self.columns {
                    continue;
                }
                let index = row * self.columns + col;
                let Some(option) = self.options.get(index) else {
                    continue;
                };
                let cell_x = self.x + right * (vis_col as f32 + col_off) * cell_w;
                let cell_y = self.y + down * (vis_row as f32 + row_off) * cell_h;
                self.draw_option(ctx, option, cell_x, cell_y, cell_w);
                if Some(index) == self.selection && self.cursor.visible() {
                    self.draw_cursor(ctx, cell_x, cell_y, 1.0);
                } else if Some(index) == self.first_selection {
                    // Pending half of a double confirm: dimmed marker.
                    self.draw_cursor(ctx, cell_x, cell_y, 0.5);
                }
            }
        }

        ctx.surface.pop_state();
    }

    fn draw_cursor(&self, ctx: &mut DrawCtx<'_>, cell_x: f32, cell_y: f32, alpha: f32) {
        ctx.surface
            .move_to(cell_x + self.cursor_dx, cell_y + self.cursor_dy);
        ctx.surface.draw_text(CURSOR_MARKER, &self.style, alpha);
    }

    /// Draw one option's element list inside its cell. Alignment elements
    /// re-anchor subsequent runs; position elements set the pen directly.
    fn draw_option(
        &self,
        ctx: &mut DrawCtx<'_>,
        option: &MenuOption,
        cell_x: f32,
        cell_y: f32,
        cell_w: f32,
    ) {
        let right = ctx.coords.x_dir();
        let mut align = HAlign::Left;
        let mut pen = 0.0f32;
        let style = if option.disabled {
            TextStyle {
                color: Color::GRAY,
                ..self.style
            }
        } else {
            self.style
        };
        for element in &option.elements {
            match element.kind {
                ElementKind::LeftAlign => {
                    align = HAlign::Left;
                    pen = 0.0;
                }
                ElementKind::CenterAlign => align = HAlign::Center,
                ElementKind::RightAlign => align = HAlign::Right,
                ElementKind::Position => pen = element.value as f32,
                ElementKind::Text => {
                    let run = &option.text_runs[element.value as usize];
                    let run_w = ctx.metrics.text_width(run);
                    let offset = match align {
                        HAlign::Left => pen,
                        _ => anchor_x(align, cell_w, run_w),
                    };
                    ctx.surface.move_to(cell_x + right * offset, cell_y);
                    ctx.surface.draw_text(run, &style, 1.0);
                    if align == HAlign::Left {
                        pen = offset + run_w;
                    }
                }
                ElementKind::Image => {
                    let image = &option.images[element.value as usize];
                    ctx.surface.move_to(cell_x + right * pen, cell_y);
                    ctx.surface.draw_image(image, 1.0);
                    pen += image.width;
                }
            }
        }
    }
}

impl Updatable for OptionBox {
    fn update(&mut self, dt_ms: u32) {
        OptionBox::update(self, dt_ms);
    }
}

impl Drawable for OptionBox {
    fn draw(&self, ctx: &mut DrawCtx<'_>) {
        OptionBox::draw(self, ctx);
    }
}

impl PositionOwning for OptionBox {
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
