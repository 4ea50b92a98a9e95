//! Interactive terminal demonstration of the menu widget core.
//!
//! Drives an `OptionBox` and a `TextBox` against a crossterm cell surface:
//! arrow keys navigate, Enter confirms (double-confirm swap mode on the
//! menu), Backspace cancels, `q`/Esc quits. Each confirmed option feeds a
//! new string into the text box so every reveal mode can be watched live.

use std::io::{Stdout, Write, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{Event, KeyCode, KeyEventKind, poll, read},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use menu_core::{
    CursorMode, DisplayMode, DrawCtx, MenuEvent, OptionBox, PositionOwning, SelectMode, TextBox,
    WrapMode,
};
use menu_render::{CoordSys, DrawSurface, ImageHandle, Rect, TextStyle};
use menu_text::{FixedAdvance, grapheme_count, grapheme_prefix};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "menukit", version, about = "menu widget demo")]
struct Args {
    /// Optional configuration file path (overrides discovery of `menukit.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// Text reveal mode: instant | char | fadechar | fadeline | reveal.
    #[arg(long = "reveal", default_value = "reveal")]
    reveal: String,
}

fn parse_mode(name: &str) -> DisplayMode {
    match name.to_ascii_lowercase().as_str() {
        "instant" => DisplayMode::Instant,
        "char" => DisplayMode::Char,
        "fadechar" => DisplayMode::FadeChar,
        "fadeline" => DisplayMode::FadeLine,
        _ => DisplayMode::Reveal,
    }
}

/// Cell-based draw surface. One terminal cell is one coordinate unit; alpha
/// below full renders dim, and the clip rect truncates per grapheme.
struct TermSurface {
    out: Stdout,
    pen: (f32, f32),
    clip: Option<Rect>,
    stack: Vec<((f32, f32), Option<Rect>)>,
}

impl TermSurface {
    fn new() -> Self {
        Self {
            out: stdout(),
            pen: (0.0, 0.0),
            clip: None,
            stack: Vec::new(),
        }
    }

    fn clipped<'t>(&self, text: &'t str) -> Option<(&'t str, f32)> {
        let (x, y) = self.pen;
        let Some(clip) = self.clip else {
            return Some((text, x));
        };
        if y < clip.y || y >= clip.y + clip.h || x >= clip.x + clip.w {
            return None;
        }
        // Truncate to the columns inside the clip. Partial columns round
        // down, which is the closest a cell grid gets to a sub-character
        // wipe.
        let budget = ((clip.x + clip.w - x).floor() as usize).min(grapheme_count(text));
        if budget == 0 {
            return None;
        }
        Some((grapheme_prefix(text, budget), x))
    }
}

impl DrawSurface for TermSurface {
    fn move_to(&mut self, x: f32, y: f32) {
        self.pen = (x, y);
    }

    fn move_rel(&mut self, dx: f32, dy: f32) {
        self.pen.0 += dx;
        self.pen.1 += dy;
    }

    fn draw_text(&mut self, text: &str, _style: &TextStyle, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        let Some((visible, x)) = self.clipped(text) else {
            return;
        };
        if x < 0.0 || self.pen.1 < 0.0 {
            return;
        }
        let attr = if alpha < 0.999 {
            Attribute::Dim
        } else {
            Attribute::Reset
        };
        let _ = queue!(
            self.out,
            MoveTo(x as u16, self.pen.1 as u16),
            SetAttribute(attr),
            Print(visible),
            SetAttribute(Attribute::Reset),
        );
    }

    fn draw_image(&mut self, _image: &ImageHandle, alpha: f32) {
        // No textures on a terminal; mark the slot.
        self.draw_text("\u{25a1}", &TextStyle::default(), alpha);
    }

    fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
    }

    fn push_state(&mut self) {
        self.stack.push((self.pen, self.clip));
    }

    fn pop_state(&mut self) {
        if let Some((pen, clip)) = self.stack.pop() {
            self.pen = pen;
            self.clip = clip;
        }
    }
}

/// Raw-mode guard: restores the terminal on drop, panics included.
struct TermGuard;

impl TermGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn configure_logging() -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(".", "menukit.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

const BLURBS: [&str; 4] = [
    "The mythril knife hums faintly when drawn.\nIt remembers older hands.",
    "A phoenix down: one use, no refunds, and the bird holds a grudge.",
    "The bronze shield has seen better days. So have you.",
    "You cannot equip the barrel. Stop asking.",
];

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging()?;
    info!(target: "demo", "startup");

    let config = menu_config::load_from(args.config.clone())?;
    let metrics = FixedAdvance::default();

    let mut menu = OptionBox::with_timing(config.timing());
    menu.set_grid(4, 2);
    menu.set_visible(2, 2);
    menu.set_position(4.0, 2.0);
    menu.set_dimensions(40.0, 4.0);
    menu.set_cursor_offset(-2.0, 0.0);
    menu.set_cursor_mode(CursorMode::Blinking);
    menu.set_select_mode(SelectMode::Double);
    menu.set_switching_enabled(true);
    menu.set_vertical_wrap_mode(WrapMode::Straight);
    menu.set_options(&[
        "Mythril knife<r>500",
        "Phoenix down<r>180",
        "Bronze shield<r>320",
        "Barrel<r>--",
        "Tonic<r>12",
        "Rope<r>8",
        "Lantern<r>45",
        "Map fragment<r>?",
    ])?;
    menu.enable_option(3, false);

    let mut textbox = TextBox::with_defaults(config.text());
    textbox.set_position(4.0, 9.0);
    textbox.set_dimensions(50.0, 6.0);
    textbox.set_display_mode(parse_mode(&args.reveal));
    textbox.set_display_speed(30.0);
    textbox.set_display_text(&metrics, "Pick something. Enter twice to confirm, Enter on two different items to swap them.");

    let _guard = TermGuard::enter()?;
    let mut surface = TermSurface::new();
    let mut last_event = String::from("-");
    let mut last_frame = Instant::now();

    loop {
        if poll(Duration::from_millis(16))? {
            if let Event::Key(key) = read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                let event = match key.code {
                    KeyCode::Up => menu.input_up(),
                    KeyCode::Down => menu.input_down(),
                    KeyCode::Left => menu.input_left(),
                    KeyCode::Right => menu.input_right(),
                    KeyCode::Enter => menu.input_confirm(),
                    KeyCode::Backspace => menu.input_cancel(),
                    KeyCode::Esc | KeyCode::Char('q') => break,
                    _ => None,
                };
                if let Some(event) = event {
                    info!(target: "demo", ?event, "menu_event");
                    last_event = format!("{event:?}");
                    if let MenuEvent::Confirm { index, .. } = event {
                        textbox.set_display_text(&metrics, BLURBS[index % BLURBS.len()]);
                    }
                }
            }
        }

        let dt = last_frame.elapsed().as_millis() as u32;
        last_frame = Instant::now();
        menu.update(dt);
        textbox.update(dt);

        let (cols, rows) = crossterm::terminal::size()?;
        queue!(surface.out, Clear(ClearType::All))?;
        {
            let mut ctx = DrawCtx {
                surface: &mut surface,
                metrics: &metrics,
                coords: CoordSys::top_down(cols as f32, rows as f32),
            };
            menu.draw(&mut ctx);
            textbox.draw(&mut ctx);
        }
        surface.move_to(4.0, rows.saturating_sub(2) as f32);
        surface.draw_text(
            &format!("last event: {last_event}"),
            &TextStyle::default(),
            1.0,
        );
        surface.out.flush()?;
    }

    info!(target: "demo", "shutdown");
    Ok(())
}
