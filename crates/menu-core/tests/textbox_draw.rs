//! TextBox draw streams: per-mode reveal behavior against a recording
//! surface with fixed-advance metrics (one cell per character).

use menu_core::{DisplayMode, DrawCtx, PositionOwning, TextBox};
use menu_render::{CoordSys, DrawOp, Rect, RecordingSurface};
use menu_text::FixedAdvance;

fn draw(tb: &TextBox) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    let metrics = FixedAdvance::default();
    let mut ctx = DrawCtx {
        surface: &mut surface,
        metrics: &metrics,
        coords: CoordSys::top_down(100.0, 50.0),
    };
    tb.draw(&mut ctx);
    surface
}

fn make(mode: DisplayMode, cps: f32, text: &str) -> TextBox {
    let mut tb = TextBox::new();
    tb.set_dimensions(100.0, 50.0);
    tb.set_display_mode(mode);
    tb.set_display_speed(cps);
    tb.set_display_text(&FixedAdvance::default(), text);
    tb
}

fn texts(surface: &RecordingSurface) -> Vec<(String, f32)> {
    surface
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, alpha, .. } => Some((text.clone(), *alpha)),
            _ => None,
        })
        .collect()
}

#[test]
fn char_mode_draws_completed_prefix_only() {
    let mut tb = make(DisplayMode::Char, 100.0, "abcd");
    tb.update(25); // 2.5 of 4 characters
    let ops = texts(&draw(&tb));
    assert_eq!(ops, vec![("ab".to_string(), 1.0)]);
}

#[test]
fn char_mode_finished_draws_everything() {
    let mut tb = make(DisplayMode::Char, 100.0, "abcd");
    tb.update(40);
    let ops = texts(&draw(&tb));
    assert_eq!(ops, vec![("abcd".to_string(), 1.0)]);
}

#[test]
fn fade_char_boundary_gets_fractional_alpha() {
    let mut tb = make(DisplayMode::FadeChar, 100.0, "abcd");
    tb.update(25);
    let ops = texts(&draw(&tb));
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0], ("ab".to_string(), 1.0));
    assert_eq!(ops[1].0, "c");
    assert!((ops[1].1 - 0.5).abs() < 1e-3);
}

#[test]
fn fade_line_boundary_line_fades() {
    // Width 5 wraps "aa bb cc" into two lines; 30 cps at 30 chars/line
    // pacing gives 1000ms per line.
    let mut tb = TextBox::new();
    tb.set_dimensions(5.0, 50.0);
    tb.set_display_mode(DisplayMode::FadeLine);
    tb.set_display_speed(30.0);
    tb.set_display_text(&FixedAdvance::default(), "aa bb cc");
    tb.update(1500);
    let ops = texts(&draw(&tb));
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0], ("aa bb".to_string(), 1.0));
    assert_eq!(ops[1].0, "cc");
    assert!((ops[1].1 - 0.5).abs() < 1e-3);
}

#[test]
fn reveal_mode_clips_the_boundary_character() {
    let mut tb = make(DisplayMode::Reveal, 100.0, "abcd");
    tb.update(25);
    let surface = draw(&tb);
    // Prefix, then push/clip/char/pop in fixed order.
    assert_eq!(surface.ops.len(), 5);
    assert!(matches!(&surface.ops[0], DrawOp::Text { text, .. } if text == "ab"));
    assert!(matches!(surface.ops[1], DrawOp::Push));
    match surface.ops[2] {
        DrawOp::Clip(Some(Rect { x, y, w, h })) => {
            assert_eq!(x, 2.0, "clip starts at the boundary glyph");
            assert_eq!(y, 0.0);
            assert!((w - 0.5).abs() < 1e-3, "half the glyph advance");
            assert_eq!(h, 1.0);
        }
        ref other => panic!("expected clip op, got {other:?}"),
    }
    assert!(
        matches!(&surface.ops[3], DrawOp::Text { text, alpha, .. } if text == "c" && *alpha == 1.0)
    );
    assert!(matches!(surface.ops[4], DrawOp::Pop));
}

#[test]
fn reveal_clip_respects_flipped_vertical_axis() {
    let mut tb = make(DisplayMode::Reveal, 100.0, "abcd");
    tb.update(25);
    let mut surface = RecordingSurface::new();
    let metrics = FixedAdvance::default();
    let mut ctx = DrawCtx {
        surface: &mut surface,
        metrics: &metrics,
        coords: CoordSys::bottom_up(100.0, 50.0),
    };
    tb.draw(&mut ctx);
    let clip = surface.ops.iter().find_map(|op| match op {
        DrawOp::Clip(Some(r)) => Some(*r),
        _ => None,
    });
    let clip = clip.expect("reveal emits a clip rect");
    // Lines advance downward (negative y here); the glyph cell spans
    // [line_y - h, line_y].
    assert_eq!(clip.y, -1.0);
    assert_eq!(clip.h, 1.0);
}

#[test]
fn instant_mode_is_one_pre_rendered_block() {
    let tb = make(DisplayMode::Instant, 100.0, "aa bb cc");
    let ops = texts(&draw(&tb));
    assert_eq!(ops, vec![("aa bb cc".to_string(), 1.0)]);
}

#[test]
fn draw_is_idempotent() {
    let mut tb = make(DisplayMode::FadeChar, 100.0, "abcdef");
    tb.update(17);
    let first = draw(&tb).ops;
    let second = draw(&tb).ops;
    assert_eq!(first, second);
}

#[test]
fn empty_textbox_draws_nothing() {
    let tb = TextBox::new();
    assert!(draw(&tb).ops.is_empty());
}
