//! OptionBox draw stream: cell layout, alignment, cursor, disabled styling.

use menu_core::{CursorMode, DrawCtx, OptionBox, PositionOwning};
use menu_render::{Color, CoordSys, DrawOp, RecordingSurface};
use menu_text::FixedAdvance;

fn draw(ob: &OptionBox) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    let metrics = FixedAdvance::default();
    let mut ctx = DrawCtx {
        surface: &mut surface,
        metrics: &metrics,
        coords: CoordSys::top_down(100.0, 50.0),
    };
    ob.draw(&mut ctx);
    surface
}

fn text_ops(surface: &RecordingSurface) -> Vec<(f32, f32, String, f32)> {
    surface
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text {
                x, y, text, alpha, ..
            } => Some((*x, *y, text.clone(), *alpha)),
            _ => None,
        })
        .collect()
}

fn menu() -> OptionBox {
    let mut ob = OptionBox::new();
    ob.set_grid(2, 1);
    ob.set_position(10.0, 5.0);
    ob.set_dimensions(20.0, 4.0);
    ob.set_cursor_offset(-2.0, 0.0);
    ob.set_cursor_mode(CursorMode::Visible);
    ob
}

#[test]
fn rows_stack_downward_in_cell_steps() {
    let mut ob = menu();
    ob.set_options(&["aa", "bb"]).unwrap();
    let ops = text_ops(&draw(&ob));
    let aa = ops.iter().find(|o| o.2 == "aa").unwrap();
    let bb = ops.iter().find(|o| o.2 == "bb").unwrap();
    assert_eq!((aa.0, aa.1), (10.0, 5.0));
    assert_eq!((bb.0, bb.1), (10.0, 7.0), "second row one 2-unit cell down");
}

#[test]
fn right_aligned_run_anchors_to_cell_edge() {
    let mut ob = menu();
    ob.set_options(&["item<r>99", "x"]).unwrap();
    let ops = text_ops(&draw(&ob));
    let price = ops.iter().find(|o| o.2 == "99").unwrap();
    // Cell width 20, run width 2: offset 18 from the cell origin.
    assert_eq!(price.0, 28.0);
}

#[test]
fn position_tag_sets_the_pen() {
    let mut ob = menu();
    ob.set_options(&["<5>hp", "x"]).unwrap();
    let ops = text_ops(&draw(&ob));
    let hp = ops.iter().find(|o| o.2 == "hp").unwrap();
    assert_eq!(hp.0, 15.0);
}

#[test]
fn cursor_drawn_beside_selection() {
    let mut ob = menu();
    ob.set_options(&["aa", "bb"]).unwrap();
    let ops = text_ops(&draw(&ob));
    let cursor = ops.iter().find(|o| o.2 == ">").unwrap();
    assert_eq!((cursor.0, cursor.1), (8.0, 5.0), "offset left of row 0");
    assert_eq!(cursor.3, 1.0);
}

#[test]
fn hidden_cursor_not_drawn() {
    let mut ob = menu();
    ob.set_options(&["aa", "bb"]).unwrap();
    ob.set_cursor_mode(CursorMode::Hidden);
    let ops = text_ops(&draw(&ob));
    assert!(ops.iter().all(|o| o.2 != ">"));
}

#[test]
fn disabled_option_drawn_grey() {
    let mut ob = menu();
    ob.set_options(&["aa", "bb"]).unwrap();
    ob.enable_option(1, false);
    let surface = draw(&ob);
    let grey = surface.ops.iter().any(|op| {
        matches!(op, DrawOp::Text { text, style, .. } if text == "bb" && style.color == Color::GRAY)
    });
    assert!(grey);
}

#[test]
fn draw_is_idempotent() {
    let mut ob = menu();
    ob.set_options(&["aa", "bb"]).unwrap();
    assert_eq!(draw(&ob).ops, draw(&ob).ops);
}

#[test]
fn blinking_cursor_disappears_after_update() {
    let mut ob = menu();
    ob.set_options(&["aa", "bb"]).unwrap();
    ob.set_cursor_mode(CursorMode::Blinking);
    assert!(text_ops(&draw(&ob)).iter().any(|o| o.2 == ">"));
    ob.update(400); // default blink period
    assert!(text_ops(&draw(&ob)).iter().all(|o| o.2 != ">"));
}
