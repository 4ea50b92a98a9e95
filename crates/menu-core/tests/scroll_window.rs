//! Scroll window movement, transition timing, and arrow states.

use menu_core::{ArrowState, Arrows, OptionBox};

fn tall_grid() -> OptionBox {
    let mut ob = OptionBox::new();
    ob.set_grid(10, 2);
    ob.set_visible(4, 2);
    let labels: Vec<String> = (0..20).map(|i| format!("opt{i}")).collect();
    ob.set_options(&labels).unwrap();
    ob
}

#[test]
fn arrows_at_top_of_tall_grid() {
    let ob = tall_grid();
    let arrows = ob.arrows();
    assert_eq!(arrows.state(Arrows::DOWN), ArrowState::Active);
    assert_eq!(arrows.state(Arrows::UP), ArrowState::Greyed);
    assert_eq!(arrows.state(Arrows::LEFT), ArrowState::Hidden);
    assert_eq!(arrows.state(Arrows::RIGHT), ArrowState::Hidden);
}

#[test]
fn moving_past_window_starts_scroll() {
    let mut ob = tall_grid();
    for _ in 0..3 {
        ob.input_down();
    }
    assert!(!ob.is_scrolling(), "selection still inside the window");
    ob.input_down();
    assert!(ob.is_scrolling());
    assert_eq!(ob.scroll_window(), (1, 0));
    ob.update(100);
    assert!(!ob.is_scrolling(), "transition bounded at 100ms default");
}

#[test]
fn arrows_at_bottom_of_tall_grid() {
    let mut ob = tall_grid();
    ob.set_selection(19);
    assert_eq!(ob.scroll_window(), (6, 0));
    let arrows = ob.arrows();
    assert_eq!(arrows.state(Arrows::UP), ArrowState::Active);
    assert_eq!(arrows.state(Arrows::DOWN), ArrowState::Greyed);
}

#[test]
fn scrolling_back_up_shifts_window_up() {
    let mut ob = tall_grid();
    ob.set_selection(19);
    for _ in 0..8 {
        ob.input_up();
    }
    assert_eq!(ob.selection(), Some(3));
    assert_eq!(ob.scroll_window(), (1, 0));
}

#[test]
fn input_during_scroll_retargets() {
    let mut ob = tall_grid();
    ob.set_selection(7); // window snaps so row 3 is the bottom row
    ob.input_down();
    assert!(ob.is_scrolling());
    ob.update(50);
    ob.input_down();
    assert!(ob.is_scrolling());
    ob.update(50);
    // Retargeted transition restarted its timer: still in flight.
    assert!(ob.is_scrolling());
    ob.update(50);
    assert!(!ob.is_scrolling());
}

#[test]
fn clear_options_discards_scroll_state() {
    let mut ob = tall_grid();
    ob.set_selection(12);
    ob.clear_options();
    assert!(!ob.is_scrolling());
    assert_eq!(ob.scroll_window(), (0, 0));
    let arrows = ob.arrows();
    assert_eq!(arrows.state(Arrows::UP), ArrowState::Hidden);
}

#[test]
fn fully_visible_grid_never_scrolls() {
    let mut ob = OptionBox::new();
    ob.set_grid(2, 2);
    ob.set_options(&["a", "b", "c", "d"]).unwrap();
    ob.input_down();
    ob.input_right();
    assert!(!ob.is_scrolling());
    assert_eq!(ob.arrows().state(Arrows::DOWN), ArrowState::Hidden);
}
