//! Events reported by the widgets.
//!
//! Each input call mutates widget state and returns at most one event; there
//! is no queue. Callers match on the returned `Option<MenuEvent>` directly.

/// Discrete navigation direction, as delivered by the debounced input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Outcome of a single input call on an [`crate::OptionBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// An option was confirmed. `action` is the option's opaque action tag,
    /// if one was assigned.
    Confirm { index: usize, action: Option<u32> },
    /// Two options were swapped in double-confirm switching mode.
    Switch { first: usize, second: usize },
    /// Cancel pressed with no pending first selection.
    Cancel,
    /// Navigation hit a grid edge with wrap disabled on that axis.
    Bounds(Direction),
}
