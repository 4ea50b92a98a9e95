//! Menu widget core: a grid-based selectable-option control and a
//! progressive-text-reveal control.
//!
//! Both widgets are single-threaded and frame-driven: the owner calls
//! `update(dt_ms)` once per frame, pushes already-debounced input events
//! through the discrete `input_*` methods, and calls `draw` with an explicit
//! [`widget::DrawCtx`]. Nothing here blocks, spawns, or polls devices.
//!
//! * [`OptionBox`] — 2D grid navigation with three wrap policies, disabled
//!   option skipping, single/double confirm, and an animated scroll window.
//! * [`TextBox`] — multi-mode progressive text reveal with sub-character
//!   clipping.

pub mod cursor;
pub mod event;
pub mod markup;
pub mod option;
pub mod option_box;
pub mod scroll;
pub mod text_box;
pub mod widget;

pub use cursor::{CursorAnimator, CursorMode};
pub use event::{Direction, MenuEvent};
pub use markup::ParseError;
pub use option::{ElementKind, MenuOption, OptionElement};
pub use option_box::{OptionBox, SelectMode, WrapMode};
pub use scroll::{ArrowFlags, ArrowState, Arrows, ScrollAnimator};
pub use text_box::{CHARS_PER_LINE, DisplayMode, TextBox};
pub use widget::{DrawCtx, Drawable, PositionOwning, Updatable};
