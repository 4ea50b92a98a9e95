//! Renderer boundary for the widget core.
//!
//! The widgets never touch a GPU or a terminal directly; they emit an ordered
//! stream of drawing commands through the [`DrawSurface`] trait. A backend
//! (terminal cells, OpenGL, a test recorder) implements the trait. This crate
//! also carries the small plain-data vocabulary those commands use: clip
//! rectangles, text styles, image handles, and the flippable coordinate
//! system description the reveal clipping math needs.

pub mod coords;
pub mod style;
pub mod surface;

pub use coords::CoordSys;
pub use style::{Color, ImageHandle, TextStyle};
pub use surface::{DrawOp, DrawSurface, Rect, RecordingSurface};
