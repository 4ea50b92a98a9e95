//! Widget capability traits and the explicit draw context.
//!
//! The widgets share no base type; each implements the small capability set
//! it needs. `DrawCtx` replaces renderer/metrics singletons with an explicit
//! context passed down per draw call, which is what makes the widgets unit
//! testable against a recording surface.

use menu_render::{CoordSys, DrawSurface};
use menu_text::Metrics;

/// Everything a widget needs to draw itself.
pub struct DrawCtx<'a> {
    pub surface: &'a mut dyn DrawSurface,
    pub metrics: &'a dyn Metrics,
    pub coords: CoordSys,
}

/// Frame-driven widgets. Exactly one call per frame; calling twice advances
/// timers twice.
pub trait Updatable {
    fn update(&mut self, dt_ms: u32);
}

/// Read-only drawing: two draws with no update in between must emit the same
/// command stream.
pub trait Drawable {
    fn draw(&self, ctx: &mut DrawCtx<'_>);
}

/// Widgets that own a position and size in their parent's coordinate space.
pub trait PositionOwning {
    fn position(&self) -> (f32, f32);
    fn set_position(&mut self, x: f32, y: f32);
    fn set_dimensions(&mut self, width: f32, height: f32);
}
