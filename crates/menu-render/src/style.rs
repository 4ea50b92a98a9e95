//! Plain-data style vocabulary shared between widgets and backends.

/// RGBA color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Style applied to a text draw. Alpha multiplies `color.a` at draw time so
/// fade effects never have to rewrite the style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub shadow: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            shadow: false,
        }
    }
}

/// Handle to an image the backend may or may not have loaded.
///
/// A failed load degrades to a zero-size handle; widgets lay it out as
/// absent rather than aborting the draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHandle {
    pub path: String,
    pub width: f32,
    pub height: f32,
}

impl ImageHandle {
    pub fn new(path: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    /// Placeholder for an image that failed to load.
    pub fn missing(path: impl Into<String>) -> Self {
        Self::new(path, 0.0, 0.0)
    }

    pub fn is_missing(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}
