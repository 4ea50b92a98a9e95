//! Text measurement and reformatting for the widget core.
//!
//! This crate owns everything the widgets need to know about text as a
//! visual object: how wide a string is, how to break it into lines that fit
//! a pixel budget, and where a block of lines anchors inside a box. It knows
//! nothing about rendering; the [`Metrics`] trait is the seam through which
//! a real font backend (or the fixed-advance test implementation) supplies
//! numbers.
//!
//! Invariants:
//! * Measurement is grapheme-cluster based. No caller iterates `char`s to
//!   count display cells.
//! * Reformatting never drops input: every grapheme of the source appears in
//!   exactly one output line (whitespace consumed at break points excepted).

pub mod measure;
pub mod reformat;

pub use measure::{display_width, egc_width, grapheme_at, grapheme_count, grapheme_prefix};
pub use reformat::{TextReformatter, anchor_x, anchor_y};

/// Horizontal anchoring of a text block inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchoring of a text block inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Font metrics provider. The widget core consumes pixel measurements only;
/// shaping, rasterization, and fallback belong to the implementor.
pub trait Metrics {
    /// Advance width of `text` in pixels.
    fn text_width(&self, text: &str) -> f32;
    /// Baseline-to-baseline distance.
    fn line_height(&self) -> f32;
    /// Height of the tallest glyph above the baseline.
    fn glyph_height(&self) -> f32;
    /// Depth below the baseline.
    fn descent(&self) -> f32;
}

/// Fixed-advance metrics: every display cell costs `advance` pixels.
///
/// Deterministic stand-in for a real font, used by the test suites and the
/// terminal demo (where one cell really is one unit wide).
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance {
    pub advance: f32,
    pub line_height: f32,
}

impl FixedAdvance {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Metrics for FixedAdvance {
    fn text_width(&self, text: &str) -> f32 {
        display_width(text) as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn glyph_height(&self) -> f32 {
        self.line_height
    }

    fn descent(&self) -> f32 {
        0.0
    }
}
