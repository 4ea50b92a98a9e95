//! Option records: the typed content a parsed format string produces.
//!
//! An option is an ordered element list; text and image elements index into
//! parallel `text_runs`/`images` lists so the element itself stays a small
//! copyable record. Built once by the markup parser, immutable afterwards
//! except for `disabled` and the opaque `action` tag.

use menu_render::ImageHandle;

/// Discriminant of one content element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    LeftAlign,
    CenterAlign,
    RightAlign,
    /// Absolute horizontal pen offset in pixels; offset in `value`.
    Position,
    /// Image reference; `value` indexes `MenuOption::images`.
    Image,
    /// Text run; `value` indexes `MenuOption::text_runs`.
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionElement {
    pub kind: ElementKind,
    pub value: i32,
}

impl OptionElement {
    pub const fn new(kind: ElementKind, value: i32) -> Self {
        Self { kind, value }
    }
}

/// One selectable cell of an `OptionBox` grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuOption {
    pub disabled: bool,
    pub elements: Vec<OptionElement>,
    pub text_runs: Vec<String>,
    pub images: Vec<ImageHandle>,
    /// Opaque action tag reported back in `MenuEvent::Confirm`. Replaces the
    /// per-option callback table of the original control: the owner keeps a
    /// single handler and dispatches on this id.
    pub action: Option<u32>,
}

impl MenuOption {
    /// All text runs joined, for logging and width estimates.
    pub fn plain_text(&self) -> String {
        self.text_runs.concat()
    }
}
