//! Width-constrained line wrapping and block anchoring.
//!
//! `TextReformatter` takes raw display text and a pixel budget and produces
//! the line list a widget actually draws. Breaks happen greedily at
//! whitespace; a single word wider than the budget is split per grapheme
//! rather than dropped or overflowed. Embedded newlines are hard breaks.

use unicode_segmentation::UnicodeSegmentation;

use crate::{HAlign, Metrics, VAlign};

/// Wraps text against a [`Metrics`] provider.
pub struct TextReformatter<'a> {
    metrics: &'a dyn Metrics,
}

impl<'a> TextReformatter<'a> {
    pub fn new(metrics: &'a dyn Metrics) -> Self {
        Self { metrics }
    }

    /// Wrap `text` so no output line measures wider than `max_width`.
    pub fn wrap(&self, text: &str, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        for raw in text.split('\n') {
            let mut current = String::new();
            for word in raw.split_whitespace() {
                self.flow_word(word, max_width, &mut current, &mut lines);
            }
            lines.push(current);
        }
        lines
    }

    /// Append `word` to `current`, spilling full lines into `lines`.
    fn flow_word(
        &self,
        word: &str,
        max_width: f32,
        current: &mut String,
        lines: &mut Vec<String>,
    ) {
        let joined = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if self.metrics.text_width(&joined) <= max_width {
            *current = joined;
            return;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(current));
        }
        if self.metrics.text_width(word) <= max_width {
            *current = word.to_string();
            return;
        }
        // Overlong word: fill per grapheme cluster.
        for g in word.graphemes(true) {
            let candidate = format!("{current}{g}");
            if !current.is_empty() && self.metrics.text_width(&candidate) > max_width {
                lines.push(std::mem::take(current));
                current.push_str(g);
            } else {
                *current = candidate;
            }
        }
    }
}

/// Horizontal offset of a content block of `content_width` inside a box of
/// `box_width`.
pub fn anchor_x(align: HAlign, box_width: f32, content_width: f32) -> f32 {
    match align {
        HAlign::Left => 0.0,
        HAlign::Center => (box_width - content_width) / 2.0,
        HAlign::Right => box_width - content_width,
    }
}

/// Vertical offset of a content block of `content_height` inside a box of
/// `box_height`, measured from the top edge.
pub fn anchor_y(align: VAlign, box_height: f32, content_height: f32) -> f32 {
    match align {
        VAlign::Top => 0.0,
        VAlign::Center => (box_height - content_height) / 2.0,
        VAlign::Bottom => box_height - content_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedAdvance;

    fn wrap(text: &str, width: f32) -> Vec<String> {
        let m = FixedAdvance::default();
        TextReformatter::new(&m).wrap(text, width)
    }

    #[test]
    fn fits_on_one_line() {
        assert_eq!(wrap("aa bb", 5.0), vec!["aa bb"]);
    }

    #[test]
    fn greedy_break_at_whitespace() {
        assert_eq!(wrap("aa bb cc", 5.0), vec!["aa bb", "cc"]);
    }

    #[test]
    fn hard_newline_breaks() {
        assert_eq!(wrap("aa\nbb", 10.0), vec!["aa", "bb"]);
    }

    #[test]
    fn empty_line_preserved() {
        assert_eq!(wrap("aa\n\nbb", 10.0), vec!["aa", "", "bb"]);
    }

    #[test]
    fn overlong_word_split_per_grapheme() {
        assert_eq!(wrap("abcdefg", 3.0), vec!["abc", "def", "g"]);
    }

    #[test]
    fn overlong_word_after_fitting_word() {
        assert_eq!(wrap("ab cdefg", 4.0), vec!["ab", "cdef", "g"]);
    }

    #[test]
    fn collapses_runs_of_spaces() {
        assert_eq!(wrap("aa   bb", 5.0), vec!["aa bb"]);
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_x(HAlign::Left, 100.0, 40.0), 0.0);
        assert_eq!(anchor_x(HAlign::Center, 100.0, 40.0), 30.0);
        assert_eq!(anchor_x(HAlign::Right, 100.0, 40.0), 60.0);
        assert_eq!(anchor_y(VAlign::Top, 50.0, 10.0), 0.0);
        assert_eq!(anchor_y(VAlign::Center, 50.0, 10.0), 20.0);
        assert_eq!(anchor_y(VAlign::Bottom, 50.0, 10.0), 40.0);
    }
}
