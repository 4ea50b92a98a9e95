//! Grapheme cluster display width.
//!
//! Single authoritative entry point for "how many cells does this occupy".
//! The baseline comes from `unicode-width`; a small widen fallback corrects
//! pictographic clusters (ZWJ emoji, flags) that the baseline reports as
//! narrow. Over-estimation costs a blank cell; under-estimation causes
//! layout drift, so the fallback only ever widens.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ZWJ: char = '\u{200D}';
const VS16: char = '\u{FE0F}';

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

// Rough Extended Pictographic heuristic covering the primary emoji blocks.
fn is_extended_pictographic(c: char) -> bool {
    ('\u{1F300}'..='\u{1FAFF}').contains(&c) || ('\u{2600}'..='\u{27BF}').contains(&c)
}

/// Display width of a single extended grapheme cluster.
pub fn egc_width(egc: &str) -> usize {
    let base = UnicodeWidthStr::width(egc);
    if base >= 2 {
        return base;
    }
    let mut chars = egc.chars();
    let Some(first) = chars.next() else {
        return 0;
    };
    if first == '\n' || first == '\r' || first.is_control() {
        return 0;
    }
    // Widen fallback: pictographic base, ZWJ/VS16 composite, or flag pair.
    let pictographic = is_extended_pictographic(first)
        || is_regional_indicator(first)
        || egc.chars().any(|c| c == ZWJ || c == VS16);
    if pictographic { 2 } else { base.max(1) }
}

/// Display width of a whole string, summed per grapheme cluster.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(egc_width).sum()
}

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Prefix of `text` containing its first `n` grapheme clusters.
pub fn grapheme_prefix(text: &str, n: usize) -> &str {
    match text.grapheme_indices(true).nth(n) {
        Some((at, _)) => &text[..at],
        None => text,
    }
}

/// The `n`-th grapheme cluster of `text`, if present.
pub fn grapheme_at(text: &str, n: usize) -> Option<&str> {
    text.graphemes(true).nth(n)
}
