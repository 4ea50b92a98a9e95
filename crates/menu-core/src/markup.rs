//! Option markup parsing.
//!
//! Format strings annotate option text with tags delimited by `<` and `>`:
//!
//! * `<l>` / `<c>` / `<r>` — set alignment from here (first letter
//!   case-insensitive)
//! * `<img/path/to/file.png>` — inline image reference
//! * `<42>` — absolute horizontal position offset in pixels
//!
//! Parsing is two-phase: a tokenizer produces a flat `Token` stream, then a
//! one-pass builder converts tokens into [`OptionElement`]s. Any
//! unrecognized or unterminated tag fails the whole string; batch-level
//! all-or-nothing commit lives in `OptionBox::set_options` on top of this.

use menu_render::ImageHandle;
use thiserror::Error;

use crate::option::{ElementKind, MenuOption, OptionElement};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unterminated tag starting at byte {0}")]
    UnterminatedTag(usize),
    #[error("empty tag at byte {0}")]
    EmptyTag(usize),
    #[error("unrecognized tag <{0}>")]
    UnknownTag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Text(String),
    Tag(String),
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut chars = input.char_indices();
    while let Some((at, c)) = chars.next() {
        if c != '<' {
            text.push(c);
            continue;
        }
        if !text.is_empty() {
            tokens.push(Token::Text(std::mem::take(&mut text)));
        }
        let mut tag = String::new();
        let mut terminated = false;
        for (_, t) in chars.by_ref() {
            if t == '>' {
                terminated = true;
                break;
            }
            tag.push(t);
        }
        if !terminated {
            return Err(ParseError::UnterminatedTag(at));
        }
        if tag.is_empty() {
            return Err(ParseError::EmptyTag(at));
        }
        tokens.push(Token::Tag(tag));
    }
    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
    Ok(tokens)
}

/// Parse one option format string into a [`MenuOption`].
pub fn parse(format: &str) -> Result<MenuOption, ParseError> {
    let mut option = MenuOption::default();
    for token in tokenize(format)? {
        match token {
            Token::Text(run) => {
                option.elements.push(OptionElement::new(
                    ElementKind::Text,
                    option.text_runs.len() as i32,
                ));
                option.text_runs.push(run);
            }
            Token::Tag(tag) => apply_tag(&mut option, &tag)?,
        }
    }
    Ok(option)
}

fn apply_tag(option: &mut MenuOption, tag: &str) -> Result<(), ParseError> {
    // Alignment tags: single letter, case-insensitive.
    if tag.len() == 1 {
        let kind = match tag.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('l') => Some(ElementKind::LeftAlign),
            Some('c') => Some(ElementKind::CenterAlign),
            Some('r') => Some(ElementKind::RightAlign),
            _ => None,
        };
        if let Some(kind) = kind {
            option.elements.push(OptionElement::new(kind, 0));
            return Ok(());
        }
    }
    if let Some(path) = strip_img_prefix(tag) {
        if path.is_empty() {
            return Err(ParseError::UnknownTag(tag.to_string()));
        }
        option.elements.push(OptionElement::new(
            ElementKind::Image,
            option.images.len() as i32,
        ));
        option.images.push(ImageHandle::missing(path));
        return Ok(());
    }
    if let Ok(offset) = tag.parse::<i32>() {
        option
            .elements
            .push(OptionElement::new(ElementKind::Position, offset));
        return Ok(());
    }
    Err(ParseError::UnknownTag(tag.to_string()))
}

fn strip_img_prefix(tag: &str) -> Option<&str> {
    if tag.len() >= 4 && tag[..4].eq_ignore_ascii_case("img/") {
        Some(&tag[4..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_run() {
        let opt = parse("Attack").unwrap();
        assert_eq!(
            opt.elements,
            vec![OptionElement::new(ElementKind::Text, 0)]
        );
        assert_eq!(opt.text_runs, vec!["Attack"]);
    }

    #[test]
    fn image_text_align_text() {
        let opt = parse("<img/weapons/mythril.png>Mythril knife<r>500 drunes").unwrap();
        assert_eq!(
            opt.elements,
            vec![
                OptionElement::new(ElementKind::Image, 0),
                OptionElement::new(ElementKind::Text, 0),
                OptionElement::new(ElementKind::RightAlign, 0),
                OptionElement::new(ElementKind::Text, 1),
            ]
        );
        assert_eq!(opt.text_runs, vec!["Mythril knife", "500 drunes"]);
        assert_eq!(opt.images[0].path, "weapons/mythril.png");
    }

    #[test]
    fn alignment_tags_case_insensitive() {
        let opt = parse("<L>a<C>b<R>c").unwrap();
        let kinds: Vec<_> = opt.elements.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::LeftAlign,
                ElementKind::Text,
                ElementKind::CenterAlign,
                ElementKind::Text,
                ElementKind::RightAlign,
                ElementKind::Text,
            ]
        );
    }

    #[test]
    fn numeric_tag_is_position_offset() {
        let opt = parse("<32>HP").unwrap();
        assert_eq!(
            opt.elements[0],
            OptionElement::new(ElementKind::Position, 32)
        );
    }

    #[test]
    fn unterminated_tag_rejected() {
        assert_eq!(parse("oops<r"), Err(ParseError::UnterminatedTag(4)));
    }

    #[test]
    fn empty_tag_rejected() {
        assert_eq!(parse("a<>b"), Err(ParseError::EmptyTag(1)));
    }

    #[test]
    fn unknown_tag_rejected() {
        assert_eq!(
            parse("<blink>x"),
            Err(ParseError::UnknownTag("blink".to_string()))
        );
    }

    #[test]
    fn img_tag_requires_path() {
        assert!(matches!(parse("<img/>"), Err(ParseError::UnknownTag(_))));
    }

    #[test]
    fn stray_close_angle_is_text() {
        let opt = parse("a>b").unwrap();
        assert_eq!(opt.text_runs, vec!["a>b"]);
    }
}
