//! Rendering planned insertions into the original text.
//!
//! Insertions are computed against the untouched input and applied in one
//! ascending pass, so the order they were collected in does not matter.

use rowan::{TextRange, TextSize};

use crate::error::AnnotateError;

/// Markup wrapping one range of the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub range: TextRange,
    pub open_tag: String,
    pub close_tag: String,
}

impl Insertion {
    pub fn new(range: TextRange, open_tag: impl Into<String>, close_tag: impl Into<String>) -> Self {
        Self {
            range,
            open_tag: open_tag.into(),
            close_tag: close_tag.into(),
        }
    }
}

/// Escape the characters that would otherwise be read as markup.
pub fn xml_escape(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
}

fn push_text(out: &mut String, text: &str, escape: bool) {
    if escape {
        xml_escape(text, out);
    } else {
        out.push_str(text);
    }
}

/// Apply `insertions` to `text`.
///
/// Insertions may not overlap; touching ranges are fine. With `escape` the
/// copied text, never the tags, is XML-escaped.
pub fn render(text: &str, insertions: &[Insertion], escape: bool) -> Result<String, AnnotateError> {
    let len = TextSize::try_from(text.len()).map_err(|_| AnnotateError::TextTooLarge(text.len()))?;

    let mut sorted: Vec<&Insertion> = insertions.iter().collect();
    sorted.sort_by_key(|ins| (ins.range.start(), ins.range.end()));

    let mut output = String::with_capacity(text.len() + insertions.len() * 48);
    let mut last: Option<TextRange> = None;

    for ins in sorted {
        if ins.range.end() > len {
            return Err(AnnotateError::OutOfBounds {
                range: ins.range,
                len,
            });
        }
        let copied_to = match last {
            Some(prev) if ins.range.start() < prev.end() => {
                return Err(AnnotateError::OverlappingInsertions {
                    first: prev,
                    second: ins.range,
                });
            }
            Some(prev) => prev.end(),
            None => TextSize::from(0),
        };

        push_text(&mut output, &text[TextRange::new(copied_to, ins.range.start())], escape);
        output.push_str(&ins.open_tag);
        push_text(&mut output, &text[ins.range], escape);
        output.push_str(&ins.close_tag);
        last = Some(ins.range);
    }

    let tail_start = last.map_or(TextSize::from(0), |r| r.end());
    push_text(&mut output, &text[TextRange::new(tail_start, len)], escape);
    Ok(output)
}
