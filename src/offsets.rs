//! Span-relative ranges for each item of a reference list.

use rowan::{TextRange, TextSize};

use crate::references::Separator;

/// One linked entry of a reference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceItem<'s> {
    /// Token as it appears in the span, `#` included
    pub raw_token: &'s str,
    /// Token with `#` removed and whitespace trimmed
    pub normalized_number: String,
    /// Range relative to the start of the owning span
    pub range: TextRange,
}

impl<'s> ReferenceItem<'s> {
    fn new(raw_token: &'s str, range: TextRange) -> Self {
        Self {
            raw_token,
            normalized_number: normalize_number(raw_token),
            range,
        }
    }
}

pub fn normalize_number(token: &str) -> String {
    token.replace('#', "").trim().to_string()
}

/// Compute the range of every non-blank token of a list span.
///
/// The first item spans `head`, the single space after it and the first
/// token. Each later item starts one separator past the previous end.
/// Offsets accumulate under `separator` alone, so a span that mixes
/// separators can drift; ends are clamped to `span_len`.
pub fn compute<'s>(
    head: &str,
    tokens: &[&'s str],
    separator: Separator,
    span_len: TextSize,
) -> Vec<ReferenceItem<'s>> {
    let Some((first, rest)) = tokens.split_first() else {
        return Vec::new();
    };

    let sep = separator.size();
    let mut items = Vec::with_capacity(tokens.len());

    let first_end = (TextSize::of(head) + TextSize::of(*first) + TextSize::from(1)).min(span_len);
    items.push(ReferenceItem::new(*first, TextRange::up_to(first_end)));

    let mut start = first_end + sep;
    let mut end = start;
    for (i, token) in rest.iter().enumerate() {
        end += TextSize::of(*token);
        // tokens after the second also carry the separator preceding them
        if i > 0 {
            end += sep;
        }
        if end >= span_len {
            end = span_len;
        }

        if !token.trim().is_empty() {
            items.push(ReferenceItem::new(*token, TextRange::new(start.min(end), end)));
        }
        start = end + sep;
    }

    items
}
