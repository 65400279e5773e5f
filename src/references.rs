//! Splitting a matched span into its list of referenced numbers.
//!
//! A span reads `<keyword> <numbers>`. The numbers may be joined by `,`,
//! `&`, spaces or `#`; one separator convention is inferred per span and
//! drives all offset arithmetic for that span, even when the text mixes
//! several.

use rowan::TextSize;

/// The separator convention inferred for one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Ampersand,
    Hash,
    Space,
    Comma,
}

impl Separator {
    /// Precedence: `&`, then `#`, then space, else `,`.
    pub fn detect(tail: &str) -> Self {
        if tail.contains('&') {
            Separator::Ampersand
        } else if tail.contains('#') {
            Separator::Hash
        } else if tail.contains(' ') {
            Separator::Space
        } else {
            Separator::Comma
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Ampersand => "&",
            Separator::Hash => "#",
            Separator::Space => " ",
            Separator::Comma => ",",
        }
    }

    pub fn size(self) -> TextSize {
        TextSize::of(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceList<'s> {
    /// The whole span is one link.
    Single,
    /// One link per token; the first token shares its link with `head`.
    Multiple {
        head: &'s str,
        tokens: Vec<&'s str>,
        separator: Separator,
    },
}

/// Classify a span's text as a single reference or a list of them.
pub fn parse(span_text: &str) -> ReferenceList<'_> {
    let Some((head, tail)) = span_text.split_once(' ') else {
        return ReferenceList::Single;
    };

    let tokens = split_tokens(tail);
    if tokens.len() < 2 {
        return ReferenceList::Single;
    }

    ReferenceList::Multiple {
        head,
        tokens,
        separator: Separator::detect(tail),
    }
}

/// Split on any of `,`, `&` or space. Empty tokens between consecutive
/// separators are kept; trailing empty tokens are dropped.
pub fn split_tokens(tail: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = tail.split([',', '&', ' ']).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}
