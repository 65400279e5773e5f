//! Span detection over the original text.

use regex::Captures;
use rowan::{TextRange, TextSize};

use crate::error::AnnotateError;
use crate::rules::CompiledRule;

/// A match of one rule, borrowed from the original text.
#[derive(Debug)]
pub struct MatchSpan<'t> {
    pub range: TextRange,
    pub text: &'t str,
    captures: Captures<'t>,
}

impl<'t> MatchSpan<'t> {
    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Capture group `index`, if it took part in the match.
    pub fn group(&self, index: usize) -> Option<&'t str> {
        self.captures.get(index).map(|m| m.as_str())
    }

    /// Substitute `$n` placeholders with this span's capture groups.
    /// Groups that did not participate expand to nothing.
    pub fn expand(&self, template: &str) -> String {
        let mut out = String::new();
        self.captures.expand(template, &mut out);
        out
    }
}

pub(crate) fn text_size(offset: usize, text: &str) -> Result<TextSize, AnnotateError> {
    TextSize::try_from(offset).map_err(|_| AnnotateError::TextTooLarge(text.len()))
}

/// Find every non-overlapping match of `rule` in `text`, in ascending order.
pub fn scan<'t>(rule: &CompiledRule, text: &'t str) -> Result<Vec<MatchSpan<'t>>, AnnotateError> {
    text_size(text.len(), text)?;

    let mut spans = Vec::new();
    for captures in rule.regex().captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let range = TextRange::new(text_size(whole.start(), text)?, text_size(whole.end(), text)?);
        log::trace!("{} rule matched {:?} at {:?}", rule.name(), whole.as_str(), range);
        spans.push(MatchSpan {
            range,
            text: whole.as_str(),
            captures,
        });
    }

    Ok(spans)
}
