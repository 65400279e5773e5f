//! Errors raised by the annotation engine.

use rowan::{TextRange, TextSize};

/// Errors that can occur while compiling rules or annotating text.
#[derive(Debug)]
pub enum AnnotateError {
    /// A compiled rule pattern was rejected by the regex engine
    InvalidPattern(regex::Error),
    /// Input text is longer than a `TextSize` can address
    TextTooLarge(usize),
    /// Two insertions claim intersecting ranges of the original text
    OverlappingInsertions { first: TextRange, second: TextRange },
    /// An insertion ends past the end of the text it was planned against
    OutOfBounds { range: TextRange, len: TextSize },
}

impl std::fmt::Display for AnnotateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern(e) => write!(f, "invalid rule pattern: {}", e),
            Self::TextTooLarge(len) => write!(f, "text of {} bytes is too large to annotate", len),
            Self::OverlappingInsertions { first, second } => write!(
                f,
                "overlapping links at {:?} and {:?}; refusing to nest markup",
                first, second
            ),
            Self::OutOfBounds { range, len } => {
                write!(f, "link range {:?} exceeds text length {:?}", range, len)
            }
        }
    }
}

impl std::error::Error for AnnotateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<regex::Error> for AnnotateError {
    fn from(e: regex::Error) -> Self {
        Self::InvalidPattern(e)
    }
}

impl From<AnnotateError> for std::io::Error {
    fn from(e: AnnotateError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}
