//! Compiled link rules.
//!
//! Two rules exist for every configuration: the reference rule, built from
//! the keyword list, and the wiki rule, which links CamelCase words and
//! `wiki:` prefixed names.

use regex::Regex;

use crate::error::AnnotateError;
use crate::version::is_version_before_120;

pub const DEFAULT_KEYWORDS: &str = "*,refs,references,IssueID,fixes,closes";

/// The keyword that stands for a bare `#<number>` with no word before it.
pub const WILDCARD_KEYWORD: &str = "*";

/// Digits, commas, `&` and `#`, plus spaces that lead into a digit or `#`.
const NUM_PATTERN: &str = r"((?:[0-9]|,| #| [0-9]|&|#)+)";

const ANYWORD_PATTERN: &str = r"((?:[A-Za-z0-9_]|[._-])+)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Reference,
    Wiki,
}

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Reference => "reference",
            RuleKind::Wiki => "wiki",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompiledRule {
    kind: RuleKind,
    pattern: Regex,
    href_template: String,
}

impl CompiledRule {
    pub fn new(
        kind: RuleKind,
        pattern: &str,
        href_template: impl Into<String>,
    ) -> Result<Self, AnnotateError> {
        Ok(Self {
            kind,
            pattern: Regex::new(pattern)?,
            href_template: href_template.into(),
        })
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn regex(&self) -> &Regex {
        &self.pattern
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Path fragment appended to the base URL, with `$n` capture placeholders.
    pub fn href_template(&self) -> &str {
        &self.href_template
    }
}

/// Split a comma separated keyword list into cleaned, de-duplicated entries.
/// Falls back to [`DEFAULT_KEYWORDS`] when nothing usable is left.
pub fn parse_keywords(keywords: Option<&str>) -> Vec<String> {
    let mut parsed = split_keywords(keywords.unwrap_or_default());
    if parsed.is_empty() {
        parsed = split_keywords(DEFAULT_KEYWORDS);
    }
    parsed
}

fn split_keywords(raw: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in raw.split(',').map(str::trim) {
        if !keyword.is_empty() && !keywords.iter().any(|k| k == keyword) {
            keywords.push(keyword.to_string());
        }
    }
    keywords
}

fn keyword_alternation(keywords: &[String]) -> String {
    keywords
        .iter()
        .map(|keyword| {
            if keyword == WILDCARD_KEYWORD {
                "#".to_string()
            } else {
                format!("{} ", regex::escape(keyword))
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

/// Build the reference and wiki rules for a tracker configuration.
pub fn build_rules(
    version_number: Option<&str>,
    keywords: Option<&str>,
) -> Result<[CompiledRule; 2], AnnotateError> {
    let keywords = parse_keywords(keywords);
    let reference_pattern = format!("(?i)(?:{})#?{}", keyword_alternation(&keywords), NUM_PATTERN);
    let issue_template = if is_version_before_120(version_number) {
        "issues/show/$1"
    } else {
        "issues/$1"
    };
    log::debug!(
        "Compiling reference rule for {} keyword(s): {}",
        keywords.len(),
        reference_pattern
    );

    let wiki_pattern = format!("((?:[A-Z][a-z]+){{2,}})|wiki:{}", ANYWORD_PATTERN);

    Ok([
        CompiledRule::new(RuleKind::Reference, &reference_pattern, issue_template)?,
        CompiledRule::new(RuleKind::Wiki, &wiki_pattern, "wiki/$1$2")?,
    ])
}
