//! The annotation pipeline: scan every rule, plan insertions, render once.

use rowan::TextRange;

use crate::config::Config;
use crate::error::AnnotateError;
use crate::offsets;
use crate::references::{self, ReferenceList};
use crate::render::{self, Insertion};
use crate::rules::{CompiledRule, build_rules};
use crate::scanner::{MatchSpan, scan};
use crate::urls::{CLOSE_TAG, issue_url, open_tag};

/// Plan the insertions for a single span of `rule`.
fn span_insertions(
    rule: &CompiledRule,
    span: &MatchSpan<'_>,
    base_url: &str,
    version_number: Option<&str>,
    out: &mut Vec<Insertion>,
) {
    match references::parse(span.text) {
        ReferenceList::Single => {
            let url = format!("{}{}", base_url, span.expand(rule.href_template()));
            out.push(Insertion::new(span.range, open_tag(&url), CLOSE_TAG));
        }
        ReferenceList::Multiple {
            head,
            tokens,
            separator,
        } => {
            for item in offsets::compute(head, &tokens, separator, span.len()) {
                let url = issue_url(base_url, &item.normalized_number, version_number);
                let range = TextRange::new(
                    span.start() + item.range.start(),
                    span.start() + item.range.end(),
                );
                out.push(Insertion::new(range, open_tag(&url), CLOSE_TAG));
            }
        }
    }
}

/// Collect the insertions of every rule against the original `text`.
pub fn plan(
    text: &str,
    rules: &[CompiledRule],
    base_url: &str,
    version_number: Option<&str>,
) -> Result<Vec<Insertion>, AnnotateError> {
    let mut insertions = Vec::new();

    for rule in rules {
        let spans = scan(rule, text)?;
        log::debug!("Rule {} found {} span(s)", rule.name(), spans.len());
        for span in &spans {
            span_insertions(rule, span, base_url, version_number, &mut insertions);
        }
    }

    insertions.sort_by_key(|ins| ins.range.start());
    log::trace!("Planned {} insertion(s)", insertions.len());
    Ok(insertions)
}

/// Annotate `text` with links for every rule, escaping the copied text.
///
/// `base_url` must already end with `/`.
pub fn annotate(
    text: &str,
    rules: &[CompiledRule],
    base_url: &str,
    version_number: Option<&str>,
) -> Result<String, AnnotateError> {
    let insertions = plan(text, rules, base_url, version_number)?;
    render::render(text, &insertions, true)
}

/// Rules compiled once for a configuration, shareable across threads.
#[derive(Debug, Clone)]
pub struct Annotator {
    rules: [CompiledRule; 2],
    base_url: String,
    version_number: Option<String>,
    escape: bool,
}

impl Annotator {
    pub fn new(config: &Config) -> Result<Self, AnnotateError> {
        let rules = build_rules(config.version_number.as_deref(), config.keywords.as_deref())?;
        Ok(Self {
            rules,
            base_url: config.base_url(),
            version_number: config.version_number.clone(),
            escape: config.escape,
        })
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn insertions(&self, text: &str) -> Result<Vec<Insertion>, AnnotateError> {
        plan(text, &self.rules, &self.base_url, self.version_number.as_deref())
    }

    pub fn annotate(&self, text: &str) -> Result<String, AnnotateError> {
        let insertions = self.insertions(text)?;
        render::render(text, &insertions, self.escape)
    }

    /// Annotate independent entries, e.g. one per changelog entry. Results
    /// keep the order of `texts`.
    pub fn annotate_all<S>(&self, texts: &[S]) -> Vec<Result<String, AnnotateError>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use rayon::prelude::*;
            texts.par_iter().map(|t| self.annotate(t.as_ref())).collect()
        }
        #[cfg(target_arch = "wasm32")]
        {
            texts.iter().map(|t| self.annotate(t.as_ref())).collect()
        }
    }
}
