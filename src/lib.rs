//! Link tracker references in commit messages.
//!
//! Issue references such as `fixes #12`, `refs 1,2&3` or a bare `#42`, and
//! wiki names such as `WikiLink` or `wiki:Start`, are wrapped in anchors
//! pointing at the tracker. All markup is planned against the original
//! text and applied in a single pass.

pub mod annotator;
pub mod config;
pub mod error;
pub mod offsets;
pub mod references;
pub mod render;
pub mod rules;
pub mod scanner;
pub mod urls;
pub mod version;

pub use annotator::{Annotator, annotate};
pub use config::Config;
pub use config::ConfigBuilder;
pub use error::AnnotateError;
pub use render::Insertion;
pub use rules::{CompiledRule, DEFAULT_KEYWORDS, RuleKind, build_rules};

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
