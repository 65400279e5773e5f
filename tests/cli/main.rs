//! CLI integration tests for refmark.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (annotate, rules, scan, project-url)
//! - Stdin/stdout handling
//! - Config discovery and environment overrides
//! - Exit codes

mod annotate;
mod common;
mod project_url;
mod rules;
