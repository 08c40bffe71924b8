//! Commands module - CLI command implementations.

mod rewrite;

pub use rewrite::{rewrite_source, run_rewrite, RewriteOptions, RewriteReport, RuleOutcome};
