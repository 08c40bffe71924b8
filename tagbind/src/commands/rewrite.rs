//! Handler rewrite command.

use crate::error::TagbindError;
use crate::fix::{ByteRangeRewriter, RewriteError};
use crate::rules::{HandlerAction, RuleSet};
use crate::utils::normalize_display_path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for the rewrite command
#[derive(Debug, Default)]
pub struct RewriteOptions {
    /// File rewritten in place
    pub target: PathBuf,
    /// Element keys, in rewrite order
    pub keys: Vec<String>,
    /// Dry-run mode (report what would change)
    pub dry_run: bool,
    /// Verbose output
    pub verbose: bool,
    /// Machine-readable output; the writer receives nothing but the report
    pub json: bool,
}

/// Matches found for a single replacement rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// Element key
    pub key: String,
    /// Handler action
    pub action: HandlerAction,
    /// Fragment searched for
    pub pattern: String,
    /// Fragment written instead
    pub replacement: String,
    /// Number of occurrences replaced
    pub count: usize,
}

/// Result of a rewrite run.
#[derive(Debug, Serialize)]
pub struct RewriteReport {
    /// File that was rewritten
    pub file: String,
    /// Whether the write was skipped
    pub dry_run: bool,
    /// Whether the text differs from the original
    pub changed: bool,
    /// Sum of all rule counts
    pub total_replacements: usize,
    /// Per-rule outcomes in rewrite order
    pub rules: Vec<RuleOutcome>,
}

impl RewriteReport {
    /// Rules that matched nothing.
    pub fn unmatched(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.rules.iter().filter(|rule| rule.count == 0)
    }
}

/// Apply every rule in `rules` to `source`.
///
/// Occurrences are collected left to right per rule and applied in a single
/// pass. Keys cannot contain quotes, so occurrences of different rules never
/// overlap and a replacement never forms a new occurrence; the result equals
/// running the replacements one after another.
///
/// # Errors
///
/// Returns an error if the queued edits overlap.
pub fn rewrite_source(
    source: &str,
    rules: &RuleSet,
) -> Result<(String, Vec<RuleOutcome>), RewriteError> {
    let mut rewriter = ByteRangeRewriter::new(source);
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules.iter() {
        let pattern = rule.pattern();
        let replacement = rule.replacement();
        let count = rewriter.replace_all(&pattern, &replacement);
        outcomes.push(RuleOutcome {
            key: rule.key.clone(),
            action: rule.action,
            pattern,
            replacement,
            count,
        });
    }

    Ok((rewriter.apply()?, outcomes))
}

/// Rewrite the target file in place.
///
/// # Errors
///
/// Returns an error if the keys are invalid, the target is missing,
/// or reading or writing the file fails.
pub fn run_rewrite<W: Write>(options: &RewriteOptions, mut writer: W) -> Result<RewriteReport> {
    let rules = RuleSet::from_keys(&options.keys)?;
    let target = options.target.as_path();

    if !target.exists() {
        return Err(TagbindError::TargetNotFound(target.to_path_buf()).into());
    }

    if options.verbose {
        eprintln!(
            "[VERBOSE] Rewriting {} with {} rules for {} keys",
            normalize_display_path(target),
            rules.len(),
            options.keys.len()
        );
    }

    let content = read_target(target)?;
    let (fixed, outcomes) = rewrite_source(&content, &rules).map_err(TagbindError::from)?;
    let changed = fixed != content;
    let total_replacements = outcomes.iter().map(|o| o.count).sum();

    if options.dry_run {
        if !options.json {
            for outcome in outcomes.iter().filter(|o| o.count > 0) {
                writeln!(
                    writer,
                    "  Would replace {} x{} -> {}",
                    outcome.pattern,
                    outcome.count,
                    outcome.replacement.dimmed()
                )?;
            }
        }
    } else {
        write_target(target, &fixed)?;
        if options.verbose {
            eprintln!(
                "[VERBOSE] Wrote {} bytes ({} replacements)",
                fixed.len(),
                total_replacements
            );
        }
    }

    Ok(RewriteReport {
        file: normalize_display_path(target),
        dry_run: options.dry_run,
        changed,
        total_replacements,
        rules: outcomes,
    })
}

fn read_target(path: &Path) -> Result<String, TagbindError> {
    fs::read_to_string(path).map_err(|source| TagbindError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_target(path: &Path, content: &str) -> Result<(), TagbindError> {
    fs::write(path, content).map_err(|source| TagbindError::Write {
        path: path.to_path_buf(),
        source,
    })
}
