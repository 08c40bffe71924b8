//! Replacement rules derived from the element key list.
//!
//! Every element key yields three rules, one per [`HandlerAction`]:
//!
//! ```text
//! Click="DoxologySelect_Click"  ->  Click="ElementSelect_Click" Tag="Doxology"
//! ```

use crate::constants::{get_element_key_re, TAG_ATTRIBUTE, UNIFIED_HANDLER_PREFIX};
use crate::error::TagbindError;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;

/// The verb part of a per-element handler name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HandlerAction {
    /// `<Key>Select_Click`
    Select,
    /// `<Key>Clear_Click`
    Clear,
    /// `<Key>Use_Click`
    Use,
}

impl HandlerAction {
    /// All actions in rewrite order.
    pub const ALL: [Self; 3] = [Self::Select, Self::Clear, Self::Use];

    /// Name as it appears inside handler names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Clear => "Clear",
            Self::Use => "Use",
        }
    }
}

impl fmt::Display for HandlerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One literal substitution: a key's handler for a single action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    /// Element key, e.g. `Doxology`.
    pub key: String,
    /// Action the handler performs.
    pub action: HandlerAction,
}

impl ReplacementRule {
    /// Create a rule for `key` and `action`.
    #[must_use]
    pub fn new(key: impl Into<String>, action: HandlerAction) -> Self {
        Self {
            key: key.into(),
            action,
        }
    }

    /// Attribute fragment to search for.
    #[must_use]
    pub fn pattern(&self) -> String {
        format!("Click=\"{}{}_Click\"", self.key, self.action)
    }

    /// Attribute fragment written in place of [`Self::pattern`].
    #[must_use]
    pub fn replacement(&self) -> String {
        format!(
            "Click=\"{UNIFIED_HANDLER_PREFIX}{}_Click\" {TAG_ATTRIBUTE}=\"{}\"",
            self.action, self.key
        )
    }
}

/// Ordered rules for a key list: key-major, then Select, Clear, Use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<ReplacementRule>,
}

impl RuleSet {
    /// Build the rule set for `keys` after validating them.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, contains a duplicate,
    /// a key that is not an identifier, or the unified handler prefix.
    pub fn from_keys<S: AsRef<str>>(keys: &[S]) -> Result<Self, TagbindError> {
        validate_keys(keys)?;
        let rules = keys
            .iter()
            .flat_map(|key| {
                HandlerAction::ALL
                    .into_iter()
                    .map(move |action| ReplacementRule::new(key.as_ref(), action))
            })
            .collect();
        Ok(Self { rules })
    }

    /// Rules in application order.
    pub fn iter(&self) -> impl Iterator<Item = &ReplacementRule> {
        self.rules.iter()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Check a key list before any rules are built from it.
///
/// A key equal to the unified prefix would match its own replacement,
/// so a second run would keep appending `Tag` attributes.
///
/// # Errors
///
/// Returns the first offending key.
pub fn validate_keys<S: AsRef<str>>(keys: &[S]) -> Result<(), TagbindError> {
    if keys.is_empty() {
        return Err(TagbindError::NoKeys);
    }

    let mut seen = FxHashSet::default();
    for key in keys.iter().map(AsRef::as_ref) {
        let reason = if key == UNIFIED_HANDLER_PREFIX {
            Some("collides with the shared handler prefix")
        } else if !get_element_key_re().is_match(key) {
            Some("keys must be identifiers ([A-Za-z_][A-Za-z0-9_]*)")
        } else if !seen.insert(key) {
            Some("listed more than once")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(TagbindError::InvalidKey {
                key: key.to_owned(),
                reason,
            });
        }
    }
    Ok(())
}
