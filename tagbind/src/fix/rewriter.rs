//! Byte-range safe text rewriter.
//!
//! Edits are queued against the original text and applied in one pass,
//! so every offset refers to the unmodified source.
//!
//! # Usage
//!
//! ```
//! use tagbind::fix::ByteRangeRewriter;
//!
//! let source = r#"<Button Click="DoxologyUse_Click"/>"#;
//! let mut rewriter = ByteRangeRewriter::new(source);
//! let count = rewriter.replace_all(r#""DoxologyUse_Click""#, r#""ElementUse_Click""#);
//! assert_eq!(count, 1);
//! assert_eq!(rewriter.apply().unwrap(), r#"<Button Click="ElementUse_Click"/>"#);
//! ```

use std::fmt;

/// A single edit operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Start byte offset (inclusive)
    pub start_byte: usize,
    /// End byte offset (exclusive)
    pub end_byte: usize,
    /// Replacement content
    pub replacement: String,
}

impl Edit {
    /// Create a new edit
    #[must_use]
    pub fn new(start_byte: usize, end_byte: usize, replacement: impl Into<String>) -> Self {
        Self {
            start_byte,
            end_byte,
            replacement: replacement.into(),
        }
    }

    /// Check if this edit overlaps with another
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_byte < other.end_byte && other.start_byte < self.end_byte
    }
}

/// Error during rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// Two or more edits have overlapping ranges
    OverlappingEdits {
        /// Index of first overlapping edit
        edit_a: usize,
        /// Index of second overlapping edit
        edit_b: usize,
    },
    /// Edit range is out of bounds or splits a UTF-8 character
    OutOfBounds {
        /// Index of the bad edit
        edit_index: usize,
        /// End byte of the edit
        end_byte: usize,
        /// Length of the source
        source_len: usize,
    },
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverlappingEdits { edit_a, edit_b } => {
                write!(f, "Overlapping edits at indices {edit_a} and {edit_b}")
            }
            Self::OutOfBounds {
                edit_index,
                end_byte,
                source_len,
            } => {
                write!(
                    f,
                    "Edit {edit_index} out of bounds: end_byte {end_byte} > source length {source_len}"
                )
            }
        }
    }
}

impl std::error::Error for RewriteError {}

/// Safe text rewriter using byte ranges
///
/// This rewriter applies edits in reverse order to preserve byte positions,
/// and validates that edits don't overlap.
#[derive(Debug, Clone)]
pub struct ByteRangeRewriter {
    /// Original source text
    source: String,
    /// Pending edits
    edits: Vec<Edit>,
}

impl ByteRangeRewriter {
    /// Create a new rewriter for the given source
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            edits: Vec::new(),
        }
    }

    /// Add an edit to the pending list
    pub fn add_edit(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Queue a replacement for every occurrence of `pattern` in the source.
    ///
    /// Occurrences are found left to right without overlap, like
    /// [`str::replace`]. Returns how many were queued.
    pub fn replace_all(&mut self, pattern: &str, replacement: &str) -> usize {
        if pattern.is_empty() {
            return 0;
        }
        let before = self.edits.len();
        let found: Vec<Edit> = self
            .source
            .match_indices(pattern)
            .map(|(start, matched)| Edit::new(start, start + matched.len(), replacement))
            .collect();
        self.edits.extend(found);
        self.edits.len() - before
    }

    /// Get the number of pending edits
    #[must_use]
    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    /// Check if there are any pending edits
    #[must_use]
    pub fn has_edits(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Validate edits without applying them
    ///
    /// # Errors
    /// Returns error if edits overlap or are out of bounds
    pub fn validate(&self) -> Result<(), RewriteError> {
        // Check bounds
        for (i, edit) in self.edits.iter().enumerate() {
            if edit.end_byte > self.source.len()
                || edit.start_byte > edit.end_byte
                || !self.source.is_char_boundary(edit.start_byte)
                || !self.source.is_char_boundary(edit.end_byte)
            {
                return Err(RewriteError::OutOfBounds {
                    edit_index: i,
                    end_byte: edit.end_byte,
                    source_len: self.source.len(),
                });
            }
        }

        // Check overlaps
        for i in 0..self.edits.len() {
            for j in (i + 1)..self.edits.len() {
                if self.edits[i].overlaps(&self.edits[j]) {
                    return Err(RewriteError::OverlappingEdits {
                        edit_a: i,
                        edit_b: j,
                    });
                }
            }
        }

        Ok(())
    }

    /// Apply all edits and return the modified source
    ///
    /// Edits are applied in reverse order (by start position) to preserve
    /// byte offsets as we modify the string.
    ///
    /// # Errors
    /// Returns error if edits overlap or are out of bounds
    pub fn apply(self) -> Result<String, RewriteError> {
        self.validate()?;

        let mut result = self.source;
        let mut sorted_edits = self.edits;

        // Sort by start position descending (apply from end to start)
        sorted_edits.sort_by(|a, b| b.start_byte.cmp(&a.start_byte));

        for edit in sorted_edits {
            result.replace_range(edit.start_byte..edit.end_byte, &edit.replacement);
        }

        Ok(result)
    }
}
