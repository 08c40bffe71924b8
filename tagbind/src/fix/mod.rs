//! Byte-range rewriting of markup text.
//!
//! The rewrite command queues every handler substitution as an [`Edit`]
//! against the original text and applies them together, so offsets never
//! drift while the buffer changes.

mod rewriter;

pub use rewriter::{ByteRangeRewriter, Edit, RewriteError};
