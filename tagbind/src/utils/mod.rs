//! Utilities module for tagbind.

mod paths;

pub use paths::normalize_display_path;
