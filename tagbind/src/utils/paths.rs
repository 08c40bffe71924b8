//! Path helpers for console output.

use std::path::Path;

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes
/// - Strips leading "./" or ".\" prefix
///
/// # Examples
/// ```
/// use std::path::Path;
/// use tagbind::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\Views\\Main.xaml")), "Views/Main.xaml");
/// assert_eq!(normalize_display_path(Path::new("./ServiceElementsWindow.xaml")), "ServiceElementsWindow.xaml");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}
