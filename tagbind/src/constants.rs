use regex::Regex;
use std::sync::OnceLock;

/// Configuration file name searched for in the working directory and its parents.
pub const CONFIG_FILENAME: &str = ".tagbind.toml";

/// Markup file rewritten when neither the CLI nor the config names a target.
pub const DEFAULT_TARGET: &str = "ServiceElementsWindow.xaml";

/// Built-in element keys, in rewrite order.
pub const DEFAULT_ELEMENT_KEYS: [&str; 11] = [
    "SongForBeginning",
    "CallToWorship",
    "PraiseSong",
    "GloriaPatri",
    "LordsPrayer",
    "PrayerSong",
    "ChildrensMomentSong",
    "CommunionSong",
    "Doxology",
    "InvitationSong",
    "EndingSong",
];

/// Prefix of the shared handlers (`ElementSelect_Click`, ...).
pub const UNIFIED_HANDLER_PREFIX: &str = "Element";

/// Attribute carrying the element key after the rewrite.
pub const TAG_ATTRIBUTE: &str = "Tag";

/// Line printed once the target has been rewritten.
pub const SUCCESS_MESSAGE: &str = "XAML file updated successfully";

/// Line printed at the end of a dry run.
pub const DRY_RUN_MESSAGE: &str = "[DRY-RUN] No files were modified.";

/// Regex an element key must match to be usable as a handler-name prefix.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_element_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid element key regex pattern")
    })
}
