use clap::{Args, Parser};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.tagbind.toml):
  Searched for in the current directory and its parents.

  [tagbind]
  target = \"ServiceElementsWindow.xaml\"   # Relative to the config file
  keys = [\"Doxology\", \"GloriaPatri\"]      # Replaces the built-in key list

REWRITE:
  Click=\"<Key>Select_Click\"  ->  Click=\"ElementSelect_Click\" Tag=\"<Key>\"
  (likewise for Clear and Use)
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Print the rewrite report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (per-rule counts, unmatched handlers).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "tagbind - Rewrite per-element XAML click handlers into shared handlers with a Tag",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Markup file to rewrite in place.
    /// Defaults to the config `target`, then to ServiceElementsWindow.xaml.
    pub path: Option<PathBuf>,

    /// Element key to rewrite (repeatable). Replaces the configured key list.
    #[arg(short, long = "key", value_name = "KEY")]
    pub keys: Vec<String>,

    /// Show what would change without writing the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}
