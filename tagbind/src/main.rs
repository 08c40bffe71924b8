//! Main binary entry point for the `tagbind` rewriter.
//!
//! This binary delegates to the shared `entry_point::run_with_args()` function
//! so it behaves the same as `tagbind-cli`.

use anyhow::Result;

fn main() -> Result<()> {
    let code = tagbind::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
