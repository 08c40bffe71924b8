use crate::cli::Cli;
use crate::commands::{run_rewrite, RewriteOptions};
use crate::config::Config;
use crate::error::TagbindError;
use crate::output;
use anyhow::Result;
use clap::Parser;
use std::path::Path;

/// Runs tagbind with the given arguments, writing to stdout.
///
/// # Errors
///
/// Returns an error if reading or writing the target fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run tagbind with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Usage errors (bad arguments, missing target, invalid keys) are reported on
/// stderr and yield exit code 1; platform I/O failures are returned as `Err`.
///
/// # Errors
///
/// Returns an error if reading or writing the target fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["tagbind".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    let config_root = cli_var.path.as_deref().unwrap_or(Path::new("."));
    let config = Config::load_from_path(config_root);
    output::print_rejected_configs(&config);

    let options = RewriteOptions {
        target: config.resolve_target(cli_var.path.as_deref()),
        keys: config.resolve_keys(&cli_var.keys),
        dry_run: cli_var.dry_run,
        verbose: cli_var.output.verbose,
        json: cli_var.output.json,
    };

    if options.verbose {
        eprintln!("[VERBOSE] tagbind v{}", env!("CARGO_PKG_VERSION"));
        match &config.config_file_path {
            Some(path) => eprintln!("[VERBOSE] Using config: {}", path.display()),
            None => eprintln!("[VERBOSE] No config file found, using defaults"),
        }
        eprintln!("[VERBOSE] Keys: {:?}", options.keys);
        eprintln!();
    }

    let report = match run_rewrite(&options, &mut *writer) {
        Ok(report) => report,
        Err(e) => {
            if e
                .downcast_ref::<TagbindError>()
                .is_some_and(TagbindError::is_usage_error)
            {
                eprintln!("Error: {e}");
                return Ok(1);
            }
            return Err(e);
        }
    };

    if cli_var.output.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(0);
    }

    if options.verbose {
        output::print_unmatched(&report);
        output::print_rule_table(writer, &report)?;
    }
    output::print_completion(writer, &report)?;
    Ok(0)
}
