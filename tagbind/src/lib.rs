//! Core library for the tagbind markup rewriter.
//!
//! tagbind replaces per-element click handlers such as
//! `Click="DoxologySelect_Click"` with a shared handler and a `Tag`
//! attribute naming the element: `Click="ElementSelect_Click" Tag="Doxology"`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Module defining the entry point logic shared by the binaries.
pub mod entry_point;

/// Module defining the error taxonomy.
pub mod error;

/// Module containing the byte-range rewriter.
pub mod fix;

/// Module for styled CLI output.
pub mod output;

/// Module building replacement rules from element keys.
pub mod rules;

/// Module containing utility functions.
pub mod utils;
