//! Command implementations for gitpatch.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input and filter plumbing they share.

mod parse;
mod split;
mod stats;


use crate::cli::{Cli, Command, FilterArgs};
use gitpatch::config::Config;
use gitpatch::error::{PatchError, Result};
use gitpatch::filter::FileFilter;
use std::io::{Read, Write};
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// Results are written to stdout; diagnostics go through `tracing`.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| PatchError::Io(format!("failed to read current directory: {}", e)))?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Parse(args) => parse::cmd_parse(args, &config, &mut out),
        Command::Split(args) => split::cmd_split(args, &mut out),
        Command::Stats(args) => stats::cmd_stats(args, &config, &mut out),
    }
}

/// Raw input plus a label for messages.
pub(crate) struct Input {
    pub label: String,
    pub bytes: Vec<u8>,
}

/// Read the patch input: a file, or stdin when `path` is absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<Input> {
    match path {
        Some(path) if path != Path::new("-") => {
            let bytes = std::fs::read(path).map_err(|e| {
                PatchError::Io(format!("failed to read '{}': {}", path.display(), e))
            })?;
            Ok(Input {
                label: path.display().to_string(),
                bytes,
            })
        }
        _ => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|e| PatchError::Io(format!("failed to read stdin: {}", e)))?;
            Ok(Input {
                label: "stdin".to_string(),
                bytes,
            })
        }
    }
}

/// Build the file filter: command-line globs replace the configured ones.
pub(crate) fn file_filter(args: &FilterArgs, config: &Config) -> Result<FileFilter> {
    let include = if args.include.is_empty() {
        &config.include
    } else {
        &args.include
    };
    let exclude = if args.exclude.is_empty() {
        &config.exclude
    } else {
        &args.exclude
    };
    FileFilter::new(include, exclude)
}

pub(crate) fn write_out(out: &mut dyn Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .map_err(|e| PatchError::Io(format!("failed to write output: {}", e)))
}
