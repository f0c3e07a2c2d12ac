//! CLI argument parsing for gitpatch.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use gitpatch::config::OutputFormat;
use std::path::PathBuf;

/// gitpatch: inspect `git format-patch` output.
///
/// Reads a single patch or a concatenated series (as produced by
/// `git format-patch --stdout`) and reports commit metadata together with
/// the added and removed lines of every touched file.
#[derive(Parser, Debug)]
#[command(name = "gitpatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log debug details (skipped sections, malformed hunks) to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of `.gitpatch.yaml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for gitpatch.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse patches and print the structured result.
    ///
    /// Prints an object for a single patch, an array for a series
    /// (with `null` for patches whose header is malformed), or `null`
    /// when no patch is found.
    Parse(ParseArgs),

    /// List the patches found in a series.
    ///
    /// With `--output-dir`, also writes each patch to its own file.
    Split(SplitArgs),

    /// Print a per-file summary of insertions and deletions.
    Stats(StatsArgs),
}

/// Glob filters shared by the commands that report files.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only report files matching these globs.
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Never report files matching these globs.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Patch file to read (stdin when omitted or `-`).
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Exit with an error if any patch has a malformed header.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `split` command.
#[derive(Parser, Debug)]
pub struct SplitArgs {
    /// Patch file to read (stdin when omitted or `-`).
    pub input: Option<PathBuf>,

    /// Directory to write `0001.patch`, `0002.patch`, ... into.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `stats` command.
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Patch file to read (stdin when omitted or `-`).
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_minimal() {
        let cli = Cli::try_parse_from(["gitpatch", "parse"]).unwrap();
        assert!(!cli.verbose);
        if let Command::Parse(args) = cli.command {
            assert!(args.input.is_none());
            assert!(args.format.is_none());
            assert!(args.filter.include.is_empty());
            assert!(!args.strict);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn parse_full() {
        let cli = Cli::try_parse_from([
            "gitpatch",
            "parse",
            "series.mbox",
            "--format",
            "json-pretty",
            "--include",
            "src/**,Cargo.toml",
            "--exclude",
            "src/gen/**",
            "--strict",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        if let Command::Parse(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("series.mbox")));
            assert_eq!(args.format, Some(OutputFormat::JsonPretty));
            assert_eq!(args.filter.include, vec!["src/**", "Cargo.toml"]);
            assert_eq!(args.filter.exclude, vec!["src/gen/**"]);
            assert!(args.strict);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["gitpatch", "parse", "--format", "xml"]).is_err());
    }

    #[test]
    fn parse_split_with_output_dir() {
        let cli = Cli::try_parse_from(["gitpatch", "split", "-", "-o", "out"]).unwrap();
        if let Command::Split(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("-")));
            assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        } else {
            panic!("Expected Split command");
        }
    }

    #[test]
    fn parse_stats_with_global_config() {
        let cli =
            Cli::try_parse_from(["gitpatch", "stats", "--config", "ci.yaml", "a.patch"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ci.yaml")));
        assert!(matches!(cli.command, Command::Stats(_)));
    }
}
