//! Configuration enums for gitpatch.

use serde::{Deserialize, Serialize};

/// How parse results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Compact single-line JSON.
    Json,
    /// Indented JSON (default).
    #[default]
    JsonPretty,
    /// YAML document.
    Yaml,
}
