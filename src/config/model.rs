//! Config struct definition and default implementation.

use super::types::OutputFormat;
use serde::{Deserialize, Serialize};

/// Configuration for the gitpatch CLI.
///
/// This struct represents the contents of `.gitpatch.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format of `parse`.
    pub format: OutputFormat,

    /// Only report files matching one of these globs (empty: all files).
    pub include: Vec<String>,

    /// Never report files matching one of these globs.
    pub exclude: Vec<String>,

    /// Fail when any detected patch has a malformed header.
    pub strict: bool,
}
