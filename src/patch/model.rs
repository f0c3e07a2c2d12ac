//! Parsed patch data model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One commit's worth of data taken from a single patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPatch {
    /// Commit hash as printed after `From `.
    pub hash: String,
    /// Author display name (empty when the author line has none).
    pub author_name: String,
    /// Author email without angle brackets (empty when absent).
    pub author_email: String,
    /// Raw text after `Date: `.
    pub date: String,
    /// Raw text after `Subject: `.
    pub message: String,
    /// Touched files, in order of appearance in the diff.
    pub files: Vec<ParsedFile>,
}

impl ParsedPatch {
    /// Parse the raw date header as an RFC 2822 timestamp.
    ///
    /// Returns `None` when the header is empty or not in the format
    /// `git format-patch` emits (`Mon, 17 Sep 2001 00:00:00 +0200`).
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(self.date.trim()).ok()
    }

    /// Total number of added lines across all files.
    pub fn insertions(&self) -> usize {
        self.files.iter().map(ParsedFile::insertions).sum()
    }

    /// Total number of removed lines across all files.
    pub fn deletions(&self) -> usize {
        self.files.iter().map(ParsedFile::deletions).sum()
    }
}

/// One file touched by a patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFile {
    /// Path before the change (without the `a/` prefix).
    pub before_name: String,
    /// Path after the change (without the `b/` prefix).
    pub after_name: String,
    /// The file was created by this patch.
    pub added: bool,
    /// The file was removed by this patch.
    pub deleted: bool,
    /// Added and removed lines, in hunk order.
    pub modified_lines: Vec<ModifiedLine>,
}

impl ParsedFile {
    pub(crate) fn new(before_name: &str, after_name: &str) -> Self {
        Self {
            before_name: before_name.trim().to_string(),
            after_name: after_name.trim().to_string(),
            added: false,
            deleted: false,
            modified_lines: Vec::new(),
        }
    }

    /// Whether the before and after paths differ.
    pub fn is_renamed(&self) -> bool {
        self.before_name != self.after_name
    }

    pub fn insertions(&self) -> usize {
        self.modified_lines.iter().filter(|l| l.added).count()
    }

    pub fn deletions(&self) -> usize {
        self.modified_lines.iter().filter(|l| !l.added).count()
    }

    /// Iterate over the added lines only.
    pub fn added_lines(&self) -> impl Iterator<Item = &ModifiedLine> {
        self.modified_lines.iter().filter(|l| l.added)
    }

    /// Iterate over the removed lines only.
    pub fn removed_lines(&self) -> impl Iterator<Item = &ModifiedLine> {
        self.modified_lines.iter().filter(|l| !l.added)
    }
}

/// A single added or removed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedLine {
    /// `true` for `+` lines, `false` for `-` lines.
    pub added: bool,
    /// Line number in the new file for added lines, in the old file for
    /// removed lines (1-based).
    pub line_number: usize,
    /// Line content without the leading `+`/`-`.
    pub line: String,
}

/// Result of parsing a blob that contained at least one patch.
///
/// Serializes as a bare object (or `null`) for a single patch and as an
/// array for several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchSet {
    /// The input held exactly one patch; `None` if its header was malformed.
    Single(Option<ParsedPatch>),
    /// The input held several patches, in input order.
    Multiple(Vec<Option<ParsedPatch>>),
}

impl PatchSet {
    /// Number of detected patches, parsed or not.
    // An empty input yields no `PatchSet`, so there is no empty state to report.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            PatchSet::Single(_) => 1,
            PatchSet::Multiple(patches) => patches.len(),
        }
    }

    /// Iterate over every detected patch, `None` for unparseable ones.
    pub fn iter(&self) -> impl Iterator<Item = Option<&ParsedPatch>> {
        let slice: &[Option<ParsedPatch>] = match self {
            PatchSet::Single(patch) => std::slice::from_ref(patch),
            PatchSet::Multiple(patches) => patches,
        };
        slice.iter().map(Option::as_ref)
    }

    /// Number of detected patches whose header could not be parsed.
    pub fn failed(&self) -> usize {
        self.iter().filter(Option::is_none).count()
    }

    /// Flatten into a list with one entry per detected patch.
    pub fn into_vec(self) -> Vec<Option<ParsedPatch>> {
        match self {
            PatchSet::Single(patch) => vec![patch],
            PatchSet::Multiple(patches) => patches,
        }
    }

    /// Apply `f` to every parsed patch, keeping the set's shape.
    pub fn map_patches<F>(self, mut f: F) -> Self
    where
        F: FnMut(ParsedPatch) -> ParsedPatch,
    {
        match self {
            PatchSet::Single(patch) => PatchSet::Single(patch.map(f)),
            PatchSet::Multiple(patches) => {
                PatchSet::Multiple(patches.into_iter().map(|p| p.map(&mut f)).collect())
            }
        }
    }
}
