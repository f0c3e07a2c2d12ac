//! Top-level patch parsing.

use crate::error::{PatchError, Result};

use super::file::parse_file_section;
use super::header::parse_header;
use super::model::{ParsedPatch, PatchSet};
use super::patterns::FILE_SECTION_MARKER;
use super::split::{split_into_parts, split_into_patches};

/// Parse `git format-patch` output into structured patches.
///
/// # Returns
///
/// * `None` - the input contains no `From <hash> <date>` line
/// * `Some(PatchSet::Single(..))` - exactly one patch; `None` inside if its
///   header is malformed
/// * `Some(PatchSet::Multiple(..))` - several patches in input order, with
///   `None` for each patch whose header is malformed
///
/// # Example
///
/// ```
/// use gitpatch::{parse_git_patch, PatchSet};
///
/// let text = "From 1a2b3c Mon Sep 17 00:00:00 2001\n\
///             From: Jane Doe <jane@example.com>\n\
///             Date: Tue, 4 Jun 2024 10:11:12 +0200\n\
///             Subject: [PATCH] Say hello\n\
///             \n\
///             diff --git a/hello.txt b/hello.txt\n\
///             index 1111111..2222222 100644\n\
///             --- a/hello.txt\n\
///             +++ b/hello.txt\n\
///             @@ -1,1 +1,1 @@\n\
///             -hi\n\
///             +hello\n";
///
/// let Some(PatchSet::Single(Some(patch))) = parse_git_patch(text) else {
///     panic!("expected a single parsed patch");
/// };
/// assert_eq!(patch.hash, "1a2b3c");
/// assert_eq!(patch.files[0].after_name, "hello.txt");
/// assert_eq!(patch.insertions(), 1);
/// ```
pub fn parse_git_patch(input: &str) -> Option<PatchSet> {
    let patches = split_into_patches(input);
    tracing::debug!(count = patches.len(), "split input into patches");

    match patches.as_slice() {
        [] => None,
        [single] => Some(PatchSet::Single(parse_single_patch(single))),
        many => Some(PatchSet::Multiple(
            many.iter().map(|patch| parse_single_patch(patch)).collect(),
        )),
    }
}

/// Parse raw bytes, rejecting input that is not UTF-8 text.
///
/// Invalid input is a caller error and is reported as
/// `Err(PatchError::InvalidInput)`; it never turns into a `None` result.
pub fn parse_git_patch_bytes(input: &[u8]) -> Result<Option<PatchSet>> {
    Ok(parse_git_patch(patch_text(input)?))
}

/// View raw input as patch text, or fail with `PatchError::InvalidInput`.
pub fn patch_text(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input).map_err(|e| {
        PatchError::InvalidInput(format!("expected patch text to be UTF-8: {}", e))
    })
}

/// Parse one patch string: header lines first, then one entry per
/// `diff --git` section.
pub fn parse_single_patch(patch: &str) -> Option<ParsedPatch> {
    let mut lines = patch.split('\n');

    let Some(header) = parse_header(&mut lines) else {
        tracing::debug!(
            first_line = patch.lines().next().unwrap_or_default(),
            "patch header is missing or malformed"
        );
        return None;
    };

    let body: Vec<&str> = lines.collect();
    let files = split_into_parts(&body, FILE_SECTION_MARKER)
        .iter()
        .filter_map(|section| parse_file_section(section))
        .collect();

    Some(ParsedPatch {
        hash: header.hash,
        author_name: header.author_name,
        author_email: header.author_email,
        date: header.date,
        message: header.message,
        files,
    })
}
