//! File section parsing: names, mode flags and hunks of one `diff --git` block.

use super::hunk::walk_hunk;
use super::model::ParsedFile;
use super::patterns::{
    ADDED_FILE_MODE, DELETED_FILE_MODE, FILE_NAME_REGEX, HUNK_MARKER, QUOTED_FILE_NAME_REGEX,
    SIMILARITY_INDEX,
};
use super::split::split_into_parts;

/// Parse one file section (starting with its `diff --git` line).
///
/// Returns `None` when the first line is not a recognizable `diff --git`
/// header or the section has no meta line. Hunks with malformed headers are
/// skipped; the remaining hunks are still parsed.
pub(super) fn parse_file_section(section: &[&str]) -> Option<ParsedFile> {
    let (header, rest) = section.split_first()?;
    let Some((before, after)) = parse_file_names(header) else {
        tracing::debug!(line = %header, "skipping file section with unrecognized header");
        return None;
    };

    let Some((meta, body)) = rest.split_first().filter(|(meta, _)| !meta.is_empty()) else {
        tracing::debug!(file = %after, "skipping file section without meta line");
        return None;
    };

    let mut file = ParsedFile::new(before, after);

    if meta.starts_with(ADDED_FILE_MODE) {
        file.added = true;
    }
    if meta.starts_with(DELETED_FILE_MODE) {
        file.deleted = true;
    }
    if meta.starts_with(SIMILARITY_INDEX) {
        tracing::trace!(file = %file.after_name, "similarity index, no hunks parsed");
        return Some(file);
    }

    for hunk in split_into_parts(body, HUNK_MARKER) {
        match walk_hunk(&hunk) {
            Some(lines) => file.modified_lines.extend(lines),
            None => {
                tracing::debug!(file = %file.after_name, header = %hunk[0], "skipping malformed hunk")
            }
        }
    }

    Some(file)
}

/// Extract the before and after paths from a `diff --git` line.
///
/// Paths are returned untrimmed.
fn parse_file_names(line: &str) -> Option<(&str, &str)> {
    let caps = QUOTED_FILE_NAME_REGEX
        .captures(line)
        .or_else(|| FILE_NAME_REGEX.captures(line))?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}
