//! Compiled patterns for the patch text format.
//!
//! Every pattern is compiled once on first use and shared for the lifetime
//! of the process.

use regex::Regex;
use std::sync::LazyLock;

/// Start of a patch inside an mbox-style blob:
/// `From <hash> <Weekday> <Month> <Day> <Time> <Year>` on a line of its own.
///
/// The time accepts `HH:MM:SS`, `MM:SS` or `SS`. `$` also matches before
/// `\r\n` so CRLF mailboxes split the same way.
pub(super) static PATCH_START_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?mR)^From (\S+) ",
        r"(Mon|Tues?|Wed|Thu(?:rs)?|Fri|Sat|Sun) ",
        r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) ",
        r"\b(0?[1-9]|[12][0-9]|3[01])\b ",
        r"\b(?:(?:([01]?[0-9]|2[0-3]):)?([0-5]?[0-9]):)?([0-5]?[0-9])\b ",
        r"\b[0-9]{4}\b$",
    ))
    .expect("Invalid patch start regex")
});

/// `From <hash>` at the start of the first header line.
pub(super) static HASH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^From (\S*)").expect("Invalid hash regex"));

/// `From: Display Name <email>`; both the name and the email are optional.
pub(super) static AUTHOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^From:\s?([^<].*[^>])?\s+(<(.*)>)?").expect("Invalid author regex")
});

/// `diff --git "a/<path>" "b/<path>"` with both paths quoted.
pub(super) static QUOTED_FILE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^diff --git "a/(.*)"\s+"b/(.*)"\s*$"#).expect("Invalid quoted file name regex")
});

/// `diff --git a/<path> b/<path>`, tolerant of stray quotes.
pub(super) static FILE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^diff --git "?a/(.*)"?\s*"?b/(.*)"?"#).expect("Invalid file name regex")
});

/// `@@ -<old_start>[,<len>] +<new_start>[,<len>] @@`
pub(super) static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -([0-9]+),?\S* \+([0-9]+),?").expect("Invalid hunk header regex")
});

/// Meta line prefix of a newly created file.
pub(super) const ADDED_FILE_MODE: &str = "new file mode ";

/// Meta line prefix of a deleted file.
pub(super) const DELETED_FILE_MODE: &str = "deleted file mode ";

/// Meta line prefix of a rename or copy without textual changes.
pub(super) const SIMILARITY_INDEX: &str = "similarity index ";

/// Line prefix opening a file section.
pub(super) const FILE_SECTION_MARKER: &str = "diff --git";

/// Line prefix opening a hunk.
pub(super) const HUNK_MARKER: &str = "@@ ";

/// Line prefix of the mail signature trailer (`-- `).
pub(super) const TRAILER_MARKER: &str = "-- ";
