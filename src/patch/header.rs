//! Header parsing: the four mail header lines at the top of a patch.

use super::patterns::{AUTHOR_REGEX, HASH_REGEX};

/// Commit metadata taken from the first four lines of a patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PatchHeader {
    pub hash: String,
    pub author_name: String,
    pub author_email: String,
    pub date: String,
    pub message: String,
}

/// Consume the hash, author, date and subject lines from `lines`.
///
/// Returns `None` when any of the four lines is missing or empty, or when
/// the hash or author line does not have the expected shape. On success the
/// iterator is left positioned at the first body line.
pub(super) fn parse_header<'a, I>(lines: &mut I) -> Option<PatchHeader>
where
    I: Iterator<Item = &'a str>,
{
    let hash_line = next_non_empty(lines)?;
    let hash = HASH_REGEX.captures(hash_line)?.get(1)?.as_str().to_string();

    let author_line = next_non_empty(lines)?;
    let author = AUTHOR_REGEX.captures(author_line)?;
    let author_name = author
        .get(1)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    let author_email = author
        .get(3)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let date = value_after(next_non_empty(lines)?, "Date: ");
    let message = value_after(next_non_empty(lines)?, "Subject: ");

    Some(PatchHeader {
        hash,
        author_name,
        author_email,
        date,
        message,
    })
}

/// Take the next line; an empty line counts as missing.
fn next_non_empty<'a, I>(lines: &mut I) -> Option<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    lines.next().filter(|line| !line.is_empty())
}

/// Text after the first occurrence of `key`, or empty if `key` is absent.
fn value_after(line: &str, key: &str) -> String {
    line.split_once(key)
        .map(|(_, value)| value.to_string())
        .unwrap_or_default()
}
