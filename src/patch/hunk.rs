//! Hunk walking: line number reconstruction for added and removed lines.

use super::model::ModifiedLine;
use super::patterns::{HUNK_HEADER_REGEX, TRAILER_MARKER};

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@",
/// optionally followed by section context.
///
/// Returns (old_start, new_start) or None if the header is malformed.
pub(super) fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let caps = HUNK_HEADER_REGEX.captures(line)?;
    let old_start = caps.get(1)?.as_str().parse().ok()?;
    let new_start = caps.get(2)?.as_str().parse().ok()?;
    Some((old_start, new_start))
}

/// Walk one hunk (header line first) and return its added and removed lines.
///
/// Both counters start at the header's start numbers and advance by one
/// before every body line is classified; the side a `+` or `-` line does not
/// exist on is then stepped back. A `-- ` line is skipped after the advance,
/// so it still consumes a line number on both sides.
///
/// Returns `None` when the header is malformed or a counter would overflow.
pub(super) fn walk_hunk(hunk: &[&str]) -> Option<Vec<ModifiedLine>> {
    let (header, body) = hunk.split_first()?;
    let (old_start, new_start) = parse_hunk_header(header)?;

    let mut old_line = old_start;
    let mut new_line = new_start;
    let mut modified = Vec::new();

    for line in body {
        old_line = old_line.checked_add(1)?;
        new_line = new_line.checked_add(1)?;

        if line.starts_with(TRAILER_MARKER) {
            continue;
        }

        if let Some(content) = line.strip_prefix('+') {
            old_line -= 1;
            modified.push(ModifiedLine {
                added: true,
                line_number: new_line,
                line: content.to_string(),
            });
        } else if let Some(content) = line.strip_prefix('-') {
            new_line -= 1;
            modified.push(ModifiedLine {
                added: false,
                line_number: old_line,
                line: content.to_string(),
            });
        }
    }

    Some(modified)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added(line_number: usize, line: &str) -> ModifiedLine {
        ModifiedLine {
            added: true,
            line_number,
            line: line.to_string(),
        }
    }

    fn removed(line_number: usize, line: &str) -> ModifiedLine {
        ModifiedLine {
            added: false,
            line_number,
            line: line.to_string(),
        }
    }

    #[test]
    fn test_parse_hunk_header_standard() {
        assert_eq!(parse_hunk_header("@@ -10,5 +12,7 @@"), Some((10, 12)));
    }

    #[test]
    fn test_parse_hunk_header_with_context() {
        assert_eq!(
            parse_hunk_header("@@ -10,5 +12,7 @@ fn main() {"),
            Some((10, 12))
        );
    }

    #[test]
    fn test_parse_hunk_header_no_length() {
        assert_eq!(parse_hunk_header("@@ -10 +12 @@"), Some((10, 12)));
    }

    #[test]
    fn test_parse_hunk_header_invalid() {
        assert_eq!(parse_hunk_header("not a hunk header"), None);
        assert_eq!(parse_hunk_header("@@ invalid @@"), None);
        assert_eq!(parse_hunk_header("@@ -,1 +,1 @@"), None);
    }

    #[test]
    fn added_line_after_context() {
        let hunk = ["@@ -10,3 +10,4 @@", " ctx", "+new", " ctx2", " ctx3"];
        assert_eq!(walk_hunk(&hunk), Some(vec![added(12, "new")]));
    }

    #[test]
    fn added_line_first_in_hunk() {
        let hunk = ["@@ -10,3 +10,4 @@", "+new", " ctx", " ctx2", " ctx3"];
        assert_eq!(walk_hunk(&hunk), Some(vec![added(11, "new")]));
    }

    #[test]
    fn removed_line_first_in_hunk() {
        let hunk = ["@@ -5,2 +5,1 @@", "-old", " ctx"];
        assert_eq!(walk_hunk(&hunk), Some(vec![removed(6, "old")]));
    }

    #[test]
    fn replacement_keeps_sides_apart() {
        let hunk = [
            "@@ -3,4 +3,4 @@",
            " keep",
            "-before",
            "+after",
            " keep",
        ];
        assert_eq!(
            walk_hunk(&hunk),
            Some(vec![removed(5, "before"), added(5, "after")])
        );
    }

    #[test]
    fn content_keeps_leading_characters() {
        let hunk = ["@@ -1 +1 @@", "++x", "--y", "+"];
        assert_eq!(
            walk_hunk(&hunk),
            Some(vec![added(2, "+x"), removed(2, "-y"), added(3, "")])
        );
    }

    #[test]
    fn trailer_line_consumes_a_number_on_both_sides() {
        let hunk = ["@@ -1,2 +1,2 @@", "-- ", "+after trailer", "-gone"];
        assert_eq!(
            walk_hunk(&hunk),
            Some(vec![added(3, "after trailer"), removed(3, "gone")])
        );
    }

    #[test]
    fn malformed_header_skips_hunk() {
        assert_eq!(walk_hunk(&["@@ bogus", "+x"]), None);
        assert_eq!(walk_hunk(&[]), None);
    }

    #[test]
    fn start_at_usize_max_skips_hunk() {
        let header = format!("@@ -{} +1 @@", usize::MAX);
        assert_eq!(parse_hunk_header(&header), Some((usize::MAX, 1)));
        assert_eq!(walk_hunk(&[header.as_str(), " ctx", "+x"]), None);

        let header = format!("@@ -1 +{} @@", usize::MAX);
        assert_eq!(walk_hunk(&[header.as_str(), "-x"]), None);
    }

    #[test]
    fn start_at_usize_max_without_body_is_empty() {
        let header = format!("@@ -{0} +{0} @@", usize::MAX);
        assert_eq!(walk_hunk(&[header.as_str()]), Some(Vec::new()));
    }

    #[test]
    fn counters_end_at_start_plus_lines_present_on_each_side() {
        let body = [" a", "-b", "+c", "+d", " e", "-f"];
        let mut hunk = vec!["@@ -20,4 +30,4 @@"];
        hunk.extend(body);

        let lines = walk_hunk(&hunk).unwrap();
        let old_present = body.iter().filter(|l| !l.starts_with('+')).count();
        let new_present = body.iter().filter(|l| !l.starts_with('-')).count();

        let last_removed = lines.iter().rev().find(|l| !l.added).unwrap();
        let last_added = lines.iter().rev().find(|l| l.added).unwrap();
        assert_eq!(last_removed.line_number, 20 + old_present);
        assert_eq!(last_added.line_number, 30 + new_present - 1);
    }
}
