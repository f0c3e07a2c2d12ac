//! Splitting of patch blobs and line groups.

use super::patterns::PATCH_START_REGEX;

/// Split a combined blob into individual patch strings.
///
/// Each slice starts exactly at a `From <hash> <date>` line and ends right
/// before the next one, or at the end of the input. Text before the first
/// marker is dropped. An input without markers yields an empty vector.
///
/// # Example
///
/// ```
/// let blob = "junk\nFrom a Mon Sep 17 00:00:00 2001\nx\nFrom b Mon Sep 17 00:00:00 2001\ny\n";
/// let patches = gitpatch::split_into_patches(blob);
/// assert_eq!(patches.len(), 2);
/// assert!(patches[0].starts_with("From a "));
/// assert_eq!(patches[1], "From b Mon Sep 17 00:00:00 2001\ny\n");
/// ```
pub fn split_into_patches(combined: &str) -> Vec<&str> {
    let starts: Vec<usize> = PATCH_START_REGEX
        .find_iter(combined)
        .map(|m| m.start())
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(combined.len());
            &combined[start..end]
        })
        .collect()
}

/// Group lines into runs that each begin with a line starting with
/// `separator`. Lines before the first separator are dropped.
pub(crate) fn split_into_parts<'a>(lines: &[&'a str], separator: &str) -> Vec<Vec<&'a str>> {
    let mut parts: Vec<Vec<&'a str>> = Vec::new();

    for &line in lines {
        if line.starts_with(separator) {
            parts.push(vec![line]);
        } else if let Some(current) = parts.last_mut() {
            current.push(line);
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER_A: &str = "From aaa Mon Sep 17 00:00:00 2001";
    const MARKER_B: &str = "From bbb Mon Sep 17 00:00:00 2001";

    #[test]
    fn no_marker_yields_nothing() {
        assert!(split_into_patches("").is_empty());
        assert!(split_into_patches("diff --git a/x b/x\n+y\n").is_empty());
    }

    #[test]
    fn single_patch_runs_to_end_of_input() {
        let blob = format!("{MARKER_A}\nFrom: x <x@y>\n");
        assert_eq!(split_into_patches(&blob), vec![blob.as_str()]);
    }

    #[test]
    fn leading_text_is_dropped() {
        let blob = format!("preamble\n\n{MARKER_A}\nbody\n");
        let patches = split_into_patches(&blob);
        assert_eq!(patches, vec![format!("{MARKER_A}\nbody\n")]);
    }

    #[test]
    fn consecutive_patches_are_sliced_at_markers() {
        let blob = format!("{MARKER_A}\none\n{MARKER_B}\ntwo\n");
        let patches = split_into_patches(&blob);
        assert_eq!(patches.len(), 2);
        assert_eq!(patches[0], format!("{MARKER_A}\none\n"));
        assert_eq!(patches[1], format!("{MARKER_B}\ntwo\n"));
    }

    #[test]
    fn marker_must_start_a_line() {
        let blob = format!("{MARKER_A}\n> {MARKER_B}\n");
        assert_eq!(split_into_patches(&blob).len(), 1);
    }

    #[test]
    fn parts_start_at_separator() {
        let lines = vec!["intro", "@@ -1 +1 @@", "-a", "+b", "@@ -5 +5 @@", " c"];
        let parts = split_into_parts(&lines, "@@ ");
        assert_eq!(
            parts,
            vec![
                vec!["@@ -1 +1 @@", "-a", "+b"],
                vec!["@@ -5 +5 @@", " c"],
            ]
        );
    }

    #[test]
    fn parts_without_separator_are_empty() {
        let lines = vec!["a", "b"];
        assert!(split_into_parts(&lines, "diff --git").is_empty());
    }
}
