//! `gitpatch stats`: diffstat-like summary per patch.

use super::{file_filter, read_input, write_out};
use crate::cli::StatsArgs;
use gitpatch::config::Config;
use gitpatch::error::{PatchError, Result};
use gitpatch::{parse_git_patch_bytes, ParsedFile, ParsedPatch};
use std::io::Write;

pub(crate) fn cmd_stats(args: StatsArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let filter = file_filter(&args.filter, config)?;
    let input = read_input(args.input.as_deref())?;

    let Some(set) = parse_git_patch_bytes(&input.bytes)? else {
        return Err(PatchError::NoPatch(input.label));
    };

    for (index, patch) in set.iter().enumerate() {
        if index > 0 {
            write_out(out, "\n")?;
        }
        match patch {
            Some(patch) => write_out(out, &format_stats(&filter.apply(patch.clone())))?,
            None => write_out(out, &format!("patch {}: malformed header\n", index + 1))?,
        }
    }

    Ok(())
}

/// Render the summary of one patch.
pub(crate) fn format_stats(patch: &ParsedPatch) -> String {
    let mut text = format!("{} {}\n", patch.hash, patch.message);

    if let Some(ts) = patch.timestamp() {
        text.push_str(&format!("Date: {}\n", ts.to_rfc3339()));
    }

    for file in &patch.files {
        text.push_str(&format!(
            " {} | +{} -{}{}\n",
            display_name(file),
            file.insertions(),
            file.deletions(),
            file_tag(file)
        ));
    }

    text.push_str(&format!(
        " {} file{} changed, {} insertion{}(+), {} deletion{}(-)\n",
        patch.files.len(),
        plural(patch.files.len()),
        patch.insertions(),
        plural(patch.insertions()),
        patch.deletions(),
        plural(patch.deletions()),
    ));

    text
}

fn display_name(file: &ParsedFile) -> String {
    if file.is_renamed() {
        format!("{} => {}", file.before_name, file.after_name)
    } else {
        file.after_name.clone()
    }
}

fn file_tag(file: &ParsedFile) -> &'static str {
    match (file.added, file.deleted) {
        (true, _) => " (new)",
        (_, true) => " (gone)",
        _ => "",
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
