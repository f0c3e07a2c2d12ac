//! `gitpatch split`: list the patches of a series, optionally writing each
//! one to its own file.

use super::{read_input, write_out};
use crate::cli::SplitArgs;
use gitpatch::error::{PatchError, Result};
use gitpatch::{parse_single_patch, patch_text, split_into_patches};
use std::io::Write;
use std::path::Path;

pub(crate) fn cmd_split(args: SplitArgs, out: &mut dyn Write) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let text = patch_text(&input.bytes)?;

    let patches = split_into_patches(text);
    if patches.is_empty() {
        return Err(PatchError::NoPatch(input.label));
    }

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir).map_err(|e| {
            PatchError::Io(format!("failed to create '{}': {}", dir.display(), e))
        })?;
    }

    for (index, patch) in patches.iter().enumerate() {
        let number = index + 1;
        let summary = match parse_single_patch(patch) {
            Some(parsed) => format!("{}  {}", parsed.hash, parsed.message),
            None => "(malformed header)".to_string(),
        };

        match &args.output_dir {
            Some(dir) => {
                let path = write_patch(dir, number, patch)?;
                write_out(out, &format!("{:>4}  {}  -> {}\n", number, summary, path))?;
            }
            None => write_out(out, &format!("{:>4}  {}\n", number, summary))?,
        }
    }

    Ok(())
}

/// Write one patch as `NNNN.patch` and return the written path.
fn write_patch(dir: &Path, number: usize, patch: &str) -> Result<String> {
    let path = dir.join(format!("{:04}.patch", number));
    std::fs::write(&path, patch)
        .map_err(|e| PatchError::Io(format!("failed to write '{}': {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "wrote patch");
    Ok(path.display().to_string())
}
