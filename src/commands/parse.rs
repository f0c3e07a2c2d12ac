//! `gitpatch parse`: print the structured parse result.

use super::{file_filter, read_input, write_out};
use crate::cli::ParseArgs;
use gitpatch::config::{Config, OutputFormat};
use gitpatch::error::{PatchError, Result};
use gitpatch::parse_git_patch_bytes;
use serde::Serialize;
use std::io::Write;

pub(crate) fn cmd_parse(args: ParseArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let format = args.format.unwrap_or(config.format);
    let strict = args.strict || config.strict;
    let filter = file_filter(&args.filter, config)?;

    let input = read_input(args.input.as_deref())?;
    let result = parse_git_patch_bytes(&input.bytes)?.map(|set| filter.apply_set(set));

    write_out(out, &render(&result, format)?)?;

    let Some(set) = result else {
        return Err(PatchError::NoPatch(input.label));
    };

    let failed = set.failed();
    if failed > 0 {
        tracing::warn!(failed, total = set.len(), "some patches have a malformed header");
        if strict {
            return Err(PatchError::ParseFailure(failed, set.len()));
        }
    }

    Ok(())
}

/// Serialize `value` in the requested format, newline-terminated.
pub(crate) fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value).map_err(serialize_error)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(value).map_err(serialize_error)?,
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(serialize_error)?,
    };

    if rendered.ends_with('\n') {
        Ok(rendered)
    } else {
        Ok(rendered + "\n")
    }
}

fn serialize_error(e: impl std::fmt::Display) -> PatchError {
    PatchError::UserError(format!("failed to serialize output: {}", e))
}
