//! Path filtering of parsed files.
//!
//! A file is kept when it matches at least one `include` glob (or no include
//! globs are given) and matches no `exclude` glob. Both the before and the
//! after path are checked, so renames are caught from either side.

use crate::error::{PatchError, Result};
use crate::patch::{ParsedFile, ParsedPatch, PatchSet};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled include/exclude glob sets.
#[derive(Debug, Clone)]
pub struct FileFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl FileFilter {
    /// Compile include and exclude patterns.
    ///
    /// # Returns
    ///
    /// * `Ok(FileFilter)` - Successfully compiled patterns
    /// * `Err(PatchError::UserError)` - A pattern is empty or not a valid glob
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: build_globset(include)?,
            exclude: build_globset(exclude)?,
        })
    }

    /// Whether the filter drops nothing.
    pub fn is_noop(&self) -> bool {
        self.include.is_none() && self.exclude.is_none()
    }

    /// Check whether a parsed file passes the filter.
    pub fn matches(&self, file: &ParsedFile) -> bool {
        let paths = [file.before_name.as_str(), file.after_name.as_str()];

        if let Some(exclude) = &self.exclude
            && paths.iter().any(|p| exclude.is_match(p))
        {
            return false;
        }

        match &self.include {
            Some(include) => paths.iter().any(|p| include.is_match(p)),
            None => true,
        }
    }

    /// Drop the files of `patch` that do not pass the filter.
    pub fn apply(&self, mut patch: ParsedPatch) -> ParsedPatch {
        if !self.is_noop() {
            patch.files.retain(|file| self.matches(file));
        }
        patch
    }

    /// Filter every parsed patch in a set, keeping its shape.
    pub fn apply_set(&self, set: PatchSet) -> PatchSet {
        set.map_patches(|patch| self.apply(patch))
    }
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let normalized = pattern.trim().replace('\\', "/");
        if normalized.is_empty() {
            return Err(PatchError::UserError(
                "glob patterns must be non-empty".to_string(),
            ));
        }
        let glob = Glob::new(&normalized).map_err(|e| {
            PatchError::UserError(format!("invalid glob pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }

    let set = builder
        .build()
        .map_err(|e| PatchError::UserError(format!("failed to build glob set: {}", e)))?;
    Ok(Some(set))
}
