//! gitpatch: parse `git format-patch` output into structured data.
//!
//! The library turns one patch, or an mbox-style series of concatenated
//! patches, into commit metadata plus the added and removed lines of every
//! touched file, numbered as they appear in the old and new file.
//!
//! ```
//! use gitpatch::parse_git_patch;
//!
//! assert!(parse_git_patch("no patch in here").is_none());
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod filter;
pub mod patch;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{PatchError, Result};
pub use filter::FileFilter;
pub use patch::{
    ModifiedLine, ParsedFile, ParsedPatch, PatchSet, parse_git_patch, parse_git_patch_bytes,
    parse_single_patch, patch_text, split_into_patches,
};
