//! Parsing of `git format-patch` output.
//!
//! The pipeline runs in five stages:
//! - split a combined mbox-style blob into patches at `From <hash> <date>` lines
//! - read the hash, author, date and subject header lines
//! - split the diff body into `diff --git` file sections
//! - split every file section into `@@ ` hunks
//! - walk each hunk to number its added and removed lines
//!
//! A malformed header drops only the patch it belongs to. Malformed file
//! sections and hunks are skipped on their own and parsing continues.

mod file;
mod header;
mod hunk;
mod model;
mod parser;
mod patterns;
mod split;


// Re-export public API
pub use model::{ModifiedLine, ParsedFile, ParsedPatch, PatchSet};
pub use parser::{parse_git_patch, parse_git_patch_bytes, parse_single_patch, patch_text};
pub use split::split_into_patches;
