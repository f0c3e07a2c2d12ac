//! Exit code constants for the gitpatch CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, non-UTF-8 input)
//! - 2: No patch found in the input
//! - 3: At least one patch failed header parsing (only with `--strict`)
//! - 4: Reading input or writing output failed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or unusable input.
pub const USER_ERROR: i32 = 1;

/// The input contained no recognizable patch.
pub const NO_PATCH: i32 = 2;

/// One or more patches had a malformed header.
pub const PARSE_FAILURE: i32 = 3;

/// I/O failure while reading input or writing output.
pub const IO_FAILURE: i32 = 4;
