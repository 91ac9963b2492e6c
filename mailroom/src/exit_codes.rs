//! Stable exit codes for the mailroom CLI.

/// Session ended normally (quit or end of input).
pub const OK: i32 = 0;
/// Session aborted by an error (invalid config, letter write failure).
pub const FAILED: i32 = 1;
