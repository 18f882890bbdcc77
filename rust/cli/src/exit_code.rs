//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Usage errors, invalid configuration, rejected input, I/O failures.
pub const ERROR: i32 = 2;

/// Input closed while a round was still open.
pub const INTERRUPTED: i32 = 130;
