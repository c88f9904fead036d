//! Process exit codes. The score never affects the exit code.

pub const SUCCESS: i32 = 0;
pub const USAGE_ERROR: i32 = 1; // Missing or invalid arguments
pub const FATAL: i32 = 2; // Unreadable input or malformed answer key / concepts
