//! Standard exit codes (BSD sysexits.h compatible)

/// Lookup found no matching player
pub const NOT_FOUND: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error (invalid roster content)
pub const DATAERR: i32 = 65;

/// Cannot open input (roster missing)
pub const NOINPUT: i32 = 66;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
