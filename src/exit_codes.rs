//! Exit code constants for the tradedocs CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown template, invalid config)
//! - 2: Render failure (malformed section structure)
//! - 3: Storage failure (template store or output file could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing template, or invalid workspace state.
pub const USER_ERROR: i32 = 1;

/// Render failure: the template has unbalanced or mismatched section tags.
pub const RENDER_FAILURE: i32 = 2;

/// Storage failure: reading or writing template files failed.
pub const STORAGE_FAILURE: i32 = 3;
