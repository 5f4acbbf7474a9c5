//! Process exit codes of the `lissajous` binary.

/// All samples were written.
pub const OK: i32 = 0;
/// The output file could not be created, written or flushed.
pub const IO_FAILURE: i32 = 1;
