//! Filesystem utilities.
//!
//! Generated files are written atomically so a failed run never leaves a
//! truncated manifest or Dockerfile behind.

pub mod atomic;

pub use atomic::atomic_write_file;
