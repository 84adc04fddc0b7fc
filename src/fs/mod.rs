//! Filesystem utilities for tradedocs.
//!
//! Template files and rendered documents are written atomically so a crash
//! never leaves a half-written template in the store.

pub mod atomic;

pub use atomic::atomic_write_file;
