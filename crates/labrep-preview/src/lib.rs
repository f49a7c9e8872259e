//! labrep-preview library root.
//!
//! Re-exports the options file and snapshot loading so that integration
//! tests can exercise them without going through the binary.

pub mod config;
pub mod snapshot;
