//! Structured logging setup.
//!
//! The crate logs through `tracing` macros everywhere. This module installs
//! the subscriber that decides where those events end up:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr | rotating log file
//! ```
//!
//! # Configuration
//!
//! - `RUST_LOG` (highest priority)
//! - `trace_level` host configuration key
//! - `log_file` host configuration key (stderr when absent)
//!
//! # Modules
//!
//! - `init`: Subscriber initialization
//! - `file_writer`: Rotating file writer

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
