//! Logging utilities.
//!
//! Every crate in the workspace logs through the `log` facade; this module
//! only owns the optional `env_logger` setup for binaries and demos.

mod init;

pub use init::{init_logging, LoggingConfig};
