//! Logging utilities.
//!
//! Shader build failures are reported through the `log` facade; this module
//! only wires up the `env_logger` backend for binaries and tests that want it.

mod init;

pub use init::{init_logging, LoggingConfig};
