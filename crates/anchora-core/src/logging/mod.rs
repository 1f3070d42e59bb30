//! Logging setup.
//!
//! The core only talks to the `log` facade. Binaries call [`init_logging`]
//! early in `main` to get an `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};
