//! Logging setup.
//!
//! The crate logs through the `log` facade only; hosts that already install a
//! logger can skip [`init_logging`] entirely.

mod init;

pub use init::{LoggingConfig, init_logging};
