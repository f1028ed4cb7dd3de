//! Library side of the `qris` command-line tool.
//!
//! The binary only parses arguments, installs logging and prints what a
//! [`commands::CommandExecutor`] returns; everything else lives here so
//! it can be tested directly.

pub mod commands;
pub mod config;

pub use config::{ConfigError, QrisConfig, BASE_PAYLOAD_ENV, DEFAULT_CONFIG_FILE};
