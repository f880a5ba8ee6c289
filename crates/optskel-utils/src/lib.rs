//! Shared utilities for optskel tools.

pub mod config;

pub use config::{CONFIG_FILE, Config, ParserSettings};
