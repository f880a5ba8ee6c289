//! Command implementations for the optskel CLI.

pub mod check;
pub mod emit;
pub mod init;
