//! Core types and utilities for the optskel skeleton generator.
//!
//! This crate provides the error type shared by every other crate in the
//! workspace, along with identifier checks applied to names that end up in
//! generated C code.

pub mod error;
pub mod ident;

pub use error::{Error, Result};
pub use ident::validate_parser_name;
