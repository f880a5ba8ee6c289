//! optskel CLI library for testing and reusability.

pub mod cli;
pub mod commands;
pub mod render;
pub mod utils;

pub use optskel_utils::Config;
pub use render::{Overrides, Settings};
