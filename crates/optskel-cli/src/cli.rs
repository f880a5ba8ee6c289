//! Command-line argument definitions.

use crate::render::Overrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "optskel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit the exit-failure skeleton of a generated parser function
    #[command(visible_alias = "e")]
    Emit(EmitArgs),

    /// Create an optskel.toml in the current directory
    Init {
        /// Parser name to record in the configuration
        name: Option<String>,
    },

    /// Validate the optskel.toml of the current project
    Check,
}

#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Parser name used for the generated `<name>_free` call
    #[arg(long, short = 'p')]
    pub parser_name: Option<String>,

    /// Base indentation of the emitted block, in spaces
    #[arg(long, short = 'i')]
    pub indent: Option<usize>,

    /// Emit the EXIT_FAILURE guard before `return result;`
    #[arg(long, overrides_with = "no_handle_error")]
    pub handle_error: bool,

    /// Emit only `return result;` without the EXIT_FAILURE guard
    #[arg(long, overrides_with = "handle_error")]
    pub no_handle_error: bool,

    /// Write the generated code to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl EmitArgs {
    /// Collects the flags that override optskel.toml.
    pub fn overrides(&self) -> Overrides {
        let handle_error = if self.no_handle_error {
            Some(false)
        } else if self.handle_error {
            Some(true)
        } else {
            None
        };

        Overrides {
            parser_name: self.parser_name.clone(),
            indent: self.indent,
            handle_error,
        }
    }
}
