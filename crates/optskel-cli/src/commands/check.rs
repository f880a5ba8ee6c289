//! Implementation of the `optskel check` command.

use crate::utils::{print_config_status, print_status};
use anyhow::{Context, Result};
use optskel_utils::Config;
use std::path::Path;

/// Executes the `check` command to validate the nearest optskel.toml.
///
/// # Errors
/// Returns an error if no configuration is found or it is invalid.
pub fn execute(project_dir: &Path) -> Result<()> {
    let (config, root) =
        Config::find_from(project_dir).with_context(|| "Not in an optskel project directory")?;

    print_config_status("Checking", &config, &root);
    config.validate()?;
    print_status("Finished", "configuration is valid");

    Ok(())
}
