//! Implementation of the `optskel init` command.

use crate::utils::{DEFAULT_PARSER_NAME, print_status};
use anyhow::Result;
use optskel_utils::{CONFIG_FILE, Config};
use std::path::Path;

/// Executes the `init` command to create an optskel.toml in `project_dir`.
///
/// # Errors
/// Returns an error if optskel.toml already exists, the name is invalid, or
/// the file cannot be written.
pub fn execute(project_dir: &Path, name: Option<&str>) -> Result<()> {
    let config_path = project_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{CONFIG_FILE} already exists in {}", project_dir.display());
    }

    let config = Config::new(name.unwrap_or(DEFAULT_PARSER_NAME));
    config.validate()?;
    config.save(&config_path)?;

    print_status("Created", &format!("{CONFIG_FILE} for parser '{}'", config.parser.name));

    Ok(())
}
