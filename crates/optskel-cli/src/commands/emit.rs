//! Implementation of the `optskel emit` command.

use crate::render::{self, Overrides, Settings};
use crate::utils::{print_config_status, print_status};
use anyhow::{Context, Result};
use optskel_utils::Config;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Executes the `emit` command, writing the skeleton to `output` or stdout.
///
/// Settings come from the nearest optskel.toml at or above `project_dir`
/// when there is one; flags on the command line take precedence. A relative
/// `output` is resolved against `project_dir`.
///
/// # Errors
/// Returns an error if the configuration is unreadable, the parser name is
/// invalid, or the output cannot be written.
pub fn execute(project_dir: &Path, overrides: &Overrides, output: Option<&Path>) -> Result<()> {
    let config = Config::find_optional_from(project_dir)?.map(|(config, root)| {
        if output.is_some() {
            print_config_status("Using", &config, &root);
        }
        config
    });

    let settings = Settings::resolve(config.as_ref(), overrides);
    let code = render::render_exit_failure(&settings)?;

    match output {
        Some(path) => {
            let path = project_dir.join(path);
            fs::write(&path, &code)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            print_status("Generated", &path.display().to_string());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(code.as_bytes())
                .and_then(|()| stdout.flush())
                .with_context(|| "Failed to write generated code to stdout")?;
        }
    }

    Ok(())
}
