use std::{fs, path::Path};

use anyhow::Result;

use super::CommandResult;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file into the working directory.
///
/// An existing file is left untouched and reported as not created.
pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::init(false));
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(CommandResult::init(true))
}
