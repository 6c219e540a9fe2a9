use std::path::Path;

use anyhow::{Result, bail};
use pixcmp::config;

/// `pixcmp init` — write pixcmp.toml into the working directory.
pub fn init(force: bool) -> Result<()> {
    if !force && config::config_file_exists() {
        bail!("pixcmp.toml already exists. Use --force to overwrite.");
    }
    config::write_template(Path::new("."))?;
    println!("Created pixcmp.toml");
    Ok(())
}
