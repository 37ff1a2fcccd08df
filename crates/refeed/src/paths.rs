use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories_next::ProjectDirs;

/// Location of the per-user preset bank.
///
/// `REFEED_CONFIG_DIR` overrides the platform config directory; tests rely
/// on this to stay out of the real user profile.
pub fn default_preset_file() -> Result<PathBuf> {
    if let Ok(dir) = env::var("REFEED_CONFIG_DIR") {
        return Ok(PathBuf::from(dir).join("presets.toml"));
    }
    let dirs = ProjectDirs::from("", "", "refeed")
        .ok_or_else(|| anyhow!("could not determine a configuration directory"))?;
    Ok(dirs.config_dir().join("presets.toml"))
}
