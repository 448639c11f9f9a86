// Configuration file loading and creation

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::types::Config;

/// Get the path to the default configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("menu-button");
    path.push("config.toml");
    path
}

/// Load configuration from `path` (or the default location), creating a
/// default file when none exists. Unparsable files fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => get_config_path(),
    };

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("reading config file {}", config_path.display()))?;
        Ok(parse_config(&contents))
    } else {
        create_default_config(&config_path)?;
        Ok(Config::default())
    }
}

/// Parse TOML config text, logging and falling back to defaults on error
pub fn parse_config(contents: &str) -> Config {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            warn!("failed to parse config file, using default configuration: {}", e);
            Config::default()
        }
    }
}

/// Render the default configuration with explanatory header comments
pub fn default_config_toml() -> Result<String> {
    let toml_string = toml::to_string_pretty(&Config::default())
        .context("serializing default configuration")?;

    Ok(format!(
        "# Menu Button Configuration File\n\
         # Edit this file to change the menu and its appearance\n\
         # After editing, restart the application for changes to take effect\n\
         #\n\
         # Key binding format: Use \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\", \"Tab\"\n\
         #                     or single characters like \"Q\"\n\
         #\n\
         # Menu items: [[menu.items]] with a label and an optional payload\n\
         #\n\
         # Colors: RGB values from 0-255\n\n\
         {}",
        toml_string
    ))
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating config directory {}", parent.display()))?;
    }

    fs::write(path, default_config_toml()?)
        .with_context(|| format!("writing default config to {}", path.display()))?;
    info!("created default config file at {}", path.display());
    Ok(())
}
