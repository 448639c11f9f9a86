// Configuration module for the menu button
// Handles loading the menu markup and display settings from a TOML file

pub mod loader;
pub mod types;

pub use loader::{create_default_config, default_config_toml, get_config_path, load_config};
pub use types::{BehaviorConfig, Config, DisplayConfig, ItemConfig, KeyBindings, MenuConfig};
