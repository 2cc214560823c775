use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Runtime settings for the cookbook
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Path of the recipes file
    #[serde(default = "default_file")]
    pub file: PathBuf,
    /// Wait for the user to press Enter before exiting
    #[serde(default = "default_pause_on_exit")]
    pub pause_on_exit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            pause_on_exit: default_pause_on_exit(),
        }
    }
}

fn default_file() -> PathBuf {
    PathBuf::from("recipes.txt")
}

fn default_pause_on_exit() -> bool {
    true
}

impl AppConfig {
    /// Load configuration, letting `file_override` win over every other source
    pub fn load(file_override: Option<String>) -> Result<Self, ConfigError> {
        load_config(file_override)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. `file_override` (the positional command-line argument)
/// 2. Environment variables with RECIPES_ prefix
/// 3. cookbook.toml file in current directory
/// 4. Default values
///
/// Environment variable format: RECIPES_FILE, RECIPES_PAUSE_ON_EXIT
pub fn load_config(file_override: Option<String>) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("cookbook").required(false))
        .add_source(Environment::with_prefix("RECIPES").try_parsing(true))
        .set_override_option("file", file_override)?
        .build()?;

    settings.try_deserialize()
}
