use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::PathBuf};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// ```
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// WeatherAPI.com API key. `WEATHER_API_KEY` takes precedence when set.
    pub api_key: Option<String>,
}

// The key must never end up in logs, so Debug redacts it.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Path to the log file. Kept next to the config so the TUI never
    /// writes to the terminal it is drawing on.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("forecast.log"))
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("dev", "forecast", "forecast-tui")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))
    }

    /// Store an API key.
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Resolve the API key: environment first, stored config second.
    pub fn resolved_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                return Ok(key);
            }
        }

        self.api_key.clone().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No WeatherAPI.com key configured.\n\
                 Hint: run `forecast configure` and enter your API key, \
                 or set the {API_KEY_ENV} environment variable."
            )
        })
    }
}
