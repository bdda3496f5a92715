use crate::OutputFormat;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "DCALC_CONFIG";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    /// Default format for `dcalc calc`
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PromptConfig {
    /// Print the welcome banner and format hint before the first prompt
    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_banner() -> bool {
    true
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// tracing filter directive, e.g. "warn" or "dcalc=debug"
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            anyhow::bail!("Logging level must not be empty");
        }
        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        Ok(())
    }
}

/// Resolve the config file location.
///
/// Priority order:
/// 1. `DCALC_CONFIG`
/// 2. `~/.dcalc/config.toml`
/// 3. Platform config directory (`dcalc/config.toml` under XDG, AppData, ...)
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    if let Some(home) = home::home_dir() {
        return Ok(home.join(".dcalc").join("config.toml"));
    }

    let dir = dirs::config_dir().context("Could not find home or config directory")?;
    Ok(dir.join("dcalc").join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }

    let config = load_from_path(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
