use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_CURSBNR_URL: &str = "https://cursbnr.ro";

/// Beyond this many decimals an `f64` carries no more information.
pub const MAX_PRECISION: u8 = 17;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CursBnrProviderConfig {
    pub base_url: String,
}

impl Default for CursBnrProviderConfig {
    fn default() -> Self {
        CursBnrProviderConfig {
            base_url: DEFAULT_CURSBNR_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub cursbnr: CursBnrProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    pub precision: Option<u8>,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to
    /// defaults when no file has been set up.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("ro", "cursconv", "cursconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(precision) = self.precision
            && precision > MAX_PRECISION
        {
            bail!("precision must be at most {MAX_PRECISION}, got {precision}");
        }
        Ok(())
    }
}
