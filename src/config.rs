//! Application configuration.
//!
//! Read from a TOML file; every field has a default, so an empty or missing
//! file is a valid configuration. The API key may also come from the
//! environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::client::{DEFAULT_API_BASE_URL, DEFAULT_MODEL};
use crate::story::{
    BACKGROUND_IMAGE_URL, DEFAULT_PAGE_COUNT, DEFAULT_PAGE_DELAY, GenerationOptions,
    ImageUrlBuilder,
};

/// Environment variables checked, in order, when the file has no API key.
pub const API_KEY_ENV_VARS: &[&str] = &["STORYBOOK_API_KEY", "GOOGLE_API_KEY"];

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub page_count: usize,
    /// Cosmetic pause per page while "illustrating", in milliseconds.
    pub page_delay_ms: u64,
    pub background_url: String,
    pub image: ImageUrlBuilder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_count: DEFAULT_PAGE_COUNT,
            page_delay_ms: DEFAULT_PAGE_DELAY.as_millis() as u64,
            background_url: BACKGROUND_IMAGE_URL.to_string(),
            image: ImageUrlBuilder::default(),
        }
    }
}

impl Config {
    /// Load from `path` when given (it must exist), otherwise from the
    /// platform config directory when a file is there, otherwise defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        if config.page_count == 0 {
            anyhow::bail!("page_count must be at least 1");
        }
        Ok(config)
    }

    /// API key from the file, falling back to the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .iter()
            .cloned()
            .chain(API_KEY_ENV_VARS.iter().filter_map(|name| lookup(*name)))
            .find(|key| !key.trim().is_empty())
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            page_count: self.page_count,
            page_delay: self.page_delay(),
            images: self.image.clone(),
        }
    }
}

/// `<platform config dir>/config.toml`, when a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "storybook").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
