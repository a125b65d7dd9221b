// src/config.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::{PartyError, Result};

const DEFAULT_TITLE: &str = "💻 Coding Party Mission Challenge ✨";
const DEFAULT_HERO_IMAGE_URL: &str = "https://i.imgur.com/1p9X2fB.png";
const DEFAULT_SITE_URL: &str = "https://www.software.kr/";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Texts and links shown around the form.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub title: String,
    pub hero_image_url: String,
    pub party_site_url: String,
}

/// High-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployed backend script URL; both reads and writes go here.
    pub api_url: String,
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub page: PageSettings,
}

/// On-disk configuration. Every key is optional; environment variables
/// take precedence over it.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub max_upload_bytes: Option<usize>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub party_site_url: Option<String>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

impl AppConfig {
    /// Loads the config file (if any) and applies environment overrides.
    pub fn load() -> Result<Self> {
        let file = match config_file_path() {
            Some(path) if path.exists() => {
                log::info!("Reading configuration from {}", path.display());
                FileConfig::from_path(&path)?
            }
            _ => FileConfig::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merges `file` with values returned by `env`.
    pub fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = env("PARTY_API_URL")
            .or(file.api_url)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                PartyError::Config(
                    "No backend configured. Please set PARTY_API_URL or api_url in the config file."
                        .to_string(),
                )
            })?;

        let port = match env("PARTY_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| PartyError::Config(format!("Invalid PARTY_PORT '{}': {}", raw, e)))?,
            None => file.port.unwrap_or(8080),
        };

        let max_upload_bytes = match env("PARTY_MAX_UPLOAD_BYTES") {
            Some(raw) => raw.trim().parse().map_err(|e| {
                PartyError::Config(format!("Invalid PARTY_MAX_UPLOAD_BYTES '{}': {}", raw, e))
            })?,
            None => file.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        };

        Ok(AppConfig {
            api_url,
            host: env("PARTY_HOST")
                .or(file.host)
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            max_upload_bytes,
            page: PageSettings {
                title: env("PARTY_TITLE")
                    .or(file.title)
                    .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                hero_image_url: env("PARTY_HERO_IMAGE_URL")
                    .or(file.hero_image_url)
                    .unwrap_or_else(|| DEFAULT_HERO_IMAGE_URL.to_string()),
                party_site_url: env("PARTY_SITE_URL")
                    .or(file.party_site_url)
                    .unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            },
        })
    }
}

fn config_file_path() -> Option<PathBuf> {
    std::env::var_os("PARTY_CONFIG")
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("coding-party").join("config.toml")))
}
