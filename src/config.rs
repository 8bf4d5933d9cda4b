use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";
pub const API_URL_ENV: &str = "POKEDEX_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    /// Cards per page
    pub page_size: u32,
    /// Upper bound on the records paged through, regardless of what the API reports.
    pub max_records: Option<u32>,
    /// Width of the sliding page window, excluding the first and last page.
    pub inner_circle_size: u32,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size: 20,
            max_records: Some(1025),
            inner_circle_size: 7,
            request_timeout_secs: 15,
        }
    }
}

impl Config {
    /// Load from the user config directory, falling back to defaults.
    ///
    /// Environment overrides are not applied here so that saving the result
    /// never persists them; see [`Config::effective`].
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config.sanitized())
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".config").join("pokedex").join("config.json"))
    }

    /// The settings actually used for requests: this config plus `POKEDEX_API_URL`.
    pub fn effective(&self) -> Self {
        self.with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    fn with_api_url_override(&self, url: Option<String>) -> Self {
        let mut config = self.clone();
        if let Some(url) = url.filter(|url| !url.trim().is_empty()) {
            config.api_base_url = url;
            config = config.sanitized();
        }
        config
    }

    /// Clamp values the pagination math cannot work with.
    pub fn sanitized(mut self) -> Self {
        self.page_size = self.page_size.clamp(1, 100);
        self.inner_circle_size = self.inner_circle_size.clamp(1, 15);
        self.request_timeout_secs = self.request_timeout_secs.max(1);
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        if self.api_base_url.is_empty() {
            self.api_base_url = DEFAULT_API_URL.to_string();
        }
        self
    }
}
