use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub browse: BrowseOptions,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TmdbConfig {
    /// Base URL of the catalog API. Overridable so tests can point at a stub.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Base URL for poster/backdrop/profile imagery.
    #[serde(default = "default_image_base")]
    pub image_base: String,
    /// BCP 47 language tag sent with every request.
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BrowseOptions {
    /// Quiet period before a search term is considered settled.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// The catalog rejects page numbers above this, independent of total_pages.
    #[serde(default = "default_page_cap")]
    pub page_cap: u32,
    /// Cast entries shown on the detail view.
    #[serde(default = "default_cast_limit")]
    pub cast_limit: usize,
}

fn default_api_base() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_page_cap() -> u32 {
    500
}

fn default_cast_limit() -> usize {
    10
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            image_base: default_image_base(),
            language: default_language(),
        }
    }
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            page_cap: default_page_cap(),
            cast_limit: default_cast_limit(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, or fall back to defaults when it doesn't exist yet.
    pub fn load_or_default(path: &PathBuf) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.tmdb.api_base.starts_with("http://") && !self.tmdb.api_base.starts_with("https://") {
            return Err(anyhow::anyhow!("tmdb.api_base must be an http(s) URL"));
        }
        if self.tmdb.language.is_empty() {
            return Err(anyhow::anyhow!("tmdb.language cannot be empty"));
        }
        if self.browse.debounce_ms == 0 {
            return Err(anyhow::anyhow!("browse.debounce_ms must be positive"));
        }
        if self.browse.page_cap == 0 {
            return Err(anyhow::anyhow!("browse.page_cap must be positive"));
        }
        if self.browse.cast_limit == 0 {
            return Err(anyhow::anyhow!("browse.cast_limit must be positive"));
        }
        Ok(())
    }
}
