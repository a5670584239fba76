//! Configuration loading from TOML files

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use bibliodash_analytics::settings::DEFAULT_PALETTE;
use bibliodash_analytics::{DashboardSettings, YearRange};
use bibliodash_openalex::CollectConfig;
use bibliodash_openalex::config::DEFAULT_BASE_URL;

/// Global configuration for bibliodash
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub years: YearsConfig,
    pub dashboard: DashboardConfig,
    pub openalex: OpenAlexConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// File path or http(s) URL
    pub path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: "data.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct YearsConfig {
    pub start: i32,
    pub end: i32,
}

impl Default for YearsConfig {
    fn default() -> Self {
        let range = YearRange::default();
        Self {
            start: range.start(),
            end: range.end(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_topic: Option<String>,
    pub keyword_limit: usize,
    pub palette: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let settings = DashboardSettings::default();
        Self {
            default_topic: None,
            keyword_limit: settings.keyword_limit,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAlexConfig {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_env_var")]
    pub mailto: Option<String>,
    pub topics: Vec<String>,
    pub top_n: u32,
    pub max_keywords: usize,
    pub abstract_max_chars: usize,
    pub request_delay_ms: u64,
}

impl Default for OpenAlexConfig {
    fn default() -> Self {
        let collect = CollectConfig::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mailto: std::env::var("OPENALEX_MAILTO").ok(),
            topics: collect.topics,
            top_n: collect.top_n,
            max_keywords: collect.max_keywords,
            abstract_max_chars: collect.abstract_max_chars,
            request_delay_ms: collect.request_delay.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Seconds without a complete response before a request fails
    pub read_timeout: u64,
    pub max_retries: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        let http = bibliodash_core::HttpConfig::default();
        Self {
            read_timeout: http.read_timeout.as_secs(),
            max_retries: http.max_retries,
        }
    }
}

/// Deserialize a string that may contain environment variable reference like ${VAR}
fn deserialize_env_var<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| expand_env_var(&s)))
}

/// Expand ${VAR} to environment variable value
fn expand_env_var(s: &str) -> Option<String> {
    if let Some(var_name) = s.strip_prefix("${").and_then(|s| s.strip_suffix('}')) {
        std::env::var(var_name).ok()
    } else {
        Some(s.to_string())
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./bibliodash.toml (current directory)
    /// 2. ~/.config/bibliodash/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("bibliodash.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "bibliodash") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn year_range(&self) -> Result<YearRange> {
        YearRange::new(self.years.start, self.years.end).with_context(|| {
            format!(
                "Invalid [years] range: start {} is after end {}",
                self.years.start, self.years.end
            )
        })
    }

    pub fn dashboard_settings(&self) -> Result<DashboardSettings> {
        Ok(DashboardSettings {
            years: self.year_range()?,
            keyword_limit: self.dashboard.keyword_limit,
            palette: self.dashboard.palette.clone(),
        })
    }

    pub fn collect_config(&self) -> Result<CollectConfig> {
        Ok(CollectConfig {
            base_url: self.openalex.base_url.clone(),
            mailto: self.openalex.mailto.clone(),
            topics: self.openalex.topics.clone(),
            years: self.year_range()?,
            top_n: self.openalex.top_n,
            max_keywords: self.openalex.max_keywords,
            abstract_max_chars: self.openalex.abstract_max_chars,
            request_delay: Duration::from_millis(self.openalex.request_delay_ms),
            max_retries: self.http.max_retries,
        })
    }
}
