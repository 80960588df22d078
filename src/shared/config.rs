use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_FETCH_LIMIT: usize = 100;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
const DEFAULT_JUST_POSTED_DAYS: i64 = 7;
const MAX_JUST_POSTED_DAYS: i64 = 36_500;
const DEFAULT_USER_AGENT: &str = "opportunities/0.1";

/// Where listing records come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    /// Fetch from the listing service over HTTP
    Remote,
    /// Use the datasets embedded in the crate
    Bundled,
}

impl FromStr for DataMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" | "http" => Ok(DataMode::Remote),
            "bundled" | "static" | "offline" => Ok(DataMode::Bundled),
            other => Err(AppError::ConfigError(format!("Unknown data mode '{}'", other))),
        }
    }
}

/// Freshness windows used for "just posted" badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessConfig {
    /// A listing posted within this many days counts as just posted
    pub just_posted_days: i64,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            just_posted_days: DEFAULT_JUST_POSTED_DAYS,
        }
    }
}

/// Application configuration
///
/// Read from the environment (after loading `.env`) with [`AppConfig::from_env`],
/// or assembled in code through [`AppConfigBuilder`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the listing service, without a trailing slash
    pub api_base_url: String,

    /// `limit` query parameter sent with every listing request
    pub fetch_limit: usize,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// User agent sent to the listing service
    pub user_agent: String,

    /// Course provider feeds, in merge order
    pub course_providers: Vec<String>,

    pub freshness: FreshnessConfig,

    pub data_mode: DataMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            course_providers: vec!["coursera".to_string(), "udemy".to_string()],
            freshness: FreshnessConfig::default(),
            data_mode: DataMode::Remote,
        }
    }
}

impl AppConfig {
    /// Load configuration from `OPPORTUNITIES_*` environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(url) = env::var("OPPORTUNITIES_API_BASE_URL") {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Ok(limit) = env::var("OPPORTUNITIES_FETCH_LIMIT") {
            config.fetch_limit = limit.trim().parse()?;
        }
        if let Ok(secs) = env::var("OPPORTUNITIES_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs.trim().parse()?);
        }
        if let Ok(agent) = env::var("OPPORTUNITIES_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Ok(providers) = env::var("OPPORTUNITIES_COURSE_PROVIDERS") {
            config.course_providers = providers
                .split(',')
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect();
        }
        if let Ok(days) = env::var("OPPORTUNITIES_JUST_POSTED_DAYS") {
            config.freshness.just_posted_days = days.trim().parse()?;
        }
        if let Ok(mode) = env::var("OPPORTUNITIES_DATA_MODE") {
            config.data_mode = mode.parse()?;
        }

        config.validate().map_err(AppError::ConfigError)?;

        log::debug!(
            "Configuration loaded: base_url={}, mode={:?}, limit={}",
            config.api_base_url,
            config.data_mode,
            config.fetch_limit
        );

        Ok(config)
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::new()
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.trim().is_empty() {
            return Err("API base URL cannot be empty".to_string());
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(format!(
                "API base URL must start with http:// or https://, got {}",
                self.api_base_url
            ));
        }

        if self.fetch_limit == 0 {
            return Err("Fetch limit must be greater than 0".to_string());
        }

        if self.request_timeout.is_zero() {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.freshness.just_posted_days < 0 {
            return Err(format!(
                "Just-posted window cannot be negative, got {}",
                self.freshness.just_posted_days
            ));
        }

        if self.freshness.just_posted_days > MAX_JUST_POSTED_DAYS {
            return Err(format!(
                "Just-posted window cannot exceed {} days, got {}",
                MAX_JUST_POSTED_DAYS, self.freshness.just_posted_days
            ));
        }

        Ok(())
    }
}

/// Builder for [`AppConfig`]
#[derive(Debug, Clone, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn fetch_limit(mut self, limit: usize) -> Self {
        self.config.fetch_limit = limit;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn course_providers(mut self, providers: Vec<String>) -> Self {
        self.config.course_providers = providers;
        self
    }

    pub fn just_posted_days(mut self, days: i64) -> Self {
        self.config.freshness.just_posted_days = days;
        self
    }

    pub fn data_mode(mut self, mode: DataMode) -> Self {
        self.config.data_mode = mode;
        self
    }

    /// Builds and validates the configuration
    pub fn build(self) -> AppResult<AppConfig> {
        self.config.validate().map_err(AppError::ConfigError)?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.course_providers, vec!["coursera", "udemy"]);
        assert_eq!(config.freshness.just_posted_days, 7);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = AppConfig::builder()
            .api_base_url("https://listings.example.com/api/")
            .fetch_limit(20)
            .build()
            .unwrap();
        assert_eq!(config.api_base_url, "https://listings.example.com/api");
        assert_eq!(config.fetch_limit, 20);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = AppConfig::builder().fetch_limit(0).build();
        assert!(matches!(result, Err(AppError::ConfigError(_))));

        let result = AppConfig::builder().api_base_url("ftp://nope").build();
        assert!(result.is_err());

        let result = AppConfig::builder().just_posted_days(-1).build();
        assert!(result.is_err());

        let result = AppConfig::builder().just_posted_days(i64::MAX / 2).build();
        assert!(matches!(result, Err(AppError::ConfigError(_))));

        let result = AppConfig::builder().just_posted_days(36_500).build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_data_mode_parsing() {
        assert_eq!("bundled".parse::<DataMode>().unwrap(), DataMode::Bundled);
        assert_eq!("REMOTE".parse::<DataMode>().unwrap(), DataMode::Remote);
        assert!("carrier-pigeon".parse::<DataMode>().is_err());
    }
}
