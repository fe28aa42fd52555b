mod pacing;

pub use pacing::PacingPolicy;

use std::path::PathBuf;
use std::time::Duration;

use beandock_domain::notification::ChannelConfig;
use beandock_domain::shared::DomainError;
use beandock_domain::{parse_tokens, AccessToken};
use beandock_infrastructure::config::TimeoutConfig;
use beandock_infrastructure::http::DEFAULT_BASE_URL;

use crate::application::ResultExt;

/// Environment variable holding the account tokens (`token1&token2` or one per line)
pub const TOKEN_ENV: &str = "jlcToken";
pub const BASE_URL_ENV: &str = "JLC_BASE_URL";
pub const HTTP_TIMEOUT_ENV: &str = "JLC_HTTP_TIMEOUT_SECS";
pub const DELAY_MIN_ENV: &str = "JLC_DELAY_MIN_SECS";
pub const DELAY_MAX_ENV: &str = "JLC_DELAY_MAX_SECS";
pub const LOG_DIR_ENV: &str = "JLC_LOG_DIR";
/// Feishu robot webhook key
pub const FEISHU_KEY_ENV: &str = "FSKEY";
/// DingTalk robot access token
pub const DINGTALK_TOKEN_ENV: &str = "DD_BOT_TOKEN";

const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Raw credential value, `None` when unset or blank
    pub raw_tokens: Option<String>,
    pub base_url: String,
    pub timeouts: TimeoutConfig,
    pub pacing: PacingPolicy,
    /// Configured notification channels; empty means console only
    pub channels: Vec<ChannelConfig>,
    pub log_dir: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            raw_tokens: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeouts: TimeoutConfig::default(),
            pacing: PacingPolicy::default(),
            channels: Vec::new(),
            log_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let timeouts = match get(HTTP_TIMEOUT_ENV) {
            Some(value) => {
                let secs: u64 = value.trim().parse::<u64>().to_invalid_input(HTTP_TIMEOUT_ENV)?;
                if secs == 0 {
                    return Err(DomainError::InvalidInput(format!(
                        "{} must be greater than 0",
                        HTTP_TIMEOUT_ENV
                    )));
                }
                defaults
                    .timeouts
                    .clone()
                    .with_http_request(Duration::from_secs(secs))
            }
            None => defaults.timeouts.clone(),
        };

        let min_secs = match get(DELAY_MIN_ENV) {
            Some(value) => value.trim().parse::<u64>().to_invalid_input(DELAY_MIN_ENV)?,
            None => PacingPolicy::DEFAULT_MIN_SECS,
        };
        let max_secs = match get(DELAY_MAX_ENV) {
            Some(value) => value.trim().parse::<u64>().to_invalid_input(DELAY_MAX_ENV)?,
            None => PacingPolicy::DEFAULT_MAX_SECS,
        };
        let pacing = PacingPolicy::new(min_secs, max_secs)?;

        let mut channels = Vec::new();
        if let Some(webhook_key) = get(FEISHU_KEY_ENV) {
            channels.push(ChannelConfig::Feishu {
                webhook_key: webhook_key.trim().to_string(),
            });
        }
        if let Some(access_token) = get(DINGTALK_TOKEN_ENV) {
            channels.push(ChannelConfig::DingTalk {
                access_token: access_token.trim().to_string(),
            });
        }

        Ok(Self {
            raw_tokens: get(TOKEN_ENV),
            base_url: get(BASE_URL_ENV)
                .map(|url| url.trim().to_string())
                .unwrap_or(defaults.base_url),
            timeouts,
            pacing,
            channels,
            log_dir: get(LOG_DIR_ENV).map(PathBuf::from),
            log_filter: defaults.log_filter,
        })
    }

    /// Parsed, non-empty access tokens
    pub fn tokens(&self) -> Vec<AccessToken> {
        self.raw_tokens
            .as_deref()
            .map(parse_tokens)
            .unwrap_or_default()
    }
}
