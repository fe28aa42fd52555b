use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Channel type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    /// Feishu (Lark) webhook
    Feishu,
    /// DingTalk robot webhook
    #[serde(rename = "dingtalk")]
    DingTalk,
    /// Standard output
    Console,
}

impl ChannelType {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelType::Feishu => "feishu",
            ChannelType::DingTalk => "dingtalk",
            ChannelType::Console => "console",
        }
    }
}

impl FromStr for ChannelType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feishu" => Ok(ChannelType::Feishu),
            "dingtalk" => Ok(ChannelType::DingTalk),
            "console" => Ok(ChannelType::Console),
            _ => Err(DomainError::InvalidInput(format!(
                "Unknown channel type: {s}"
            ))),
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Channel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChannelConfig {
    /// Feishu webhook configuration
    Feishu { webhook_key: String },
    /// DingTalk robot configuration
    #[serde(rename = "dingtalk")]
    DingTalk { access_token: String },
    /// Print to standard output
    Console,
}

impl ChannelConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            ChannelConfig::Feishu { webhook_key } => {
                if webhook_key.trim().is_empty() {
                    return Err(DomainError::InvalidInput(
                        "Feishu webhook_key cannot be empty".to_string(),
                    ));
                }
            }
            ChannelConfig::DingTalk { access_token } => {
                if access_token.trim().is_empty() {
                    return Err(DomainError::InvalidInput(
                        "DingTalk access_token cannot be empty".to_string(),
                    ));
                }
            }
            ChannelConfig::Console => {}
        }
        Ok(())
    }

    /// Get channel type from config
    pub fn channel_type(&self) -> ChannelType {
        match self {
            ChannelConfig::Feishu { .. } => ChannelType::Feishu,
            ChannelConfig::DingTalk { .. } => ChannelType::DingTalk,
            ChannelConfig::Console => ChannelType::Console,
        }
    }
}
