mod message_builder;
mod sender;

use reqwest::Client;
use std::time::Duration;

use beandock_domain::shared::DomainError;

const FEISHU_API_BASE: &str = "https://open.feishu.cn";

/// Feishu webhook notification sender
pub struct FeishuWebhookSender {
    webhook_key: String,
    api_base: String,
    client: Client,
}

impl FeishuWebhookSender {
    pub fn new(webhook_key: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            DomainError::Infrastructure(format!("Failed to create Feishu client: {}", e))
        })?;

        Ok(Self {
            webhook_key,
            api_base: FEISHU_API_BASE.to_string(),
            client,
        })
    }

    /// Point the sender at another host (self-hosted relay or test server)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn build_webhook_url(&self) -> String {
        format!(
            "{}/open-apis/bot/v2/hook/{}",
            self.api_base.trim_end_matches('/'),
            self.webhook_key
        )
    }
}
