use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use url::Url;

use beandock_domain::notification::{ChannelType, NotificationMessage, NotificationSender};
use beandock_domain::shared::DomainError;

use super::webhook::{post_json, ReplyFormat};

const DINGTALK_API_BASE: &str = "https://oapi.dingtalk.com";

// {"errcode":0,"errmsg":"ok"}
const DINGTALK_REPLY: ReplyFormat = ReplyFormat {
    channel: "DingTalk",
    code_field: "errcode",
    message_field: "errmsg",
};

/// DingTalk custom robot sender (text messages)
pub struct DingTalkWebhookSender {
    access_token: String,
    api_base: String,
    client: Client,
}

impl DingTalkWebhookSender {
    pub fn new(access_token: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            DomainError::Infrastructure(format!("Failed to create DingTalk client: {}", e))
        })?;

        Ok(Self {
            access_token,
            api_base: DINGTALK_API_BASE.to_string(),
            client,
        })
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn build_webhook_url(&self) -> Result<Url, DomainError> {
        let endpoint = format!("{}/robot/send", self.api_base.trim_end_matches('/'));
        Url::parse_with_params(&endpoint, [("access_token", self.access_token.as_str())])
            .map_err(|e| DomainError::Infrastructure(format!("Invalid DingTalk webhook URL: {}", e)))
    }

    fn build_text_message(message: &NotificationMessage) -> serde_json::Value {
        let content = format!("{}\n\n{}", message.title, message.content);

        json!({
            "msgtype": "text",
            "text": { "content": content }
        })
    }
}

#[async_trait]
impl NotificationSender for DingTalkWebhookSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let url = self.build_webhook_url()?;
        post_json(
            &self.client,
            url.as_str(),
            &Self::build_text_message(message),
            &DINGTALK_REPLY,
        )
        .await
    }

    fn channel_type(&self) -> ChannelType {
        ChannelType::DingTalk
    }
}
