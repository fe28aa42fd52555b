use std::sync::Arc;

use beandock_domain::notification::{ChannelConfig, NotificationSender};
use beandock_domain::shared::DomainError;

use super::console::ConsoleSender;
use super::dingtalk::DingTalkWebhookSender;
use super::feishu::FeishuWebhookSender;
use crate::config::TimeoutConfig;

/// Create a notification sender based on channel configuration
pub fn create_sender(
    config: &ChannelConfig,
    timeouts: &TimeoutConfig,
) -> Result<Arc<dyn NotificationSender>, DomainError> {
    config.validate()?;

    match config {
        ChannelConfig::Feishu { webhook_key } => Ok(Arc::new(FeishuWebhookSender::new(
            webhook_key.clone(),
            timeouts.notification,
        )?)),
        ChannelConfig::DingTalk { access_token } => Ok(Arc::new(DingTalkWebhookSender::new(
            access_token.clone(),
            timeouts.notification,
        )?)),
        ChannelConfig::Console => Ok(Arc::new(ConsoleSender::new())),
    }
}
