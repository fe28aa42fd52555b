use async_trait::async_trait;

use beandock_domain::notification::{ChannelType, NotificationMessage, NotificationSender};
use beandock_domain::shared::DomainError;

use crate::notification::webhook::{post_json, ReplyFormat};

// {"code":0,"msg":"success"}
const FEISHU_REPLY: ReplyFormat = ReplyFormat {
    channel: "Feishu",
    code_field: "code",
    message_field: "msg",
};

#[async_trait]
impl NotificationSender for super::FeishuWebhookSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let url = self.build_webhook_url();

        match post_json(&self.client, &url, &self.build_rich_message(message), &FEISHU_REPLY).await {
            Ok(()) => Ok(()),
            // Some tenant bots only accept plain text
            Err(DomainError::Infrastructure(e)) => {
                log::warn!("Feishu rich message rejected ({}), retrying as text", e);
                post_json(&self.client, &url, &self.build_text_message(message), &FEISHU_REPLY)
                    .await
            }
            Err(e) => Err(e),
        }
    }

    fn channel_type(&self) -> ChannelType {
        ChannelType::Feishu
    }
}
