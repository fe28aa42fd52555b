use async_trait::async_trait;

use beandock_domain::notification::{ChannelType, NotificationMessage, NotificationSender};
use beandock_domain::shared::DomainError;

/// Fallback sender printing the message to standard output
#[derive(Debug, Default)]
pub struct ConsoleSender;

impl ConsoleSender {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn render(message: &NotificationMessage) -> String {
        format!("【标题】{}\n【内容】{}", message.title, message.content)
    }
}

#[async_trait]
impl NotificationSender for ConsoleSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        println!("{}", Self::render(message));
        Ok(())
    }

    fn channel_type(&self) -> ChannelType {
        ChannelType::Console
    }
}
