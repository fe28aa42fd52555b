use std::sync::Arc;
use tracing::{error, info, warn};

use beandock_domain::notification::{ChannelConfig, NotificationMessage, NotificationSender};
use beandock_infrastructure::config::TimeoutConfig;
use beandock_infrastructure::notification::{create_sender, ConsoleSender};

/// Title of the daily summary notification
pub const SUMMARY_TITLE: &str = "嘉立创签到汇总";

/// Notification application service
/// Delivers the run summary through every configured channel
pub struct NotificationService {
    senders: Vec<Arc<dyn NotificationSender>>,
    fallback: Arc<dyn NotificationSender>,
}

impl NotificationService {
    pub fn new(senders: Vec<Arc<dyn NotificationSender>>) -> Self {
        Self {
            senders,
            fallback: Arc::new(ConsoleSender::new()),
        }
    }

    /// Build senders from channel configs; invalid channels are logged and skipped
    pub fn from_channels(channels: &[ChannelConfig], timeouts: &TimeoutConfig) -> Self {
        let senders = channels
            .iter()
            .filter_map(|config| match create_sender(config, timeouts) {
                Ok(sender) => Some(sender),
                Err(e) => {
                    error!(
                        "Failed to create sender for channel {}: {}",
                        config.channel_type(),
                        e.format_with_code()
                    );
                    None
                }
            })
            .collect();

        Self::new(senders)
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn NotificationSender>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Send to all channels and return how many accepted the message.
    ///
    /// Never fails. With no configured channel, or when every channel
    /// fails, the message goes to the console fallback instead.
    pub async fn send_to_all(&self, message: &NotificationMessage) -> usize {
        if self.senders.is_empty() {
            info!("No notification channel configured, printing to console");
            self.send_fallback(message).await;
            return 0;
        }

        info!(
            "Sending notification to {} channel(s): {}",
            self.senders.len(),
            message.title
        );

        let mut delivered = 0;
        for sender in &self.senders {
            match sender.send(message).await {
                Ok(()) => {
                    delivered += 1;
                    info!("Notification sent via {}", sender.channel_type());
                }
                Err(e) => error!(
                    "Failed to send notification via {}: {}",
                    sender.channel_type(),
                    e.format_with_code()
                ),
            }
        }

        if delivered == 0 {
            warn!("All notification channels failed, printing to console");
            self.send_fallback(message).await;
        }

        delivered
    }

    async fn send_fallback(&self, message: &NotificationMessage) {
        if let Err(e) = self.fallback.send(message).await {
            error!("Console fallback failed: {}", e);
        }
    }
}
