use beandock_domain::notification::NotificationMessage;
use serde_json::json;

impl super::FeishuWebhookSender {
    /// Build a rich text (post) message for Feishu, one paragraph per line
    pub(super) fn build_rich_message(&self, message: &NotificationMessage) -> serde_json::Value {
        let paragraphs: Vec<serde_json::Value> = message
            .content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| json!([{ "tag": "text", "text": line }]))
            .collect();

        json!({
            "msg_type": "post",
            "content": {
                "post": {
                    "zh_cn": {
                        "title": message.title,
                        "content": paragraphs
                    }
                }
            }
        })
    }

    /// Build a simple text message for Feishu (fallback)
    pub(super) fn build_text_message(&self, message: &NotificationMessage) -> serde_json::Value {
        json!({
            "msg_type": "text",
            "content": {
                "text": format!("{}\n{}", message.title, message.content)
            }
        })
    }
}
