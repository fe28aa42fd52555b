mod console;
mod dingtalk;
mod feishu;
mod sender_factory;
mod webhook;

pub use console::ConsoleSender;
pub use dingtalk::DingTalkWebhookSender;
pub use feishu::FeishuWebhookSender;
pub use sender_factory::create_sender;
