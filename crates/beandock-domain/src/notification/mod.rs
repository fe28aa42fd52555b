mod sender;
mod value_objects;

pub use sender::{NotificationMessage, NotificationSender};
pub use value_objects::{ChannelConfig, ChannelType};
