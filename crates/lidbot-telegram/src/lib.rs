//! Telegram glue for LidBot: Bot API client, chat-source resolution,
//! notification rendering and delivery, and update polling.

pub mod channels;
pub mod client;
pub mod error;
pub mod notify;
pub mod poll;
pub mod render;
pub mod types;

mod retry;

pub use channels::{
    extract_username, load_target_chats, parse_id_cache, ChannelSources, ChatResolver, ChatTargets,
};
pub use client::BotClient;
pub use error::TelegramError;
pub use notify::{Delivery, Notifier};
pub use poll::UpdatePoller;
pub use render::{build_notification, message_link};
