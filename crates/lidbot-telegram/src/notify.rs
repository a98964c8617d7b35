//! Lead delivery with a fallback chain.

use crate::client::BotClient;

/// Where a notification ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Primary,
    Fallback,
    /// Neither chat accepted it; the payload went to the log.
    Logged,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    client: BotClient,
    dest_chat_id: Option<i64>,
    fallback_chat_id: Option<i64>,
}

impl Notifier {
    #[must_use]
    pub fn new(client: BotClient, dest_chat_id: Option<i64>, fallback_chat_id: Option<i64>) -> Self {
        Self {
            client,
            dest_chat_id,
            fallback_chat_id,
        }
    }

    /// Sends `html` to the destination chat, then the fallback chat, and
    /// finally logs it at `warn`. Never fails.
    pub async fn notify(&self, html: &str) -> Delivery {
        if let Some(chat_id) = self.dest_chat_id {
            match self.client.send_message(chat_id, html).await {
                Ok(_) => return Delivery::Primary,
                Err(e) => tracing::warn!(chat_id, error = %e, "lead delivery to destination chat failed"),
            }
        }

        if let Some(chat_id) = self.fallback_chat_id {
            match self.client.send_message(chat_id, html).await {
                Ok(_) => return Delivery::Fallback,
                Err(e) => tracing::warn!(chat_id, error = %e, "lead delivery to fallback chat failed"),
            }
        }

        tracing::warn!(payload = html, "lead not delivered to any chat");
        Delivery::Logged
    }
}
