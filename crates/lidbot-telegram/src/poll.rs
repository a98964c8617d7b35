//! Long-polling ingestion of chat messages.

use lidbot_core::{AppConfig, ChatMessage};

use crate::client::BotClient;
use crate::error::TelegramError;
use crate::retry::retry_with_backoff;

/// Pulls batches of updates and tracks the confirmation offset.
#[derive(Debug)]
pub struct UpdatePoller {
    client: BotClient,
    offset: Option<i64>,
    timeout_secs: u64,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl UpdatePoller {
    #[must_use]
    pub fn new(client: BotClient, timeout_secs: u64, max_retries: u32, backoff_base_ms: u64) -> Self {
        Self {
            client,
            offset: None,
            timeout_secs,
            max_retries,
            backoff_base_ms,
        }
    }

    #[must_use]
    pub fn from_app_config(client: BotClient, config: &AppConfig) -> Self {
        Self::new(
            client,
            config.telegram_poll_timeout_secs,
            config.telegram_poll_max_retries,
            config.telegram_poll_backoff_base_ms,
        )
    }

    /// The next update id to request, once any batch has been seen.
    #[must_use]
    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    /// Fetches the next batch and advances past it.
    ///
    /// Updates without a message or channel post are confirmed and dropped.
    ///
    /// # Errors
    ///
    /// Returns the last [`TelegramError`] once retries are exhausted, or the
    /// first non-retriable one.
    pub async fn next_batch(&mut self) -> Result<Vec<ChatMessage>, TelegramError> {
        let client = &self.client;
        let offset = self.offset;
        let timeout_secs = self.timeout_secs;
        let updates = retry_with_backoff(self.max_retries, self.backoff_base_ms, move || {
            client.get_updates(offset, timeout_secs)
        })
        .await?;

        if let Some(last) = updates.iter().map(|u| u.update_id).max() {
            self.offset = Some(last + 1);
        }
        tracing::debug!(count = updates.len(), offset = ?self.offset, "updates received");

        Ok(updates
            .into_iter()
            .filter_map(crate::types::Update::into_chat_message)
            .collect())
    }
}
