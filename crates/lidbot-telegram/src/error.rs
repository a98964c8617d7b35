use thiserror::Error;

/// Errors returned by the Telegram glue.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Bot API answered `"ok": false`, or a non-JSON error status.
    #[error("Bot API error {code}: {description}")]
    Api { code: i64, description: String },

    /// HTTP 429 with a server-provided wait.
    #[error("Bot API flood control, retry after {retry_after_secs}s: {description}")]
    FloodControl {
        retry_after_secs: u64,
        description: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Bot API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl TelegramError {
    /// Whether the API reported that the requested chat does not exist.
    #[must_use]
    pub fn is_chat_not_found(&self) -> bool {
        matches!(
            self,
            TelegramError::Api { code: 400, description }
                if description.to_lowercase().contains("chat not found")
        )
    }
}
