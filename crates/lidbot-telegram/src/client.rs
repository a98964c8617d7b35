//! HTTP client for the Telegram Bot API.
//!
//! Every method POSTs a JSON body to `{base}/bot{token}/{method}` and unwraps
//! the `{"ok": .., "result": ..}` envelope. API-level failures surface as
//! [`TelegramError::Api`] with the Bot API error code and description, or as
//! [`TelegramError::FloodControl`] when a 429 carries `retry_after`.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::TelegramError;
use crate::types::{
    ApiResponse, Chat, GetChatRequest, GetUpdatesRequest, Message, SendMessageRequest, Update,
};

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";
const ALLOWED_UPDATES: &[&str] = &["message", "channel_post"];

/// Client for the Bot API.
///
/// Cheap to clone: clones share the underlying connection pool.
#[derive(Clone)]
pub struct BotClient {
    client: Client,
    token: String,
    base_url: String,
}

impl BotClient {
    /// Creates a new client pointed at the production Bot API.
    ///
    /// # Errors
    ///
    /// Returns [`TelegramError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: &str, timeout_secs: u64) -> Result<Self, TelegramError> {
        Self::with_base_url(token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TelegramError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TelegramError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, TelegramError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("lidbot/0.1 (lead-forwarder)")
            .build()?;

        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| TelegramError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url: trimmed.to_owned(),
        })
    }

    /// Looks up a chat by `@username` or numeric id string.
    ///
    /// # Errors
    ///
    /// - [`TelegramError::Api`] if the chat cannot be found or accessed.
    /// - [`TelegramError::Http`] on network failure.
    /// - [`TelegramError::Deserialize`] if the response has an unexpected shape.
    pub async fn get_chat(&self, chat_id: &str) -> Result<Chat, TelegramError> {
        self.call("getChat", &GetChatRequest { chat_id }, None).await
    }

    /// Sends an HTML message with link previews disabled.
    ///
    /// # Errors
    ///
    /// - [`TelegramError::Api`] if the Bot API rejects the message.
    /// - [`TelegramError::Http`] on network failure.
    /// - [`TelegramError::Deserialize`] if the response has an unexpected shape.
    pub async fn send_message(&self, chat_id: i64, html: &str) -> Result<Message, TelegramError> {
        let body = SendMessageRequest {
            chat_id,
            text: html,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        };
        self.call("sendMessage", &body, None).await
    }

    /// Long-polls for new `message` / `channel_post` updates.
    ///
    /// The HTTP timeout is extended by `timeout_secs` so the server can hold
    /// the request open for the whole poll.
    ///
    /// # Errors
    ///
    /// - [`TelegramError::Api`] if the Bot API rejects the poll.
    /// - [`TelegramError::Http`] on network failure or timeout.
    /// - [`TelegramError::Deserialize`] if the response has an unexpected shape.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        let body = GetUpdatesRequest {
            offset,
            timeout: timeout_secs,
            allowed_updates: ALLOWED_UPDATES,
        };
        let extra = Duration::from_secs(timeout_secs + 10);
        self.call("getUpdates", &body, Some(extra)).await
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// POSTs `body` and unwraps the response envelope.
    async fn call<B, T>(
        &self,
        method: &str,
        body: &B,
        timeout: Option<Duration>,
    ) -> Result<T, TelegramError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.client.post(self.method_url(method)).json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let envelope: ApiResponse<T> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(TelegramError::Api {
                    code: i64::from(status.as_u16()),
                    description: truncate(&text, 200),
                });
            }
            Err(e) => {
                return Err(TelegramError::Deserialize {
                    context: method.to_owned(),
                    source: e,
                });
            }
        };

        if !envelope.ok {
            let code = envelope
                .error_code
                .unwrap_or_else(|| i64::from(status.as_u16()));
            let description = envelope
                .description
                .unwrap_or_else(|| "unknown error".to_owned());
            let retry_after = envelope.parameters.and_then(|p| p.retry_after);
            return Err(match retry_after {
                Some(retry_after_secs) if code == 429 => TelegramError::FloodControl {
                    retry_after_secs,
                    description,
                },
                _ => TelegramError::Api { code, description },
            });
        }

        match envelope.result {
            Some(result) => Ok(result),
            // `null` results only appear for unit-returning methods; none are used.
            None => serde_json::from_value(serde_json::Value::Null).map_err(|e| {
                TelegramError::Deserialize {
                    context: method.to_owned(),
                    source: e,
                }
            }),
        }
    }
}

impl std::fmt::Debug for BotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotClient")
            .field("base_url", &self.base_url)
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
