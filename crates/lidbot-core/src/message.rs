use serde::{Deserialize, Serialize};

/// One inbound chat message, as handed over by the ingestion loop.
///
/// The classifier only ever sees `raw_text`; the remaining fields feed the
/// notification (title and deep link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub raw_text: String,
    pub chat_title: String,
    pub chat_username: Option<String>,
    pub chat_id: i64,
    pub message_id: i64,
}
