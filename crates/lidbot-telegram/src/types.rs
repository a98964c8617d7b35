//! Bot API wire types (only the fields LidBot reads).

use lidbot_core::ChatMessage;
use serde::{Deserialize, Serialize};

/// Top-level envelope of every Bot API response.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub error_code: Option<i64>,
    pub description: Option<String>,
    pub parameters: Option<ResponseParameters>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseParameters {
    pub retry_after: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub channel_post: Option<Message>,
}

impl Update {
    /// The fixed-shape record for this update, if it carries a message.
    #[must_use]
    pub fn into_chat_message(self) -> Option<ChatMessage> {
        let message = self.message.or(self.channel_post)?;
        let chat_title = message
            .chat
            .title
            .or(message.chat.first_name)
            .unwrap_or_else(|| "chat".to_owned());
        Some(ChatMessage {
            raw_text: message.text.or(message.caption).unwrap_or_default(),
            chat_title,
            chat_username: message.chat.username,
            chat_id: message.chat.id,
            message_id: message.message_id,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetChatRequest<'a> {
    pub chat_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    pub parse_mode: &'a str,
    pub disable_web_page_preview: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetUpdatesRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: &'a [&'a str],
}
