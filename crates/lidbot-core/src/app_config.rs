use std::path::PathBuf;

use crate::{ConfigError, Language};

#[derive(Clone)]
pub struct AppConfig {
    pub bot_token: Option<String>,
    pub dest_chat_id: Option<i64>,
    pub fallback_chat_id: Option<i64>,
    pub telegram_api_base_url: String,
    pub telegram_request_timeout_secs: u64,
    pub telegram_poll_timeout_secs: u64,
    pub telegram_poll_max_retries: u32,
    pub telegram_poll_backoff_base_ms: u64,
    pub groups_file: PathBuf,
    pub groups_ids_file: PathBuf,
    pub cleaned_usernames_file: PathBuf,
    pub auto_write_cleaned: bool,
    pub proximity_window: usize,
    pub max_skip_log: usize,
    pub lemma_cache_capacity: usize,
    pub language: Language,
    pub lexicon_languages: Vec<Language>,
    pub log_level: String,
}

impl AppConfig {
    /// The Bot API token, required by every command that talks to Telegram.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `BOT_TOKEN` was not set.
    pub fn require_bot_token(&self) -> Result<&str, ConfigError> {
        self.bot_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[redacted]"))
            .field("dest_chat_id", &self.dest_chat_id)
            .field("fallback_chat_id", &self.fallback_chat_id)
            .field("telegram_api_base_url", &self.telegram_api_base_url)
            .field(
                "telegram_request_timeout_secs",
                &self.telegram_request_timeout_secs,
            )
            .field(
                "telegram_poll_timeout_secs",
                &self.telegram_poll_timeout_secs,
            )
            .field("telegram_poll_max_retries", &self.telegram_poll_max_retries)
            .field(
                "telegram_poll_backoff_base_ms",
                &self.telegram_poll_backoff_base_ms,
            )
            .field("groups_file", &self.groups_file)
            .field("groups_ids_file", &self.groups_ids_file)
            .field("cleaned_usernames_file", &self.cleaned_usernames_file)
            .field("auto_write_cleaned", &self.auto_write_cleaned)
            .field("proximity_window", &self.proximity_window)
            .field("max_skip_log", &self.max_skip_log)
            .field("lemma_cache_capacity", &self.lemma_cache_capacity)
            .field("language", &self.language)
            .field("lexicon_languages", &self.lexicon_languages)
            .field("log_level", &self.log_level)
            .finish()
    }
}
