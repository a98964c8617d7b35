//! Which chats to monitor.
//!
//! A numeric id cache wins when it yields at least one id. Otherwise the
//! username list is read, cleaned, and resolved one name at a time.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use lidbot_core::AppConfig;
use regex::Regex;
use serde_json::Value;

use crate::client::BotClient;
use crate::error::TelegramError;

static T_ME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?t\.me/([^/\s]+)").expect("valid t.me regex")
});

/// Turns a `@username` into a numeric chat id.
pub trait ChatResolver {
    fn resolve(&self, username: &str) -> impl Future<Output = Result<i64, TelegramError>> + Send;
}

impl ChatResolver for BotClient {
    async fn resolve(&self, username: &str) -> Result<i64, TelegramError> {
        let chat = self.get_chat(&format!("@{username}")).await?;
        Ok(chat.id)
    }
}

/// File locations and switches for chat-source resolution.
#[derive(Debug, Clone)]
pub struct ChannelSources {
    pub ids_file: PathBuf,
    pub usernames_file: PathBuf,
    pub cleaned_file: PathBuf,
    pub auto_write_cleaned: bool,
    /// How many individual resolution failures are logged before going quiet.
    pub max_skip_log: usize,
}

impl ChannelSources {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            ids_file: config.groups_ids_file.clone(),
            usernames_file: config.groups_file.clone(),
            cleaned_file: config.cleaned_usernames_file.clone(),
            auto_write_cleaned: config.auto_write_cleaned,
            max_skip_log: config.max_skip_log,
        }
    }
}

/// Outcome of [`load_target_chats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatTargets {
    pub chat_ids: Vec<i64>,
    /// Usernames that resolved, in input order. Empty when the id cache was used.
    pub resolved_usernames: Vec<String>,
    pub skipped: usize,
    pub skips_logged: usize,
    pub from_cache: bool,
}

impl ChatTargets {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chat_ids.is_empty()
    }

    #[must_use]
    pub fn contains(&self, chat_id: i64) -> bool {
        self.chat_ids.contains(&chat_id)
    }
}

struct SkipLog {
    limit: usize,
    skipped: usize,
    logged: usize,
}

impl SkipLog {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            skipped: 0,
            logged: 0,
        }
    }

    fn record(&mut self, username: &str, err: &TelegramError) {
        self.skipped += 1;
        if self.logged < self.limit {
            self.logged += 1;
            if err.is_chat_not_found() {
                tracing::warn!(username, "skipping chat: not found or bot has no access");
            } else {
                tracing::warn!(username, error = %err, "skipping chat: resolution failed");
            }
        }
    }
}

/// Resolves the set of chats to monitor.
///
/// Never fails: unreadable files and unresolvable names are logged and
/// skipped. An empty result means there is nothing to monitor.
pub async fn load_target_chats<R>(resolver: &R, sources: &ChannelSources) -> ChatTargets
where
    R: ChatResolver + Sync,
{
    if let Some(content) = read_optional(&sources.ids_file).await {
        let ids = parse_id_cache(&content);
        if !ids.is_empty() {
            tracing::info!(
                count = ids.len(),
                path = %sources.ids_file.display(),
                "loaded chat ids from cache"
            );
            return ChatTargets {
                chat_ids: ids,
                from_cache: true,
                ..ChatTargets::default()
            };
        }
    }

    let Some(content) = read_optional(&sources.usernames_file).await else {
        tracing::error!(
            path = %sources.usernames_file.display(),
            "username list is missing and the id cache is empty"
        );
        return ChatTargets::default();
    };

    let usernames: Vec<String> = content.lines().filter_map(extract_username).collect();
    if usernames.is_empty() {
        tracing::error!(
            path = %sources.usernames_file.display(),
            "no usernames listed and no cached ids available"
        );
        return ChatTargets::default();
    }
    tracing::info!(count = usernames.len(), "resolving listed chats");

    let mut skips = SkipLog::new(sources.max_skip_log);
    let mut targets = ChatTargets::default();
    for username in usernames {
        match resolver.resolve(&username).await {
            Ok(id) => {
                targets.chat_ids.push(id);
                targets.resolved_usernames.push(username);
            }
            Err(err) => skips.record(&username, &err),
        }
    }
    targets.skipped = skips.skipped;
    targets.skips_logged = skips.logged;

    if targets.is_empty() {
        tracing::error!(skipped = targets.skipped, "no valid chats to monitor");
        return targets;
    }

    tracing::info!(
        monitoring = targets.chat_ids.len(),
        skipped = targets.skipped,
        "chat targets resolved"
    );
    if targets.skipped > targets.skips_logged {
        tracing::info!(
            unlogged = targets.skipped - targets.skips_logged,
            "additional chats skipped without individual log lines"
        );
    }

    if sources.auto_write_cleaned {
        write_cleaned(&sources.cleaned_file, &targets.resolved_usernames).await;
    }

    targets
}

async fn read_optional(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read chat source file");
            None
        }
    }
}

async fn write_cleaned(path: &Path, usernames: &[String]) {
    let body = usernames
        .iter()
        .map(|name| format!("@{name}"))
        .collect::<Vec<_>>()
        .join("\n");
    match tokio::fs::write(path, body).await {
        Ok(()) => tracing::info!(path = %path.display(), "saved resolved usernames"),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to write resolved usernames");
        }
    }
}

/// Parses the chat id cache.
///
/// Accepts a JSON object with a `channels` map (values are objects with an
/// `id`, or bare ids), a JSON array of ids, or newline-delimited ids where
/// `@` lines are ignored. Ids may be numbers or numeric strings; anything
/// else is skipped.
#[must_use]
pub fn parse_id_cache(content: &str) -> Vec<i64> {
    let content = content.trim();
    if content.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) if map.contains_key("channels") => match &map["channels"] {
            Value::Object(channels) => channels.values().filter_map(entry_id).collect(),
            Value::Array(channels) => channels.iter().filter_map(entry_id).collect(),
            _ => Vec::new(),
        },
        Ok(Value::Array(items)) => items.iter().filter_map(value_to_id).collect(),
        _ => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('@'))
            .filter_map(|line| line.parse().ok())
            .collect(),
    }
}

fn entry_id(entry: &Value) -> Option<i64> {
    match entry {
        Value::Object(fields) => fields.get("id").and_then(value_to_id),
        other => value_to_id(other),
    }
}

fn value_to_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Cleans one line of the username list.
///
/// `t.me/<name>` links are reduced to `<name>`, a leading `@` is stripped,
/// and private `joinchat` invites are dropped.
#[must_use]
pub fn extract_username(line: &str) -> Option<String> {
    let value = line.trim();
    if value.is_empty() {
        return None;
    }
    let value = T_ME_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map_or(value, |m| m.as_str());
    let value = value.trim().trim_start_matches('@');
    if value.is_empty() || value.to_lowercase().contains("joinchat") {
        return None;
    }
    Some(value.to_owned())
}
