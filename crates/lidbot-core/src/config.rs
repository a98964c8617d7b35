use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::AppConfig;
use crate::{ConfigError, Language};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// `BOT_TOKEN` is optional here: commands that never reach Telegram (such as
/// `classify`) must start without it. See [`AppConfig::require_bot_token`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional_chat_id = |var: &str| -> Result<Option<i64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => {
                let id = parse_value::<i64>(var, &raw)?;
                // 0 is the historical "unset" marker.
                Ok((id != 0).then_some(id))
            }
            Err(_) => Ok(None),
        }
    };

    let bot_token = lookup("BOT_TOKEN").ok().filter(|t| !t.trim().is_empty());
    let dest_chat_id = optional_chat_id("DEST_CHAT_ID")?;
    let fallback_chat_id = optional_chat_id("FALLBACK_CHAT_ID")?;

    let telegram_api_base_url = or_default("TELEGRAM_API_BASE_URL", "https://api.telegram.org");
    let telegram_request_timeout_secs = parse_value::<u64>(
        "TELEGRAM_REQUEST_TIMEOUT_SECS",
        &or_default("TELEGRAM_REQUEST_TIMEOUT_SECS", "10"),
    )?;
    let telegram_poll_timeout_secs = parse_value::<u64>(
        "TELEGRAM_POLL_TIMEOUT_SECS",
        &or_default("TELEGRAM_POLL_TIMEOUT_SECS", "30"),
    )?;
    let telegram_poll_max_retries = parse_value::<u32>(
        "TELEGRAM_POLL_MAX_RETRIES",
        &or_default("TELEGRAM_POLL_MAX_RETRIES", "3"),
    )?;
    let telegram_poll_backoff_base_ms = parse_value::<u64>(
        "TELEGRAM_POLL_BACKOFF_BASE_MS",
        &or_default("TELEGRAM_POLL_BACKOFF_BASE_MS", "1000"),
    )?;

    let groups_file = PathBuf::from(or_default("GROUPS_FILE", "./data/all_channels.txt"));
    let groups_ids_file =
        PathBuf::from(or_default("GROUPS_IDS_FILE", "./data/channel_ids_cache.txt"));
    let cleaned_usernames_file = PathBuf::from(or_default(
        "CLEANED_USERNAMES_FILE",
        "./data/active_channels_usernames.txt",
    ));
    let auto_write_cleaned = lookup("AUTO_WRITE_CLEANED").map_or(true, |raw| parse_bool(&raw));

    let proximity_window =
        parse_value::<usize>("PROXIMITY_WINDOW", &or_default("PROXIMITY_WINDOW", "3"))?;
    let max_skip_log = parse_value::<usize>("MAX_SKIP_LOG", &or_default("MAX_SKIP_LOG", "50"))?;
    let lemma_cache_capacity = parse_value::<usize>(
        "LEMMA_CACHE_CAPACITY",
        &or_default("LEMMA_CACHE_CAPACITY", "20000"),
    )?;

    let language = parse_value::<Language>("LIDBOT_LANGUAGE", &or_default("LIDBOT_LANGUAGE", "ru"))?;
    let lexicon_languages = parse_languages(&or_default("LIDBOT_LEXICON", "ru,en"))?;
    let log_level = or_default("LIDBOT_LOG_LEVEL", "info");

    Ok(AppConfig {
        bot_token,
        dest_chat_id,
        fallback_chat_id,
        telegram_api_base_url,
        telegram_request_timeout_secs,
        telegram_poll_timeout_secs,
        telegram_poll_max_retries,
        telegram_poll_backoff_base_ms,
        groups_file,
        groups_ids_file,
        cleaned_usernames_file,
        auto_write_cleaned,
        proximity_window,
        max_skip_log,
        lemma_cache_capacity,
        language,
        lexicon_languages,
        log_level,
    })
}

fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Truthy values: `1`, `true`, `yes`, `да`, `on`. Everything else is false.
fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "да" | "on"
    )
}

/// Parse a comma-separated language list, deduplicated in first-seen order.
fn parse_languages(raw: &str) -> Result<Vec<Language>, ConfigError> {
    let mut languages = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let language = parse_value::<Language>("LIDBOT_LEXICON", part)?;
        if !languages.contains(&language) {
            languages.push(language);
        }
    }
    if languages.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "LIDBOT_LEXICON".to_string(),
            reason: "at least one language is required".to_string(),
        });
    }
    Ok(languages)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert!(cfg.bot_token.is_none());
        assert!(cfg.dest_chat_id.is_none());
        assert!(cfg.fallback_chat_id.is_none());
        assert_eq!(cfg.telegram_api_base_url, "https://api.telegram.org");
        assert_eq!(cfg.telegram_request_timeout_secs, 10);
        assert_eq!(cfg.telegram_poll_timeout_secs, 30);
        assert_eq!(cfg.telegram_poll_max_retries, 3);
        assert_eq!(cfg.telegram_poll_backoff_base_ms, 1000);
        assert_eq!(cfg.groups_file, PathBuf::from("./data/all_channels.txt"));
        assert_eq!(
            cfg.groups_ids_file,
            PathBuf::from("./data/channel_ids_cache.txt")
        );
        assert_eq!(
            cfg.cleaned_usernames_file,
            PathBuf::from("./data/active_channels_usernames.txt")
        );
        assert!(cfg.auto_write_cleaned);
        assert_eq!(cfg.proximity_window, 3);
        assert_eq!(cfg.max_skip_log, 50);
        assert_eq!(cfg.lemma_cache_capacity, 20_000);
        assert_eq!(cfg.language, Language::Russian);
        assert_eq!(
            cfg.lexicon_languages,
            vec![Language::Russian, Language::English]
        );
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn require_bot_token_fails_when_unset() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let err = cfg.require_bot_token().unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingEnvVar(ref v) if v == "BOT_TOKEN"),
            "expected MissingEnvVar(BOT_TOKEN), got: {err:?}"
        );
    }

    #[test]
    fn blank_bot_token_counts_as_missing() {
        let mut map = HashMap::new();
        map.insert("BOT_TOKEN", "   ");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.require_bot_token().is_err());
    }

    #[test]
    fn require_bot_token_returns_value() {
        let mut map = HashMap::new();
        map.insert("BOT_TOKEN", "123:abc");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.require_bot_token().unwrap(), "123:abc");
    }

    #[test]
    fn debug_redacts_bot_token() {
        let mut map = HashMap::new();
        map.insert("BOT_TOKEN", "123:super-secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"), "leaked token: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }

    #[test]
    fn dest_chat_id_zero_is_unset() {
        let mut map = HashMap::new();
        map.insert("DEST_CHAT_ID", "0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.dest_chat_id.is_none());
    }

    #[test]
    fn dest_chat_id_parses_negative_ids() {
        let mut map = HashMap::new();
        map.insert("DEST_CHAT_ID", "-1001234567890");
        map.insert("FALLBACK_CHAT_ID", "42");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.dest_chat_id, Some(-1_001_234_567_890));
        assert_eq!(cfg.fallback_chat_id, Some(42));
    }

    #[test]
    fn dest_chat_id_invalid() {
        let mut map = HashMap::new();
        map.insert("DEST_CHAT_ID", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DEST_CHAT_ID"),
            "expected InvalidEnvVar(DEST_CHAT_ID), got: {result:?}"
        );
    }

    #[test]
    fn proximity_window_override() {
        let mut map = HashMap::new();
        map.insert("PROXIMITY_WINDOW", "5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.proximity_window, 5);
    }

    #[test]
    fn proximity_window_rejects_negative() {
        let mut map = HashMap::new();
        map.insert("PROXIMITY_WINDOW", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROXIMITY_WINDOW"),
            "expected InvalidEnvVar(PROXIMITY_WINDOW), got: {result:?}"
        );
    }

    #[test]
    fn max_skip_log_override() {
        let mut map = HashMap::new();
        map.insert("MAX_SKIP_LOG", "7");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.max_skip_log, 7);
    }

    #[test]
    fn max_skip_log_invalid() {
        let mut map = HashMap::new();
        map.insert("MAX_SKIP_LOG", "many");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MAX_SKIP_LOG"),
            "expected InvalidEnvVar(MAX_SKIP_LOG), got: {result:?}"
        );
    }

    #[test]
    fn poll_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("TELEGRAM_POLL_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TELEGRAM_POLL_TIMEOUT_SECS"),
            "expected InvalidEnvVar(TELEGRAM_POLL_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn auto_write_cleaned_truthy_values() {
        for raw in ["1", "true", "YES", "да", "On"] {
            let mut map = HashMap::new();
            map.insert("AUTO_WRITE_CLEANED", raw);
            let cfg = build_app_config(lookup_from_map(&map)).unwrap();
            assert!(cfg.auto_write_cleaned, "{raw} should be truthy");
        }
    }

    #[test]
    fn auto_write_cleaned_falsy_values() {
        for raw in ["0", "false", "no", "off", ""] {
            let mut map = HashMap::new();
            map.insert("AUTO_WRITE_CLEANED", raw);
            let cfg = build_app_config(lookup_from_map(&map)).unwrap();
            assert!(!cfg.auto_write_cleaned, "{raw:?} should be falsy");
        }
    }

    #[test]
    fn language_override() {
        let mut map = HashMap::new();
        map.insert("LIDBOT_LANGUAGE", "en");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.language, Language::English);
    }

    #[test]
    fn language_invalid() {
        let mut map = HashMap::new();
        map.insert("LIDBOT_LANGUAGE", "klingon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LIDBOT_LANGUAGE"),
            "expected InvalidEnvVar(LIDBOT_LANGUAGE), got: {result:?}"
        );
    }

    #[test]
    fn lexicon_languages_deduplicated() {
        let mut map = HashMap::new();
        map.insert("LIDBOT_LEXICON", "en, ru ,en");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.lexicon_languages,
            vec![Language::English, Language::Russian]
        );
    }

    #[test]
    fn lexicon_languages_empty_is_invalid() {
        let mut map = HashMap::new();
        map.insert("LIDBOT_LEXICON", " , ");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LIDBOT_LEXICON"),
            "expected InvalidEnvVar(LIDBOT_LEXICON), got: {result:?}"
        );
    }
}
