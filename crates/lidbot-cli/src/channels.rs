use lidbot_core::AppConfig;
use lidbot_telegram::{load_target_chats, BotClient, ChannelSources};

/// Resolves the monitored chats and prints one per line.
///
/// # Errors
///
/// Returns an error if the bot token is missing or the client cannot be built.
pub(crate) async fn run_channels(config: &AppConfig) -> anyhow::Result<()> {
    let client = BotClient::with_base_url(
        config.require_bot_token()?,
        config.telegram_request_timeout_secs,
        &config.telegram_api_base_url,
    )?;
    let targets = load_target_chats(&client, &ChannelSources::from_app_config(config)).await;

    if targets.is_empty() {
        println!("no chats to monitor");
        return Ok(());
    }

    let source = if targets.from_cache { "id cache" } else { "username list" };
    println!("{} chats from {source}, {} skipped", targets.chat_ids.len(), targets.skipped);
    if targets.from_cache {
        for id in &targets.chat_ids {
            println!("{id}");
        }
    } else {
        for (id, username) in targets.chat_ids.iter().zip(&targets.resolved_usernames) {
            println!("{id:<16}@{username}");
        }
    }
    Ok(())
}
