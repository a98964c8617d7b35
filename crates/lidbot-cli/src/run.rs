//! The ingestion loop behind `lidbot run`.

use std::time::Duration;

use lidbot_core::AppConfig;
use lidbot_telegram::{load_target_chats, BotClient, ChannelSources, Notifier, UpdatePoller};

use crate::forward::LeadForwarder;

const POLL_ERROR_PAUSE: Duration = Duration::from_secs(5);

/// Polls the monitored chats until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the bot token is missing, the client cannot be
/// built, or no chat could be resolved. Polling and delivery failures are
/// logged and the loop continues.
pub(crate) async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let client = BotClient::with_base_url(
        config.require_bot_token()?,
        config.telegram_request_timeout_secs,
        &config.telegram_api_base_url,
    )?;

    let targets = load_target_chats(&client, &ChannelSources::from_app_config(config)).await;
    if targets.is_empty() {
        anyhow::bail!("no chats to monitor; check GROUPS_FILE and GROUPS_IDS_FILE");
    }

    let notifier = Notifier::new(client.clone(), config.dest_chat_id, config.fallback_chat_id);
    let mut poller = UpdatePoller::from_app_config(client, config);
    let forwarder = LeadForwarder::from_app_config(
        targets,
        crate::build_classifier(config),
        notifier,
        config,
    );

    tracing::info!(
        chats = forwarder.chat_count(),
        window = config.proximity_window,
        language = %config.language,
        "lead monitor started"
    );
    tracing::warn!(
        "the Bot API only delivers updates from chats the bot has joined; \
         group messages also require privacy mode to be disabled in @BotFather"
    );

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            () = &mut shutdown => break,
            batch = poller.next_batch() => match batch {
                Ok(messages) => {
                    for message in messages {
                        forwarder.handle(&message).await;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "polling failed, pausing before next attempt");
                    tokio::time::sleep(POLL_ERROR_PAUSE).await;
                }
            },
        }
    }

    tracing::info!("lead monitor stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, stopping lead monitor");
}
