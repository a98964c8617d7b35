mod channels;
mod classify;
mod forward;
mod run;

use clap::{Parser, Subcommand};
use lidbot_filter::{Classifier, Lemmatizer};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lidbot")]
#[command(about = "Forwards car-rental client requests from Telegram chats")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Poll monitored chats and forward detected leads
    Run,
    /// Classify a text, or each stdin line when no text is given
    Classify {
        text: Option<String>,
        /// Proximity window (defaults to PROXIMITY_WINDOW)
        #[arg(long)]
        window: Option<usize>,
        /// Print the deciding rule next to the verdict
        #[arg(long)]
        explain: bool,
    },
    /// Resolve and print the monitored chats
    Channels,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = lidbot_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run => run::run(&config).await?,
        Commands::Classify {
            text,
            window,
            explain,
        } => {
            let classifier = build_classifier(&config);
            let window = window.unwrap_or(config.proximity_window);
            classify::run_classify(&classifier, text.as_deref(), window, explain)?;
        }
        Commands::Channels => channels::run_channels(&config).await?,
    }

    Ok(())
}

fn build_classifier(config: &lidbot_core::AppConfig) -> Classifier {
    let lemmatizer = Lemmatizer::with_cache_capacity(config.lemma_cache_capacity);
    Classifier::for_languages(&config.lexicon_languages, lemmatizer)
}

#[cfg(test)]
mod tests;
