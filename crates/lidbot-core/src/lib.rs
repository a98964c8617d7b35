//! Shared types and configuration for LidBot.

mod app_config;
mod config;
mod language;
mod message;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use language::Language;
pub use message::ChatMessage;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
