use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_CONFIG_PATH: &str = "server_configs.json";

pub struct Config {
    pub discord_bot_token: String,

    /// Path of the per-guild reporting settings file.
    pub server_config_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            server_config_path: std::env::var("SERVER_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SERVER_CONFIG_PATH)),
        })
    }
}
