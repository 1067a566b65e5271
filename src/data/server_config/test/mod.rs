use std::path::PathBuf;

use serenity::all::GuildId;
use tempfile::TempDir;

use crate::data::server_config::ServerConfigStore;
use crate::model::server_config::{GameResultsConfig, ServerConfigs};

mod load;
mod save;

const GUILD: GuildId = GuildId::new(123456789);

fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("server_configs.json")
}

fn sample_configs() -> ServerConfigs {
    let mut configs = ServerConfigs::default();
    configs.set_game_results(
        GUILD,
        GameResultsConfig {
            channel_id: "200".to_string(),
            submitter_role_ids: vec!["11".to_string()],
            participant_role_ids: vec!["22".to_string(), "33".to_string()],
            allowed_role_ids: None,
            win_photo_url: "https://example.com/win.png".to_string(),
            lose_photo_url: "https://example.com/lose.png".to_string(),
        },
    );
    configs
}
