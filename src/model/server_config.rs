//! Per-guild reporting configuration models.
//!
//! These structs mirror the on-disk JSON format of the settings file: a
//! top-level object keyed by guild id, each value optionally carrying a
//! `gameResults` object. Field names stay camelCase on disk, so files written
//! by earlier deployments keep loading unchanged. Unknown sibling keys inside
//! a guild entry are preserved across load/modify/save round-trips.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serenity::all::{ChannelId, GuildId, RoleId};

use crate::model::report::GameResult;

/// All per-guild settings, keyed by guild id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfigs(HashMap<String, ServerEntry>);

impl ServerConfigs {
    /// Returns the reporting configuration for a guild, if any.
    pub fn game_results(&self, guild_id: GuildId) -> Option<&GameResultsConfig> {
        self.0
            .get(&guild_id.to_string())
            .and_then(|entry| entry.game_results.as_ref())
    }

    /// Replaces the guild's reporting configuration wholesale.
    ///
    /// Other keys stored under the same guild entry are left untouched.
    pub fn set_game_results(&mut self, guild_id: GuildId, config: GameResultsConfig) {
        self.0.entry(guild_id.to_string()).or_default().game_results = Some(config);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One guild's settings object.
///
/// The flattened map keeps any keys this bot does not know about, so saving
/// the file never drops data written by other tooling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    #[serde(rename = "gameResults", skip_serializing_if = "Option::is_none")]
    pub game_results: Option<GameResultsConfig>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Game result reporting settings for a single guild.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResultsConfig {
    /// Destination channel for report messages.
    pub channel_id: String,

    /// Roles allowed to submit reports.
    #[serde(default)]
    pub submitter_role_ids: Vec<String>,

    /// Roles whose holders are listed as selectable participants.
    #[serde(default)]
    pub participant_role_ids: Vec<String>,

    /// Single role list written by pre-split deployments, used as a fallback
    /// when the specific list above is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_role_ids: Option<Vec<String>>,

    pub win_photo_url: String,
    pub lose_photo_url: String,
}

impl GameResultsConfig {
    /// Role ids permitted to submit reports, as typed ids.
    ///
    /// Tokens that do not parse as snowflakes are skipped.
    pub fn submitter_roles(&self) -> Vec<RoleId> {
        parse_roles(self.pick(&self.submitter_role_ids))
    }

    /// Role ids whose holders are eligible participants, as typed ids.
    pub fn participant_roles(&self) -> Vec<RoleId> {
        parse_roles(self.pick(&self.participant_role_ids))
    }

    /// The configured destination channel, if its id parses as a snowflake.
    pub fn channel(&self) -> Option<ChannelId> {
        self.channel_id.parse().ok()
    }

    /// The result image matching a game outcome.
    pub fn photo_url(&self, result: GameResult) -> &str {
        match result {
            GameResult::Win => &self.win_photo_url,
            GameResult::Lose => &self.lose_photo_url,
        }
    }

    fn pick<'a>(&'a self, specific: &'a [String]) -> &'a [String] {
        if specific.is_empty() {
            self.allowed_role_ids.as_deref().unwrap_or(&[])
        } else {
            specific
        }
    }
}

fn parse_roles(ids: &[String]) -> Vec<RoleId> {
    ids.iter().filter_map(|id| id.parse().ok()).collect()
}
