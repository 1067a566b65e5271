//! `/report_setup` command handling.
//!
//! Single-shot configuration of game result reporting for a guild, restricted
//! to administrators. Validation happens before anything is written: photo
//! URLs must be http(s), both role lists must contain at least one pure-digit
//! token, and every candidate id is resolved against the guild's role
//! directory. Ids that do not resolve are dropped with a warning as long as
//! at least one id per list survives. The resulting configuration replaces
//! the guild's previous `gameResults` entry wholesale.

use std::collections::HashMap;

use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, Mentionable, ResolvedOption, ResolvedValue, Role, RoleId,
    Timestamp,
};

use crate::bot::command;
use crate::data::server_config::ServerConfigStore;
use crate::error::setup::{RoleListKind, SetupError};
use crate::error::AppError;
use crate::model::server_config::GameResultsConfig;
use crate::service::permission;

const GENERIC_FAILURE: &str =
    "❌ Something went wrong while saving the settings. Try again later.";

/// Raw command inputs, as received from the interaction options.
pub struct SetupInput<'a> {
    pub channel_id: ChannelId,
    pub submitter_roles_text: &'a str,
    pub participant_roles_text: &'a str,
    pub win_photo_url: &'a str,
    pub lose_photo_url: &'a str,
}

impl<'a> SetupInput<'a> {
    /// Extracts the five expected options from a resolved option list.
    pub fn from_options(options: &[ResolvedOption<'a>]) -> Option<Self> {
        let mut channel_id = None;
        let mut submitter_roles_text = None;
        let mut participant_roles_text = None;
        let mut win_photo_url = None;
        let mut lose_photo_url = None;

        for option in options {
            match (option.name, &option.value) {
                ("channel", ResolvedValue::Channel(channel)) => channel_id = Some(channel.id),
                ("submitter_roles", ResolvedValue::String(text)) => {
                    submitter_roles_text = Some(*text)
                }
                ("participant_roles", ResolvedValue::String(text)) => {
                    participant_roles_text = Some(*text)
                }
                ("win_photo", ResolvedValue::String(text)) => win_photo_url = Some(*text),
                ("lose_photo", ResolvedValue::String(text)) => lose_photo_url = Some(*text),
                _ => {}
            }
        }

        Some(Self {
            channel_id: channel_id?,
            submitter_roles_text: submitter_roles_text?,
            participant_roles_text: participant_roles_text?,
            win_photo_url: win_photo_url?,
            lose_photo_url: lose_photo_url?,
        })
    }
}

/// Validation outcome: the config to persist plus resolution details for the
/// confirmation message.
pub struct ValidatedSetup {
    pub config: GameResultsConfig,
    pub submitter_roles: Vec<RoleId>,
    pub participant_roles: Vec<RoleId>,
    pub invalid_submitter_ids: Vec<RoleId>,
    pub invalid_participant_ids: Vec<RoleId>,
}

impl ValidatedSetup {
    /// Warning line listing ids that were dropped, if any were.
    pub fn warning(&self) -> Option<String> {
        if self.invalid_submitter_ids.is_empty() && self.invalid_participant_ids.is_empty() {
            return None;
        }

        let mut parts = Vec::new();
        if !self.invalid_submitter_ids.is_empty() {
            parts.push(format!(
                "submitter roles: {}",
                id_list(&self.invalid_submitter_ids)
            ));
        }
        if !self.invalid_participant_ids.is_empty() {
            parts.push(format!(
                "participant roles: {}",
                id_list(&self.invalid_participant_ids)
            ));
        }
        Some(format!(
            "⚠️ Some role IDs were not found ({}). Continuing with the resolved roles.",
            parts.join("; ")
        ))
    }
}

/// Validates raw setup inputs against the guild's role directory.
pub fn validate(
    input: &SetupInput<'_>,
    guild_roles: &HashMap<RoleId, Role>,
) -> Result<ValidatedSetup, SetupError> {
    if !input.win_photo_url.starts_with("http") || !input.lose_photo_url.starts_with("http") {
        return Err(SetupError::InvalidPhotoUrl);
    }

    let submitter_candidates = parse_role_ids(input.submitter_roles_text);
    if submitter_candidates.is_empty() {
        return Err(SetupError::NoUsableRoleIds(RoleListKind::Submitter));
    }
    let participant_candidates = parse_role_ids(input.participant_roles_text);
    if participant_candidates.is_empty() {
        return Err(SetupError::NoUsableRoleIds(RoleListKind::Participant));
    }

    let (submitter_roles, invalid_submitter_ids) =
        partition_known(&submitter_candidates, guild_roles);
    if submitter_roles.is_empty() {
        return Err(SetupError::NoValidRoles(RoleListKind::Submitter));
    }
    let (participant_roles, invalid_participant_ids) =
        partition_known(&participant_candidates, guild_roles);
    if participant_roles.is_empty() {
        return Err(SetupError::NoValidRoles(RoleListKind::Participant));
    }

    let config = GameResultsConfig {
        channel_id: input.channel_id.to_string(),
        submitter_role_ids: submitter_roles.iter().map(ToString::to_string).collect(),
        participant_role_ids: participant_roles.iter().map(ToString::to_string).collect(),
        allowed_role_ids: None,
        win_photo_url: input.win_photo_url.to_string(),
        lose_photo_url: input.lose_photo_url.to_string(),
    };

    Ok(ValidatedSetup {
        config,
        submitter_roles,
        participant_roles,
        invalid_submitter_ids,
        invalid_participant_ids,
    })
}

/// Parses a comma-separated role-id list.
///
/// Tokens that are not pure digits (or denote the impossible id 0) are
/// silently discarded.
pub fn parse_role_ids(text: &str) -> Vec<RoleId> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|token| token.parse().ok())
        .collect()
}

fn partition_known(
    candidates: &[RoleId],
    guild_roles: &HashMap<RoleId, Role>,
) -> (Vec<RoleId>, Vec<RoleId>) {
    candidates
        .iter()
        .copied()
        .partition(|role_id| guild_roles.contains_key(role_id))
}

fn id_list(ids: &[RoleId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn mention_list(ids: &[RoleId]) -> String {
    ids.iter()
        .map(|id| id.mention().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Service handling the setup command.
pub struct ReportSetup<'a> {
    store: &'a ServerConfigStore,
}

impl<'a> ReportSetup<'a> {
    pub fn new(store: &'a ServerConfigStore) -> Self {
        Self { store }
    }

    /// Handles one `/report_setup` invocation end to end.
    pub async fn handle(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
    ) -> Result<(), AppError> {
        let (Some(guild_id), Some(member)) = (interaction.guild_id, interaction.member.as_deref())
        else {
            return reply(ctx, interaction, "❌ This command can only be used in a server.").await;
        };

        // One role fetch serves both the admin gate and id resolution.
        let guild_roles = match guild_id.roles(&ctx.http).await {
            Ok(roles) => roles,
            Err(e) => {
                tracing::error!("Failed to fetch roles for guild {guild_id}: {e}");
                return reply(ctx, interaction, GENERIC_FAILURE).await;
            }
        };

        if !permission::is_admin(member, &guild_roles) {
            return reply(
                ctx,
                interaction,
                "❌ You need administrator permissions to use this command.",
            )
            .await;
        }

        let options = interaction.data.options();
        let Some(input) = SetupInput::from_options(&options) else {
            return reply(ctx, interaction, "❌ Missing or malformed command options.").await;
        };

        let outcome = match validate(&input, &guild_roles) {
            Ok(outcome) => outcome,
            Err(e) => return reply(ctx, interaction, &e.user_message()).await,
        };

        let mut configs = self.store.load().await;
        configs.set_game_results(guild_id, outcome.config.clone());
        if let Err(e) = self.store.save(&configs).await {
            tracing::error!("Failed to persist reporting settings for guild {guild_id}: {e}");
            return reply(ctx, interaction, GENERIC_FAILURE).await;
        }

        tracing::info!("Updated game result reporting settings for guild {guild_id}");

        let embed = CreateEmbed::new()
            .color(0x00ff00)
            .title("✅ Game result reporting configured")
            .description(format!(
                "Members can now use `/{}` to submit game result reports.",
                command::REPORT
            ))
            .field(
                "📺 Report channel",
                input.channel_id.mention().to_string(),
                true,
            )
            .field(
                "✍️ Submitter roles",
                mention_list(&outcome.submitter_roles),
                false,
            )
            .field(
                "👥 Participant roles",
                mention_list(&outcome.participant_roles),
                false,
            )
            .field("🏆 Win photo", input.win_photo_url, true)
            .field("💀 Lose photo", input.lose_photo_url, true)
            .timestamp(Timestamp::now());

        let mut message = CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(true);
        if let Some(warning) = outcome.warning() {
            message = message.content(warning);
        }
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await?;
        Ok(())
    }
}

/// Ephemeral reply to the setup command.
async fn reply(
    ctx: &Context,
    interaction: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_role;

    fn guild_roles(ids: &[u64]) -> HashMap<RoleId, Role> {
        ids.iter()
            .map(|id| {
                let role = create_test_role(*id, &format!("role-{id}"), 0, 1);
                (role.id, role)
            })
            .collect()
    }

    fn input<'a>(
        submitters: &'a str,
        participants: &'a str,
        win: &'a str,
        lose: &'a str,
    ) -> SetupInput<'a> {
        SetupInput {
            channel_id: ChannelId::new(200),
            submitter_roles_text: submitters,
            participant_roles_text: participants,
            win_photo_url: win,
            lose_photo_url: lose,
        }
    }

    /// Tests the role-id token filter.
    ///
    /// Expected: pure-digit tokens kept, everything else discarded
    #[test]
    fn parses_digit_tokens_only() {
        let ids = parse_role_ids(" 123 , abc, 4d5, , 456,0 ");
        assert_eq!(ids, vec![RoleId::new(123), RoleId::new(456)]);

        assert!(parse_role_ids("abc,def").is_empty());
        assert!(parse_role_ids("").is_empty());
    }

    /// Tests URL scheme validation.
    ///
    /// Expected: non-http URLs rejected before any role processing
    #[test]
    fn rejects_non_http_photo_urls() {
        let roles = guild_roles(&[123, 456]);

        let result = validate(
            &input("123", "456", "ftp://x.png", "https://x.png"),
            &roles,
        );
        assert!(matches!(result, Err(SetupError::InvalidPhotoUrl)));

        let result = validate(
            &input("123", "456", "https://x.png", "https://y.png"),
            &roles,
        );
        assert!(result.is_ok());
    }

    /// Tests rejection of role lists with no usable tokens.
    ///
    /// Expected: NoUsableRoleIds naming the offending list
    #[test]
    fn rejects_lists_without_digit_tokens() {
        let roles = guild_roles(&[123]);

        let result = validate(
            &input("abc,def", "123", "https://x.png", "https://y.png"),
            &roles,
        );
        assert!(matches!(
            result,
            Err(SetupError::NoUsableRoleIds(RoleListKind::Submitter))
        ));
    }

    /// Tests rejection when no candidate resolves against the guild.
    ///
    /// Expected: NoValidRoles naming the offending list
    #[test]
    fn rejects_fully_unresolvable_lists() {
        let roles = guild_roles(&[123]);

        let result = validate(
            &input("123", "999", "https://x.png", "https://y.png"),
            &roles,
        );
        assert!(matches!(
            result,
            Err(SetupError::NoValidRoles(RoleListKind::Participant))
        ));
    }

    /// Tests partial resolution with a warning.
    ///
    /// Expected: valid ids persisted, invalid ids listed in the warning
    #[test]
    fn drops_invalid_ids_with_warning() {
        let roles = guild_roles(&[123, 456]);

        let outcome = validate(
            &input("123,999", "456", "https://x.png", "https://y.png"),
            &roles,
        )
        .unwrap();

        assert_eq!(outcome.submitter_roles, vec![RoleId::new(123)]);
        assert_eq!(outcome.invalid_submitter_ids, vec![RoleId::new(999)]);
        assert_eq!(outcome.config.submitter_role_ids, vec!["123"]);

        let warning = outcome.warning().unwrap();
        assert!(warning.contains("999"));
    }

    /// Tests the persisted config shape after full resolution.
    ///
    /// Expected: channel and both role lists stored as strings, no warning
    #[test]
    fn builds_config_without_warning() {
        let roles = guild_roles(&[123, 456]);

        let outcome = validate(
            &input("123", "456,123", "https://x.png", "https://y.png"),
            &roles,
        )
        .unwrap();

        assert_eq!(outcome.config.channel_id, "200");
        assert_eq!(outcome.config.participant_role_ids, vec!["456", "123"]);
        assert_eq!(outcome.config.win_photo_url, "https://x.png");
        assert!(outcome.warning().is_none());
    }
}
