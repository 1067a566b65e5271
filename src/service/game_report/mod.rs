//! Game result report flow.
//!
//! Drives the five-step report submission: command invocation → category →
//! map → result → players → submit. Each step is triggered by the component
//! the user activated at the previous step; the state a step needs travels
//! inside that component's custom id (see [`flow_tag`]), so the flow keeps no
//! session storage. Config and submitter permission are re-resolved at every
//! gate because roles and settings may change mid-flow.
//!
//! Failure policy: permission denials are delivered as a fresh ephemeral
//! reply, every other termination replaces the in-flight prompt with a short
//! message and clears its components. Errors never propagate past the
//! dispatcher.

pub mod builder;
pub mod catalog;
pub mod flow_tag;
pub mod roster;

use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateActionRow, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    GuildId, Member, Mentionable, UserId,
};

use crate::data::server_config::ServerConfigStore;
use crate::error::report::ReportError;
use crate::error::AppError;
use crate::model::report::{GameReport, GameResult};
use crate::service::permission;

use flow_tag::FlowTag;

const GENERIC_FAILURE: &str = "❌ Something went wrong while processing the report. Try again later.";
const SEND_FAILURE: &str = "❌ Something went wrong while sending the report. Try again later.";

/// Service driving the report submission flow.
pub struct GameReportFlow<'a> {
    store: &'a ServerConfigStore,
}

impl<'a> GameReportFlow<'a> {
    pub fn new(store: &'a ServerConfigStore) -> Self {
        Self { store }
    }

    /// Step 1: `/report` invocation.
    ///
    /// Verifies the guild has reporting configured and the member holds a
    /// submitter role, then presents the category menu. Denials are
    /// ephemeral and end the flow before any prompt is shown.
    pub async fn start(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
    ) -> Result<(), AppError> {
        let (Some(guild_id), Some(member)) = (interaction.guild_id, interaction.member.as_deref())
        else {
            return reply_command(ctx, interaction, "❌ This command can only be used in a server.")
                .await;
        };

        if let Err(denial) = self.submitter_gate(guild_id, member).await {
            return reply_command(ctx, interaction, denial.user_message()).await;
        }

        let message = CreateInteractionResponseMessage::new()
            .content("🎮 **Game result report**\n\nChoose a map category to get started:")
            .components(vec![builder::category_menu()])
            .ephemeral(true);
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await?;
        Ok(())
    }

    /// Dispatches a component interaction to the step its custom id encodes.
    ///
    /// Returns `Ok(false)` for component ids this flow did not produce so
    /// the caller can fall through to other handlers.
    pub async fn handle_component(
        &self,
        ctx: &Context,
        interaction: &ComponentInteraction,
    ) -> Result<bool, AppError> {
        let Some(tag) = FlowTag::parse(&interaction.data.custom_id) else {
            return Ok(false);
        };

        match tag {
            FlowTag::CategorySelect => self.category_chosen(ctx, interaction).await?,
            FlowTag::MapSelect => self.map_chosen(ctx, interaction).await?,
            FlowTag::ResultChoice {
                result,
                category,
                map,
            } => {
                self.result_chosen(ctx, interaction, result, &category, &map)
                    .await?
            }
            FlowTag::PlayersSelect {
                result,
                category,
                map,
            } => {
                self.players_chosen(ctx, interaction, result, &category, &map)
                    .await?
            }
        }
        Ok(true)
    }

    /// Step 2: a category was picked, present its maps.
    async fn category_chosen(
        &self,
        ctx: &Context,
        interaction: &ComponentInteraction,
    ) -> Result<(), AppError> {
        let Some(category) = select_values(interaction).first() else {
            return end_flow(ctx, interaction, GENERIC_FAILURE).await;
        };
        let Some(maps) = catalog::maps_for(category) else {
            return end_flow(ctx, interaction, GENERIC_FAILURE).await;
        };

        next_step(
            ctx,
            interaction,
            format!("🗺️ **Category:** {category}\n\nNow choose the exact map:"),
            builder::map_menu(category, maps),
        )
        .await
    }

    /// Step 3: a map was picked, present the Win/Lose choice.
    async fn map_chosen(
        &self,
        ctx: &Context,
        interaction: &ComponentInteraction,
    ) -> Result<(), AppError> {
        let Some((category, map)) = select_values(interaction)
            .first()
            .and_then(|value| flow_tag::decode_map_choice(value))
        else {
            return end_flow(ctx, interaction, GENERIC_FAILURE).await;
        };

        next_step(
            ctx,
            interaction,
            format!("🎯 **Map:** {map} ({category})\n\nNow pick the game result:"),
            builder::result_buttons(&category, &map),
        )
        .await
    }

    /// Step 4: the result was picked, present the eligible players.
    ///
    /// Config and submitter permission are re-checked here; the member
    /// snapshot is fetched fresh so the roster reflects current roles.
    async fn result_chosen(
        &self,
        ctx: &Context,
        interaction: &ComponentInteraction,
        result: GameResult,
        category: &str,
        map: &str,
    ) -> Result<(), AppError> {
        let (Some(guild_id), Some(member)) = (interaction.guild_id, interaction.member.as_ref())
        else {
            return end_flow(ctx, interaction, GENERIC_FAILURE).await;
        };

        let configs = self.store.load().await;
        let Some(game_results) = configs.game_results(guild_id) else {
            return end_flow(ctx, interaction, ReportError::NotConfigured.user_message()).await;
        };
        if !permission::has_any_role(member, &game_results.submitter_roles()) {
            return reply_component(ctx, interaction, ReportError::NotPermitted.user_message())
                .await;
        }

        let members = match ctx.http.get_guild_members(guild_id, None, None).await {
            Ok(members) => members,
            Err(e) => {
                tracing::error!("Failed to fetch members for guild {guild_id}: {e}");
                return end_flow(ctx, interaction, GENERIC_FAILURE).await;
            }
        };

        let roster = roster::eligible_participants(&members, &game_results.participant_roles());
        if roster.is_empty() {
            return end_flow(
                ctx,
                interaction,
                ReportError::NoEligibleParticipants.user_message(),
            )
            .await;
        }

        next_step(
            ctx,
            interaction,
            format!(
                "🎮 **Result:** {}\n**Map:** {map}\n\nNow select the players who took part:",
                result.label()
            ),
            builder::players_menu(result, category, map, &roster),
        )
        .await
    }

    /// Step 5: players were picked, send the report and confirm.
    async fn players_chosen(
        &self,
        ctx: &Context,
        interaction: &ComponentInteraction,
        result: GameResult,
        category: &str,
        map: &str,
    ) -> Result<(), AppError> {
        let player_ids: Vec<UserId> = select_values(interaction)
            .iter()
            .filter_map(|value| value.parse().ok())
            .collect();
        if player_ids.is_empty() {
            return end_flow(ctx, interaction, ReportError::NoPlayersSelected.user_message()).await;
        }

        let (Some(guild_id), Some(member)) = (interaction.guild_id, interaction.member.as_ref())
        else {
            return end_flow(ctx, interaction, GENERIC_FAILURE).await;
        };

        let configs = self.store.load().await;
        let Some(game_results) = configs.game_results(guild_id) else {
            return end_flow(ctx, interaction, ReportError::NotConfigured.user_message()).await;
        };
        // Roles may have changed since the flow started.
        if !permission::has_any_role(member, &game_results.submitter_roles()) {
            return reply_component(ctx, interaction, ReportError::NotPermitted.user_message())
                .await;
        }

        let Some(channel_id) = game_results.channel() else {
            return end_flow(
                ctx,
                interaction,
                ReportError::ChannelUnavailable(game_results.channel_id.clone()).user_message(),
            )
            .await;
        };
        if let Err(e) = ctx.http.get_channel(channel_id).await {
            tracing::error!("Report channel {channel_id} is not resolvable: {e}");
            return end_flow(
                ctx,
                interaction,
                ReportError::ChannelUnavailable(game_results.channel_id.clone()).user_message(),
            )
            .await;
        }

        let report = GameReport {
            result,
            category: category.to_string(),
            map: map.to_string(),
            players: self.resolve_player_names(ctx, guild_id, &player_ids).await,
            submitted_by: interaction.user.id,
            submitted_at: chrono::Utc::now(),
        };

        let message = CreateMessage::new().embed(builder::report_embed(&report, game_results));
        match channel_id.send_message(&ctx.http, message).await {
            Ok(_) => {
                end_flow(
                    ctx,
                    interaction,
                    &format!(
                        "✅ **Report sent!**\n\n**Map:** {map}\n**Result:** {}\n\
                         **Players:** {}\n**Channel:** {}",
                        result.plain_label(),
                        report.players.len(),
                        channel_id.mention()
                    ),
                )
                .await
            }
            Err(e) => {
                tracing::error!("Failed to send game report to channel {channel_id}: {e}");
                end_flow(ctx, interaction, SEND_FAILURE).await
            }
        }
    }

    /// Shared gate for step 1: configured guild + submitter role.
    async fn submitter_gate(&self, guild_id: GuildId, member: &Member) -> Result<(), ReportError> {
        let configs = self.store.load().await;
        let Some(game_results) = configs.game_results(guild_id) else {
            return Err(ReportError::NotConfigured);
        };
        if !permission::has_any_role(member, &game_results.submitter_roles()) {
            return Err(ReportError::NotPermitted);
        }
        Ok(())
    }

    /// Resolves selected player ids to display names.
    ///
    /// Falls back to `ID: <id>` for members that cannot be resolved.
    async fn resolve_player_names(
        &self,
        ctx: &Context,
        guild_id: GuildId,
        player_ids: &[UserId],
    ) -> Vec<String> {
        let members = match ctx.http.get_guild_members(guild_id, None, None).await {
            Ok(members) => members,
            Err(e) => {
                tracing::warn!("Failed to resolve player names for guild {guild_id}: {e}");
                Vec::new()
            }
        };

        player_ids
            .iter()
            .map(|id| {
                members
                    .iter()
                    .find(|member| member.user.id == *id)
                    .map(|member| member.display_name().to_string())
                    .unwrap_or_else(|| format!("ID: {id}"))
            })
            .collect()
    }
}

/// The selected values of a string select interaction.
fn select_values(interaction: &ComponentInteraction) -> &[String] {
    match &interaction.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values,
        _ => &[],
    }
}

/// Ephemeral reply to a command interaction.
async fn reply_command(
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

/// Ephemeral reply to a component interaction, leaving the prompt as is.
async fn reply_component(
    ctx: &Context,
    interaction: &ComponentInteraction,
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

/// Replaces the prompt with the next step's content and components.
async fn next_step(
    ctx: &Context,
    interaction: &ComponentInteraction,
    content: String,
    row: CreateActionRow,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .components(vec![row]);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(message))
        .await?;
    Ok(())
}

/// Replaces the prompt with a terminal message and clears its components.
async fn end_flow(
    ctx: &Context,
    interaction: &ComponentInteraction,
    content: &str,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .components(vec![]);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(message))
        .await?;
    Ok(())
}
