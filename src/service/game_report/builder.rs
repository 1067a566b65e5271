//! Prompt and report message builders.
//!
//! Pure construction of the Discord UI for each flow step and of the final
//! report embed. Nothing here talks to the API, so every builder can be
//! asserted on through its serialized form.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption, Mentionable, ReactionType, Timestamp,
};

use crate::model::report::{GameReport, GameResult};
use crate::model::server_config::GameResultsConfig;

use super::catalog;
use super::flow_tag::{self, FlowTag};
use super::roster::{self, RosterEntry};

/// Select menu over the map categories.
pub fn category_menu() -> CreateActionRow {
    let options: Vec<CreateSelectMenuOption> = catalog::MAP_CATEGORIES
        .iter()
        .map(|(name, maps)| {
            CreateSelectMenuOption::new(*name, *name).description(format!("{} maps", maps.len()))
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            FlowTag::CategorySelect.custom_id(),
            CreateSelectMenuKind::String {
                options: options.into(),
            },
        )
        .placeholder("Choose a map category"),
    )
}

/// Select menu over one category's maps.
///
/// Option descriptions carry the 1-based display position.
pub fn map_menu(category: &str, maps: &[&str]) -> CreateActionRow {
    let options: Vec<CreateSelectMenuOption> = maps
        .iter()
        .enumerate()
        .map(|(index, map)| {
            CreateSelectMenuOption::new(*map, flow_tag::encode_map_choice(category, map))
                .description(format!("Map {}", index + 1))
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            FlowTag::MapSelect.custom_id(),
            CreateSelectMenuKind::String {
                options: options.into(),
            },
        )
        .placeholder(format!("Choose a map from \"{category}\"")),
    )
}

/// Win/Lose button pair for a chosen map.
pub fn result_buttons(category: &str, map: &str) -> CreateActionRow {
    let button = |result: GameResult, style: ButtonStyle| {
        CreateButton::new(
            FlowTag::ResultChoice {
                result,
                category: category.to_string(),
                map: map.to_string(),
            }
            .custom_id(),
        )
        .label(result.label())
        .style(style)
    };

    CreateActionRow::Buttons(vec![
        button(GameResult::Win, ButtonStyle::Success),
        button(GameResult::Lose, ButtonStyle::Danger),
    ])
}

/// Player multi-select over the eligible roster.
pub fn players_menu(
    result: GameResult,
    category: &str,
    map: &str,
    entries: &[RosterEntry],
) -> CreateActionRow {
    let options: Vec<CreateSelectMenuOption> = entries
        .iter()
        .map(|entry| {
            CreateSelectMenuOption::new(entry.display_name.clone(), entry.user_id.to_string())
                .description(format!("@{}", entry.username))
                .emoji(ReactionType::from('👤'))
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            FlowTag::PlayersSelect {
                result,
                category: category.to_string(),
                map: map.to_string(),
            }
            .custom_id(),
            CreateSelectMenuKind::String {
                options: options.into(),
            },
        )
        .placeholder("Select the players who took part (multiple allowed)")
        .min_values(1)
        .max_values(roster::max_selectable(entries.len()) as u8),
    )
}

/// The report message embed posted to the configured channel.
pub fn report_embed(report: &GameReport, config: &GameResultsConfig) -> CreateEmbed {
    let players = report
        .players
        .iter()
        .map(|name| format!("• {name}"))
        .collect::<Vec<_>>()
        .join("\n");

    CreateEmbed::new()
        .color(report.result.color())
        .title(format!("🎮 Game result on {}", report.map))
        .description(format!("**Result:** {}", report.result.label()))
        .field("👥 Participants", players, false)
        .field("🗺️ Map", format!("{} ({})", report.map, report.category), true)
        .field(
            "📅 Date",
            format!("<t:{}:f>", report.submitted_at.timestamp()),
            true,
        )
        .field(
            "📝 Reported by",
            report.submitted_by.mention().to_string(),
            true,
        )
        .image(config.photo_url(report.result))
        .footer(CreateEmbedFooter::new("Game result report"))
        .timestamp(Timestamp::from_unix_timestamp(report.submitted_at.timestamp()).unwrap())
}
