//! Slash command definitions.
//!
//! The two application commands this bot registers. Names are matched
//! against incoming command interactions in the dispatcher, so they live
//! here as constants.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

pub const REPORT: &str = "report";
pub const REPORT_SETUP: &str = "report_setup";

/// All commands to register on startup.
pub fn all() -> Vec<CreateCommand> {
    vec![report(), report_setup()]
}

fn report() -> CreateCommand {
    CreateCommand::new(REPORT).description("Report a game result on a map")
}

fn report_setup() -> CreateCommand {
    CreateCommand::new(REPORT_SETUP)
        .description("Configure game result reporting (administrators only)")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel where reports are posted",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "submitter_roles",
                "Role IDs allowed to submit reports (comma-separated)",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "participant_roles",
                "Role IDs eligible as participants (comma-separated)",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "win_photo", "Image URL for wins")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "lose_photo",
                "Image URL for losses",
            )
            .required(true),
        )
}
