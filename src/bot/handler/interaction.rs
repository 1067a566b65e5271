//! Interaction dispatch.
//!
//! Routes incoming slash commands and message components to the services.
//! Every error is caught and logged here; the gateway task never sees a
//! failure. Component custom ids the report flow does not recognize are
//! ignored, so other modules could claim them later.

use serenity::all::{CommandInteraction, ComponentInteraction, Context, Interaction};

use crate::bot::command::{REPORT, REPORT_SETUP};
use crate::data::server_config::ServerConfigStore;
use crate::service::game_report::GameReportFlow;
use crate::service::report_setup::ReportSetup;

/// Entry point for all interaction events.
pub async fn handle_interaction(store: &ServerConfigStore, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(store, &ctx, &command).await,
        Interaction::Component(component) => handle_component(store, &ctx, &component).await,
        _ => {}
    }
}

async fn handle_command(store: &ServerConfigStore, ctx: &Context, command: &CommandInteraction) {
    let result = match command.data.name.as_str() {
        REPORT => GameReportFlow::new(store).start(ctx, command).await,
        REPORT_SETUP => ReportSetup::new(store).handle(ctx, command).await,
        name => {
            tracing::warn!("Received unknown command /{name}");
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!("Failed to handle /{}: {e}", command.data.name);
    }
}

async fn handle_component(
    store: &ServerConfigStore,
    ctx: &Context,
    component: &ComponentInteraction,
) {
    match GameReportFlow::new(store)
        .handle_component(ctx, component)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!("Ignoring unrecognized component {}", component.data.custom_id)
        }
        Err(e) => tracing::error!(
            "Failed to handle component {}: {e}",
            component.data.custom_id
        ),
    }
}
