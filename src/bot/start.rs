use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::data::server_config::ServerConfigStore;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner
///
/// This function creates and starts the Discord bot client. It blocks until
/// the bot shuts down.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    // Create the event handler with access to the settings store
    let handler = Handler::new(ServerConfigStore::new(config.server_config_path.clone()));

    // Build the client
    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
