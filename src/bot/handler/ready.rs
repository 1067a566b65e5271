//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot
//! successfully connects to Discord's gateway and completes the initial
//! handshake. The handler logs connection information and registers the
//! application commands so the slash command surface is always in sync with
//! this build.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the global application commands after logging the connection.
/// Registration failures are logged but do not stop the bot: already
/// registered commands from a previous run keep working.
///
/// # Arguments
/// - `ctx` - Discord context for HTTP access
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::all()).await {
        Ok(commands) => tracing::info!("Registered {} application commands", commands.len()),
        Err(e) => tracing::error!("Failed to register application commands: {e}"),
    }
}
