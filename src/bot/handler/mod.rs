use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::data::server_config::ServerConfigStore;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub store: ServerConfigStore,
}

impl Handler {
    pub fn new(store: ServerConfigStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called for every slash command or message component interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.store, ctx, interaction).await;
    }
}
