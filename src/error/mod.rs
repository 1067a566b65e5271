//! Error types for the bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type wrapping infrastructure failures
//! (Discord API, file I/O, serialization, startup configuration), while the
//! domain-specific enums in the submodules describe user-visible flow
//! terminations and carry their own user-facing message mapping.
//!
//! Nothing in this hierarchy is allowed to crash the event loop: interaction
//! handlers catch `AppError` at each step boundary, log it, and convert it to
//! a short user-facing reply.

pub mod config;
pub mod report;
pub mod setup;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates the infrastructure error types that can occur in the bot. Most
/// variants use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// File I/O error from the config store.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// JSON (de)serialization error from the config store.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
