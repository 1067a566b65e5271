//! Per-guild settings persistence.
//!
//! This module provides the `ServerConfigStore` for reading and writing the
//! JSON settings file keyed by guild id. Loading is self-healing: a missing,
//! unreadable, or structurally invalid file is replaced with an empty object
//! so the bot always starts, with the bad bytes preserved at a `.corrupt`
//! sibling path for operator recovery. Writing swaps through a `.backup`
//! sibling so a failed write can be rolled back.
//!
//! The store assumes a single writer process; concurrent setup commands on
//! the same file are last-writer-wins.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::AppError;
use crate::model::server_config::ServerConfigs;

/// Store for the per-guild settings file.
pub struct ServerConfigStore {
    path: PathBuf,
}

impl ServerConfigStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all per-guild settings.
    ///
    /// Never fails: a missing file is created containing `{}`, and a file
    /// that cannot be read or parsed is quarantined and reset to `{}`. The
    /// returned configs are empty in both cases.
    pub async fn load(&self) -> ServerConfigs {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "Settings file {} not found, creating a new one",
                    self.path.display()
                );
                return self.reset(false).await;
            }
            Err(e) => {
                tracing::error!("Failed to read settings file {}: {e}", self.path.display());
                return self.reset(true).await;
            }
        };

        match serde_json::from_str(&data) {
            Ok(configs) => configs,
            Err(e) => {
                tracing::error!(
                    "Settings file {} is not a valid settings object, resetting: {e}",
                    self.path.display()
                );
                self.reset(true).await
            }
        }
    }

    /// Saves all per-guild settings.
    ///
    /// An existing file is copied to a `.backup` sibling before the write and
    /// the backup is removed once the write succeeds. If the write fails, the
    /// backup is copied back over the primary path before the error is
    /// returned.
    pub async fn save(&self, configs: &ServerConfigs) -> Result<(), AppError> {
        let backup = self.sibling("backup");
        let had_existing = fs::try_exists(&self.path).await.unwrap_or(false);
        if had_existing {
            fs::copy(&self.path, &backup).await?;
        }

        let json = serde_json::to_string_pretty(configs)?;
        match fs::write(&self.path, json).await {
            Ok(()) => {
                if had_existing {
                    if let Err(e) = fs::remove_file(&backup).await {
                        tracing::warn!(
                            "Failed to remove settings backup {}: {e}",
                            backup.display()
                        );
                    }
                }
                Ok(())
            }
            Err(e) => {
                if had_existing {
                    match fs::copy(&backup, &self.path).await {
                        Ok(_) => tracing::info!("Restored settings backup after failed write"),
                        Err(restore_err) => {
                            tracing::error!("Failed to restore settings backup: {restore_err}");
                        }
                    }
                }
                Err(e.into())
            }
        }
    }

    /// Replaces the settings file with an empty object.
    ///
    /// With `quarantine`, the current file is first copied to a `.corrupt`
    /// sibling so its contents survive the reset.
    async fn reset(&self, quarantine: bool) -> ServerConfigs {
        if quarantine {
            let quarantine_path = self.sibling("corrupt");
            match fs::copy(&self.path, &quarantine_path).await {
                Ok(_) => tracing::warn!(
                    "Preserved unreadable settings file at {}",
                    quarantine_path.display()
                ),
                Err(e) => tracing::warn!("Failed to preserve unreadable settings file: {e}"),
            }
        }

        if let Err(e) = fs::write(&self.path, "{}").await {
            tracing::error!(
                "Failed to create settings file {}: {e}",
                self.path.display()
            );
        }

        ServerConfigs::default()
    }

    fn sibling(&self, extension: &str) -> PathBuf {
        let mut os = self.path.as_os_str().to_owned();
        os.push(".");
        os.push(extension);
        PathBuf::from(os)
    }
}

#[cfg(test)]
mod test;
