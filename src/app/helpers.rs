//! Async helper functions for persistence

use std::path::PathBuf;

use anyhow::Context;

use crate::features::{RingSnapshot, Settings};

/// Write the ring snapshot and the settings to the config directory
pub async fn persist(snapshot: RingSnapshot, settings: Settings) -> anyhow::Result<()> {
    let snapshot_path = RingSnapshot::file_path().context("Could not determine config directory")?;
    let settings_path = Settings::file_path().context("Could not determine config directory")?;
    save_all(snapshot, settings, snapshot_path, settings_path).await
}

async fn save_all(
    snapshot: RingSnapshot,
    settings: Settings,
    snapshot_path: PathBuf,
    settings_path: PathBuf,
) -> anyhow::Result<()> {
    tracing::info!("Saving ring state to: {}", snapshot_path.display());
    tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        snapshot
            .save_to_file(&snapshot_path)
            .with_context(|| format!("writing {}", snapshot_path.display()))?;
        settings
            .save_to_file(&settings_path)
            .with_context(|| format!("writing {}", settings_path.display()))?;
        Ok(())
    })
    .await?
}
