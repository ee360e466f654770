//! Image upload command handlers.

use std::path::Path;

use anyhow::{Context, Result};

use arena_core::api::ProofKind;
use arena_core::config::Config;
use arena_core::flows;
use arena_core::session::SessionStore;

use super::client;
use super::profile::progress_bar;

pub async fn proof(
    config: &Config,
    store: &SessionStore,
    tournament_id: &str,
    path: &Path,
    kind: &str,
) -> Result<()> {
    let kind: ProofKind = kind
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("invalid --kind")?;

    let api = client(config, store)?;
    let url = flows::upload_proof(&api, tournament_id, path, kind, Some(progress_bar()))
        .await
        .context("proof upload failed")?;

    println!("Image uploaded successfully!");
    println!("{url}");
    Ok(())
}
