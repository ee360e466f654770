//! Backend health probe.

use anyhow::{Context, Result};

use arena_core::config::Config;
use arena_core::session::SessionStore;

use super::client;

pub async fn probe(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    let message = api.health().await.context("backend unreachable")?;
    if message.is_empty() {
        println!("Backend is healthy.");
    } else {
        println!("{message}");
    }
    Ok(())
}
