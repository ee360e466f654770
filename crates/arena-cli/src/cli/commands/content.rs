//! Content command handlers.

use anyhow::{Context, Result};

use arena_core::config::Config;
use arena_core::session::SessionStore;

use super::client;

pub async fn banners(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    let banners = api.banners().await.context("load banners")?;

    if banners.is_empty() {
        println!("No banners.");
        return Ok(());
    }
    for banner in &banners {
        println!(
            "{}  {}  {}",
            banner.id,
            banner.title.clone().unwrap_or_default(),
            banner.image_url,
        );
    }
    Ok(())
}

pub async fn highlights(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    let highlights = api.highlights().await.context("load highlights")?;
    println!("{}", serde_json::to_string_pretty(&highlights)?);
    Ok(())
}

pub async fn videos(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    let videos = api.videos().await.context("load videos")?;
    println!("{}", serde_json::to_string_pretty(&videos)?);
    Ok(())
}

pub async fn setting(config: &Config, store: &SessionStore, key: &str) -> Result<()> {
    let api = client(config, store)?;
    let value = api.settings(key).await.context("load setting")?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
