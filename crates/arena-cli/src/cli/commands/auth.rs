//! Authentication command handlers.

use anyhow::{Context, Result};

use arena_core::config::Config;
use arena_core::flows;
use arena_core::session::SessionStore;
use arena_types::RegisterRequest;

use super::client;

pub async fn login(
    config: &Config,
    store: &SessionStore,
    identifier: &str,
    password: &str,
) -> Result<()> {
    let api = client(config, store)?;
    let user = flows::login(&api, store, identifier, password)
        .await
        .context("login failed")?;
    println!("Logged in as {}", user.username);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn register(
    config: &Config,
    store: &SessionStore,
    username: String,
    email: String,
    phone: String,
    password: String,
    referral_code: Option<String>,
) -> Result<()> {
    let api = client(config, store)?;
    let request = RegisterRequest {
        username,
        email,
        phone,
        password,
        referral_code,
    };
    let user = flows::register(&api, store, &request)
        .await
        .context("registration failed")?;
    println!("Registered as {}", user.username);
    Ok(())
}

/// Invalidates the server-side token, then clears the local session. The
/// local session is cleared even when the server call fails — the user asked
/// to be logged out.
pub async fn logout(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    if let Err(e) = api.logout().await {
        tracing::warn!("server logout failed: {}", e.message);
    }
    store.clear().context("clear session")?;
    println!("Logged out.");
    Ok(())
}
