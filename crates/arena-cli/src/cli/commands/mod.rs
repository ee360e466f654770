//! Command handlers.

pub mod auth;
pub mod config;
pub mod content;
pub mod health;
pub mod leaderboard;
pub mod notifications;
pub mod profile;
pub mod tournaments;
pub mod upload;
pub mod wallet;

use anyhow::Result;

use arena_core::api::ApiClient;
use arena_core::config::Config;
use arena_core::session::SessionStore;

/// Builds a client bound to the stored session.
pub fn client(config: &Config, store: &SessionStore) -> Result<ApiClient> {
    ApiClient::new(config, store.session())
}
