//! Full-screen terminal UI for the arena client.
//!
//! Elm-style split: `state` holds per-screen data, `update` is the pure
//! reducer, `effects` are the commands it returns, and `runtime` executes
//! them by spawning API tasks whose results come back through an inbox
//! channel. `rows` derives display values; `render` draws.

pub mod effects;
pub mod events;
pub mod render;
pub mod rows;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use anyhow::Result;
use arena_core::config::Config;
use arena_core::session::SessionStore;

/// Launches the TUI and blocks until the user quits.
pub async fn run(config: Config, store: &SessionStore) -> Result<()> {
    let mut rt = runtime::TuiRuntime::new(config, store)?;
    rt.run().await
}
