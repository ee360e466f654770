//! Leaderboard command handler.

use anyhow::{Context, Result};
use comfy_table::Table;

use arena_core::config::Config;
use arena_core::format::format_amount;
use arena_core::session::SessionStore;

use super::client;

pub async fn show(config: &Config, store: &SessionStore, limit: Option<u32>) -> Result<()> {
    let api = client(config, store)?;
    let entries = api
        .leaderboard(limit.unwrap_or(config.leaderboard_limit))
        .await
        .context("load leaderboard")?;

    if entries.is_empty() {
        println!("Leaderboard is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Rank", "Username", "IGN", "Winnings", "Wins"]);
    for entry in &entries {
        table.add_row(vec![
            format!("#{}", entry.rank),
            entry.username.clone(),
            entry.ign.clone().unwrap_or_default(),
            format!("৳{}", format_amount(entry.total_winnings)),
            entry.tournaments_won.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
