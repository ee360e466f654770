//! Tournament command handlers.

use anyhow::{Context, Result};
use comfy_table::Table;

use arena_core::config::Config;
use arena_core::flows;
use arena_core::format::format_amount;
use arena_core::session::SessionStore;
use arena_types::Tournament;

use super::client;

fn print_tournaments(tournaments: &[Tournament]) {
    if tournaments.is_empty() {
        println!("No tournaments found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        "ID", "Title", "Game", "Mode", "Status", "Entry", "Prize", "Players", "Join",
    ]);
    for t in tournaments {
        let control = join_label(t);
        table.add_row(vec![
            t.id.clone(),
            t.title.clone(),
            t.game.clone(),
            t.mode.clone(),
            t.status.clone(),
            format_amount(t.entry_fee),
            format_amount(t.prize_pool),
            format!("{}/{}", t.participants_count, t.max_participants),
            control.to_string(),
        ]);
    }
    println!("{table}");
}

/// Join-control label, same mapping the TUI rows use.
fn join_label(t: &Tournament) -> &'static str {
    use arena_types::TournamentStatus;
    if t.is_full() {
        return "FULL";
    }
    match t.status_kind() {
        TournamentStatus::Open => "JOIN NOW",
        TournamentStatus::Closed => "CLOSED",
        TournamentStatus::Completed => "COMPLETED",
        TournamentStatus::Other => "NOT AVAILABLE",
    }
}

pub async fn list(
    config: &Config,
    store: &SessionStore,
    mode_id: Option<u32>,
    game_id: Option<u32>,
) -> Result<()> {
    let api = client(config, store)?;
    let tournaments = api
        .tournaments(mode_id, game_id)
        .await
        .context("load tournaments")?;
    print_tournaments(&tournaments);
    Ok(())
}

pub async fn games(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    let games = api.games().await.context("load games")?;

    if games.is_empty() {
        println!("No games found.");
        return Ok(());
    }
    for game in &games {
        let modes: Vec<&str> = game.modes.iter().map(|m| m.name.as_str()).collect();
        println!("{}  {}  [{}]", game.id, game.name, modes.join(", "));
    }
    Ok(())
}

pub async fn my(config: &Config, store: &SessionStore) -> Result<()> {
    let api = client(config, store)?;
    let tournaments = api.my_tournaments().await.context("load joined tournaments")?;
    print_tournaments(&tournaments);
    Ok(())
}

/// Joins by ID: fetches the current listing for the local full-check, then
/// runs the join flow.
pub async fn join(config: &Config, store: &SessionStore, id: &str, ign: &str) -> Result<()> {
    let api = client(config, store)?;
    let tournaments = api.tournaments(None, None).await.context("load tournaments")?;
    let tournament = tournaments
        .iter()
        .find(|t| t.id == id)
        .context("Tournament not found")?;

    let message = flows::join_tournament(&api, tournament, ign)
        .await
        .context("join failed")?;
    if message.is_empty() {
        println!("Successfully joined tournament!");
    } else {
        println!("{message}");
    }
    Ok(())
}
