//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here; the reducer stays pure and produces
//! effects. Async API calls are spawned as tokio tasks that send their
//! result events into an inbox channel the loop drains every frame — no
//! per-operation receivers, and no cancellation on screen switches: a
//! result arriving late still lands in its owning screen slice.

mod handlers;

use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use arena_core::api::ApiClient;
use arena_core::config::Config;
use arena_core::session::SessionStore;

use crate::effects::{FetchKind, UiEffect};
use crate::events::UiEvent;
use crate::state::{AppState, Screen};
use crate::{render, terminal, update};

/// Poll timeout per loop iteration; doubles as the spinner tick rate.
const POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and on
/// panic via the installed hook.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    api: Arc<ApiClient>,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
}

impl TuiRuntime {
    /// Creates a new TUI runtime with a client bound to the stored session.
    pub fn new(config: Config, store: &SessionStore) -> Result<Self> {
        let session = store.session();
        let username = store
            .load()
            .ok()
            .flatten()
            .and_then(|stored| stored.username);
        let api = Arc::new(
            ApiClient::new(&config, session).context("Failed to create API client")?,
        );

        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config, username);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            api,
            inbox_tx,
            inbox_rx,
        })
    }

    /// Runs the main event loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        // Initial activation fetches the home dashboard.
        let effects = update::activate(&mut self.state, Screen::Home);
        self.execute_effects(effects);

        let result = self.event_loop().await;
        terminal::restore_terminal()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        loop {
            self.terminal
                .draw(|frame| render::draw(frame, &self.state))
                .context("Failed to draw frame")?;

            let mut events = Vec::new();

            // Terminal input (blocking poll with a short timeout keeps the
            // spinner animated while idle).
            if event::poll(POLL_DURATION).context("Failed to poll terminal events")? {
                events.push(UiEvent::Terminal(
                    event::read().context("Failed to read terminal event")?,
                ));
            } else {
                events.push(UiEvent::Tick);
            }

            // Drain async results in arrival order (last response wins).
            while let Ok(event) = self.inbox_rx.try_recv() {
                events.push(event);
            }

            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if self.state.should_quit {
                return Ok(());
            }
        }
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::Fetch(kind) => self.spawn_fetch(kind),
            UiEffect::Join { tournament, ign } => {
                self.spawn(handlers::join(Arc::clone(&self.api), tournament, ign));
            }
            UiEffect::MarkNotificationRead { id } => {
                self.spawn(handlers::mark_notification_read(
                    Arc::clone(&self.api),
                    id,
                ));
            }
            UiEffect::SaveProfile(edit) => {
                self.spawn(handlers::save_profile(Arc::clone(&self.api), edit));
            }
        }
    }

    fn spawn_fetch(&mut self, kind: FetchKind) {
        let api = Arc::clone(&self.api);
        let per_page = self.state.config.per_page;
        let limit = self.state.config.leaderboard_limit;
        match kind {
            FetchKind::Home => {
                // The dashboard fans out; each slice reports independently.
                self.spawn(handlers::home_profile(Arc::clone(&api)));
                self.spawn(handlers::home_balance(Arc::clone(&api)));
                self.spawn(handlers::home_joined_count(Arc::clone(&api)));
                self.spawn(handlers::home_winnings(Arc::clone(&api)));
                self.spawn(handlers::home_banners(Arc::clone(&api)));
                self.spawn(handlers::home_recent(api));
            }
            FetchKind::Tournaments => self.spawn(handlers::fetch_tournaments(api)),
            FetchKind::MyTournaments => self.spawn(handlers::fetch_my_tournaments(api)),
            FetchKind::Wallet => {
                self.spawn(handlers::fetch_wallet_balance(Arc::clone(&api)));
                self.spawn(handlers::fetch_transactions(api, per_page));
            }
            FetchKind::Notifications => {
                self.spawn(handlers::fetch_notifications(api, per_page));
            }
            FetchKind::Leaderboard => self.spawn(handlers::fetch_leaderboard(api, limit)),
            FetchKind::Profile => self.spawn(handlers::fetch_profile(api)),
        }
    }

    fn spawn(&self, task: impl Future<Output = UiEvent> + Send + 'static) {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            // The receiver only drops on shutdown; a late result is discarded.
            let _ = tx.send(task.await);
        });
    }
}
