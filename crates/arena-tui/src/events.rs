//! UI event types.
//!
//! All external inputs (terminal, fetch results, mutation results) are
//! converted to [`UiEvent`] before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async operations send events directly to the runtime's inbox; the
//! runtime drains it each frame. Results arrive as separate events, in
//! network arrival order — when two refreshes race, the last response to
//! arrive wins.

use arena_core::api::ApiError;
use arena_core::flows::FlowError;
use arena_types::{Banner, LeaderboardEntry, Notification, Tournament, Transaction, User};
use crossterm::event::Event as CrosstermEvent;

/// Fetch results, one variant per screen resource.
///
/// Every payload is a `Result`: `Ok` replaces the owning screen's
/// collection, `Err` leaves prior data in place and surfaces the message.
#[derive(Debug)]
pub enum FetchEvent {
    // Home dashboard slices (the home screen owns separate copies).
    HomeProfile(Result<Box<User>, ApiError>),
    HomeBalance(Result<f64, ApiError>),
    HomeJoinedCount(Result<usize, ApiError>),
    HomeWinnings(Result<f64, ApiError>),
    HomeBanners(Result<Vec<Banner>, ApiError>),
    HomeRecent(Result<Vec<Tournament>, ApiError>),

    Tournaments(Result<Vec<Tournament>, ApiError>),
    MyTournaments(Result<Vec<Tournament>, ApiError>),
    WalletBalance(Result<f64, ApiError>),
    Transactions(Result<Vec<Transaction>, ApiError>),
    Notifications(Result<Vec<Notification>, ApiError>),
    Leaderboard(Result<Vec<LeaderboardEntry>, ApiError>),
    Profile(Result<Box<User>, ApiError>),
}

/// Mutation results.
#[derive(Debug)]
pub enum MutationEvent {
    /// Join request resolved; `Ok` carries the server message.
    JoinCompleted(Result<String, FlowError>),
    /// Mark-as-read resolved for one notification.
    NotificationMarked {
        id: String,
        result: Result<(), ApiError>,
    },
    /// Profile save resolved; `Ok` carries the updated user.
    ProfileSaved(Result<Box<User>, FlowError>),
}

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (spinner animation).
    Tick,
    /// Terminal input event (key, resize, paste).
    Terminal(CrosstermEvent),
    /// Async fetch result.
    Fetch(FetchEvent),
    /// Async mutation result.
    Mutation(MutationEvent),
}
