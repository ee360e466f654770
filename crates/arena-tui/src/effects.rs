//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer never performs
//! I/O or spawns tasks directly.

use arena_core::flows::ProfileEdit;
use arena_types::Tournament;

/// Which screen resource to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// All home-dashboard slices (profile, balance, stats, banners, recent).
    Home,
    Tournaments,
    MyTournaments,
    /// Wallet balance plus the transaction listing.
    Wallet,
    Notifications,
    Leaderboard,
    Profile,
}

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch a screen's backing data.
    Fetch(FetchKind),

    /// Issue a join request for a tournament (full-check already passed in
    /// the flow; the reducer disables the control while outstanding).
    Join { tournament: Box<Tournament>, ign: String },

    /// Issue a mark-as-read request for one notification.
    MarkNotificationRead { id: String },

    /// Run the save-profile flow (optional avatar upload, then update).
    SaveProfile(Box<ProfileEdit>),
}
