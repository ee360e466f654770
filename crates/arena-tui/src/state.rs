//! Application state composition.
//!
//! Each screen owns its own collection instance; results arriving for a
//! screen the user has navigated away from update that screen's slice only.
//! Collections are replaced wholesale on successful fetches; failures leave
//! prior data in place and surface a status-line message.

use arena_core::config::Config;
use arena_types::{Banner, LeaderboardEntry, Notification, Tournament, Transaction, User};

/// Active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Tournaments,
    MyTournaments,
    Wallet,
    Notifications,
    Leaderboard,
    Profile,
}

impl Screen {
    /// Tab order for the header and number-key switching.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Home,
            Screen::Tournaments,
            Screen::MyTournaments,
            Screen::Wallet,
            Screen::Notifications,
            Screen::Leaderboard,
            Screen::Profile,
        ]
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Tournaments => "Tournaments",
            Screen::MyTournaments => "My Matches",
            Screen::Wallet => "Wallet",
            Screen::Notifications => "Notifications",
            Screen::Leaderboard => "Leaderboard",
            Screen::Profile => "Profile",
        }
    }
}

/// Status line severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line status surface at the bottom of every screen.
#[derive(Debug, Default)]
pub struct StatusLine {
    pub message: Option<(StatusKind, String)>,
}

impl StatusLine {
    pub fn info(&mut self, message: impl Into<String>) {
        self.message = Some((StatusKind::Info, message.into()));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.message = Some((StatusKind::Error, message.into()));
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}

// ============================================================================
// Per-screen state slices
// ============================================================================

/// Home dashboard: profile summary, balance, stats, recent tournaments.
#[derive(Debug, Default)]
pub struct HomeState {
    pub user: Option<User>,
    pub balance: Option<f64>,
    pub joined_count: Option<usize>,
    pub total_winnings: Option<f64>,
    pub banners: Vec<Banner>,
    pub recent: Vec<Tournament>,
    pub loading: bool,
}

/// Join-dialog state while the user types an IGN.
#[derive(Debug)]
pub struct JoinPrompt {
    pub tournament_id: String,
    pub title: String,
    pub ign: String,
    /// Request outstanding; the control is disabled until it resolves.
    pub busy: bool,
}

/// Room-details dialog for tournaments with an assigned room.
#[derive(Debug)]
pub struct RoomInfo {
    pub room_id: String,
    pub room_password: Option<String>,
}

#[derive(Debug, Default)]
pub struct TournamentsState {
    pub items: Vec<Tournament>,
    pub selected: usize,
    pub loading: bool,
    pub join: Option<JoinPrompt>,
    pub room: Option<RoomInfo>,
}

impl TournamentsState {
    pub fn selected_tournament(&self) -> Option<&Tournament> {
        self.items.get(self.selected)
    }
}

#[derive(Debug, Default)]
pub struct MyTournamentsState {
    pub items: Vec<Tournament>,
    pub selected: usize,
    pub loading: bool,
}

#[derive(Debug, Default)]
pub struct WalletState {
    pub balance: Option<f64>,
    pub transactions: Vec<Transaction>,
    pub selected: usize,
    pub loading: bool,
}

#[derive(Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub selected: usize,
    pub loading: bool,
    /// Notification id with a mark-as-read request outstanding.
    pub marking: Option<String>,
}

impl NotificationsState {
    pub fn selected_notification(&self) -> Option<&Notification> {
        self.items.get(self.selected)
    }
}

#[derive(Debug, Default)]
pub struct LeaderboardState {
    pub items: Vec<LeaderboardEntry>,
    pub selected: usize,
    pub loading: bool,
}

/// Profile edit form; present only while editing.
#[derive(Debug, Default)]
pub struct ProfileForm {
    pub field: usize,
    pub full_name: String,
    pub ign: String,
    pub phone: String,
    pub avatar_path: String,
    pub saving: bool,
}

impl ProfileForm {
    pub const FIELDS: usize = 4;

    pub fn from_user(user: &User) -> Self {
        Self {
            field: 0,
            full_name: user.display_name().to_string(),
            ign: user.ign.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
            avatar_path: String::new(),
            saving: false,
        }
    }

    pub fn active_field_mut(&mut self) -> &mut String {
        match self.field {
            0 => &mut self.full_name,
            1 => &mut self.ign,
            2 => &mut self.phone,
            _ => &mut self.avatar_path,
        }
    }
}

#[derive(Debug, Default)]
pub struct ProfileState {
    pub user: Option<User>,
    pub form: Option<ProfileForm>,
    pub loading: bool,
}

// ============================================================================
// AppState
// ============================================================================

/// Combined application state for the TUI.
pub struct AppState {
    pub screen: Screen,
    pub home: HomeState,
    pub tournaments: TournamentsState,
    pub my_tournaments: MyTournamentsState,
    pub wallet: WalletState,
    pub notifications: NotificationsState,
    pub leaderboard: LeaderboardState,
    pub profile: ProfileState,
    pub status: StatusLine,
    pub config: Config,
    /// Display name of the logged-in user (from the session store).
    pub username: Option<String>,
    pub should_quit: bool,
    /// Spinner animation frame counter (for loading indicators).
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(config: Config, username: Option<String>) -> Self {
        Self {
            screen: Screen::Home,
            home: HomeState::default(),
            tournaments: TournamentsState::default(),
            my_tournaments: MyTournamentsState::default(),
            wallet: WalletState::default(),
            notifications: NotificationsState::default(),
            leaderboard: LeaderboardState::default(),
            profile: ProfileState::default(),
            status: StatusLine::default(),
            config,
            username,
            should_quit: false,
            spinner_frame: 0,
        }
    }

    /// True while any request for the active screen is outstanding.
    pub fn active_screen_loading(&self) -> bool {
        match self.screen {
            Screen::Home => self.home.loading,
            Screen::Tournaments => self.tournaments.loading,
            Screen::MyTournaments => self.my_tournaments.loading,
            Screen::Wallet => self.wallet.loading,
            Screen::Notifications => self.notifications.loading,
            Screen::Leaderboard => self.leaderboard.loading,
            Screen::Profile => self.profile.loading,
        }
    }
}
