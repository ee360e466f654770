//! Wire types shared across the arena client.
//!
//! These mirror the backend JSON shapes exactly; the server is authoritative
//! for every field. Display derivations (formatting, colors) live upstream.

pub mod envelope;
pub mod models;
pub mod requests;

pub use envelope::ApiEnvelope;
pub use models::{
    Banner, Game, GameMode, LeaderboardEntry, Notification, NotificationKind, Tournament,
    TournamentStatus, Transaction, TransactionKind, TransactionStatus, TransactionsPage, User,
    Wallet,
};
pub use requests::{
    AuthData, ChangePasswordRequest, DepositRequest, FileUploadData, JoinTournamentRequest,
    LoginRequest, RegisterRequest, UpdateProfileRequest, WithdrawRequest,
};
