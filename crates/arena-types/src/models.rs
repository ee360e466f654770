//! Domain records as the backend serves them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Tournament
// ============================================================================

/// A tournament as listed by the backend.
///
/// Participant counts are server-owned; the client never recomputes them.
/// Room credentials appear only once an organizer assigns a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub title: String,
    pub game: String,
    pub mode: String,
    pub status: String,
    #[serde(default)]
    pub entry_fee: f64,
    #[serde(default)]
    pub prize_pool: f64,
    #[serde(default)]
    pub participants_count: u32,
    #[serde(default)]
    pub max_participants: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_password: Option<String>,
    /// Display string derived server-side ("Starts in 2h", etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
}

impl Tournament {
    /// Parsed status for display mapping.
    pub fn status_kind(&self) -> TournamentStatus {
        self.status.parse().unwrap_or(TournamentStatus::Other)
    }

    /// True when no seat is left.
    pub fn is_full(&self) -> bool {
        self.participants_count >= self.max_participants
    }

    /// True once an organizer has assigned a room.
    pub fn has_room(&self) -> bool {
        self.room_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Fixed tournament status set; anything unrecognized maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentStatus {
    Open,
    Closed,
    Completed,
    Other,
}

impl FromStr for TournamentStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Open" => Ok(Self::Open),
            "Closed" => Ok(Self::Closed),
            "Completed" => Ok(Self::Completed),
            other => Err(format!("Unknown tournament status: {other}")),
        }
    }
}

// ============================================================================
// User / Wallet
// ============================================================================

/// The authenticated user's profile.
///
/// `wallet` is the authoritative balance; the denormalized copy some
/// endpoints return is ignored in favor of `wallet_balance()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// In-game name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
}

impl User {
    /// Balance from the nested wallet record, 0.0 when absent.
    pub fn wallet_balance(&self) -> f64 {
        self.wallet.as_ref().map_or(0.0, |w| w.balance)
    }

    /// Name to show in headers: full name when set, username otherwise.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub balance: f64,
}

// ============================================================================
// Transaction
// ============================================================================

/// A wallet ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Transaction {
    pub fn kind_parsed(&self) -> TransactionKind {
        self.kind.parse().unwrap_or(TransactionKind::Other)
    }

    /// Missing status means the backend already settled the entry.
    pub fn status_parsed(&self) -> TransactionStatus {
        self.status
            .as_deref()
            .unwrap_or("completed")
            .parse()
            .unwrap_or(TransactionStatus::Other)
    }

    /// Row label: reason, then description, then a kind-based fallback.
    pub fn display_description(&self) -> String {
        if let Some(reason) = self.reason.as_deref().filter(|r| !r.is_empty()) {
            return reason.to_string();
        }
        if let Some(desc) = self.description.as_deref().filter(|d| !d.is_empty()) {
            return desc.to_string();
        }
        match self.kind_parsed() {
            TransactionKind::Credit => "Money Added".to_string(),
            TransactionKind::Debit => "Money Deducted".to_string(),
            TransactionKind::Other => "Transaction".to_string(),
        }
    }
}

/// Sign of the displayed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Credit,
    Debit,
    Other,
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            other => Err(format!("Unknown transaction type: {other}")),
        }
    }
}

/// Settlement state; selects the display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Other,
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "completed" => Ok(Self::Completed),
            other => Err(format!("Unknown transaction status: {other}")),
        }
    }
}

/// Transaction listing payload (`wallet/transactions`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsPage {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

// ============================================================================
// Notification
// ============================================================================

/// A notification row.
///
/// The read flag is the only field the client mutates, and only after the
/// mark-as-read write succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Notification {
    pub fn kind_parsed(&self) -> NotificationKind {
        self.kind
            .as_deref()
            .unwrap_or("general")
            .parse()
            .unwrap_or(NotificationKind::General)
    }
}

/// Icon class for a notification row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Tournament and organizer announcements.
    Tournament,
    /// Wallet and system events.
    Wallet,
    General,
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tournament" | "admin" => Ok(Self::Tournament),
            "wallet" | "system" => Ok(Self::Wallet),
            "general" => Ok(Self::General),
            other => Err(format!("Unknown notification type: {other}")),
        }
    }
}

// ============================================================================
// Content / leaderboard
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub modes: Vec<GameMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMode {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub total_winnings: f64,
    #[serde(default)]
    pub tournaments_won: u32,
}
