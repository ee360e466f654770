//! Pure row presenters.
//!
//! Maps domain records to display values: formatted currency, formatted
//! dates, status-to-color and button-enablement lookups. Nothing here
//! mutates state; screens pass the derived values straight to render.

use arena_core::format::{format_amount, format_timestamp};
use arena_types::{
    Notification, NotificationKind, Tournament, TournamentStatus, Transaction, TransactionKind,
    TransactionStatus,
};
use ratatui::style::Color;

/// Currency marker shown before amounts.
pub const CURRENCY: &str = "৳";

/// Join control derivation for a tournament row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinControl {
    pub label: &'static str,
    pub enabled: bool,
}

/// Status → join button mapping; a full tournament overrides everything.
pub fn join_control(tournament: &Tournament) -> JoinControl {
    if tournament.is_full() {
        return JoinControl {
            label: "FULL",
            enabled: false,
        };
    }
    match tournament.status_kind() {
        TournamentStatus::Open => JoinControl {
            label: "JOIN NOW",
            enabled: true,
        },
        TournamentStatus::Closed => JoinControl {
            label: "CLOSED",
            enabled: false,
        },
        TournamentStatus::Completed => JoinControl {
            label: "COMPLETED",
            enabled: false,
        },
        TournamentStatus::Other => JoinControl {
            label: "NOT AVAILABLE",
            enabled: false,
        },
    }
}

/// Status → color mapping for tournament rows.
pub fn tournament_status_color(status: TournamentStatus) -> Color {
    match status {
        TournamentStatus::Open => Color::Cyan,
        TournamentStatus::Closed => Color::Green,
        TournamentStatus::Completed => Color::DarkGray,
        TournamentStatus::Other => Color::White,
    }
}

/// Column strings for a tournament row.
pub fn tournament_cells(t: &Tournament) -> [String; 6] {
    [
        t.title.clone(),
        format!("{} · {}", t.game, t.mode),
        t.status.clone(),
        format!("Entry: {CURRENCY}{}", format_amount(t.entry_fee)),
        format!("Prize: {CURRENCY}{}", format_amount(t.prize_pool)),
        format!("{}/{} Players", t.participants_count, t.max_participants),
    ]
}

/// Signed, colored amount for a transaction row: `+৳1,234.50`.
pub fn transaction_amount(tx: &Transaction) -> (String, Color) {
    match tx.kind_parsed() {
        TransactionKind::Credit => (
            format!("+{CURRENCY}{}", format_amount(tx.amount)),
            Color::Green,
        ),
        TransactionKind::Debit | TransactionKind::Other => (
            format!("-{CURRENCY}{}", format_amount(tx.amount.abs())),
            Color::Red,
        ),
    }
}

/// Settlement status cell: uppercase label plus color.
pub fn transaction_status(tx: &Transaction) -> (String, Color) {
    let status = tx.status_parsed();
    let label = tx
        .status
        .as_deref()
        .unwrap_or("completed")
        .to_uppercase();
    let color = match status {
        TransactionStatus::Approved | TransactionStatus::Completed => Color::Green,
        TransactionStatus::Pending => Color::Yellow,
        TransactionStatus::Rejected => Color::Red,
        TransactionStatus::Other => Color::DarkGray,
    };
    (label, color)
}

/// Transaction row: icon, description, date.
pub fn transaction_cells(tx: &Transaction) -> [String; 2] {
    [
        tx.display_description(),
        format_timestamp(tx.created_at.as_deref()),
    ]
}

/// Icon glyph for a notification row.
pub fn notification_icon(n: &Notification) -> &'static str {
    match n.kind_parsed() {
        NotificationKind::Tournament => "⚑",
        NotificationKind::Wallet => "$",
        NotificationKind::General => "•",
    }
}

/// Read rows render dimmed; unread rows at full intensity.
pub fn notification_dimmed(n: &Notification) -> bool {
    n.read
}

/// Notification row strings: title, body, date.
pub fn notification_cells(n: &Notification) -> [String; 3] {
    [
        n.title.clone(),
        n.body.clone().unwrap_or_default(),
        format_timestamp(n.created_at.as_deref()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tournament(status: &str, participants: u32, max: u32) -> Tournament {
        serde_json::from_value(serde_json::json!({
            "id": "5",
            "title": "Night Cup",
            "game": "Free Fire",
            "mode": "Squad",
            "status": status,
            "entry_fee": 50,
            "prize_pool": 500,
            "participants_count": participants,
            "max_participants": max,
        }))
        .unwrap()
    }

    /// An open tournament with seats left renders "50.00" and an enabled
    /// JOIN NOW control.
    #[test]
    fn test_open_tournament_join_control() {
        let t = tournament("Open", 3, 4);
        let control = join_control(&t);
        assert_eq!(control.label, "JOIN NOW");
        assert!(control.enabled);
        assert_eq!(tournament_cells(&t)[3], "Entry: ৳50.00");
    }

    /// Full overrides the status mapping.
    #[test]
    fn test_full_tournament_overrides_status() {
        let t = tournament("Open", 4, 4);
        let control = join_control(&t);
        assert_eq!(control.label, "FULL");
        assert!(!control.enabled);
    }

    #[test]
    fn test_status_button_mapping() {
        assert_eq!(join_control(&tournament("Closed", 0, 4)).label, "CLOSED");
        assert_eq!(
            join_control(&tournament("Completed", 0, 4)).label,
            "COMPLETED"
        );
        assert_eq!(
            join_control(&tournament("Upcoming", 0, 4)).label,
            "NOT AVAILABLE"
        );
        assert!(!join_control(&tournament("Closed", 0, 4)).enabled);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(
            tournament_status_color(TournamentStatus::Open),
            Color::Cyan
        );
        assert_eq!(
            tournament_status_color(TournamentStatus::Completed),
            Color::DarkGray
        );
    }

    #[test]
    fn test_transaction_amount_sign_and_color() {
        let credit: Transaction = serde_json::from_value(serde_json::json!({
            "id": "1", "type": "credit", "amount": 1234.5
        }))
        .unwrap();
        let (text, color) = transaction_amount(&credit);
        assert_eq!(text, "+৳1,234.50");
        assert_eq!(color, Color::Green);

        let debit: Transaction = serde_json::from_value(serde_json::json!({
            "id": "2", "type": "debit", "amount": 50.0, "status": "pending"
        }))
        .unwrap();
        let (text, color) = transaction_amount(&debit);
        assert_eq!(text, "-৳50.00");
        assert_eq!(color, Color::Red);
        assert_eq!(transaction_status(&debit), ("PENDING".to_string(), Color::Yellow));
    }

    #[test]
    fn test_notification_presentation() {
        let unread: Notification = serde_json::from_value(serde_json::json!({
            "id": "1", "title": "Match starting", "type": "tournament", "read": false
        }))
        .unwrap();
        assert_eq!(notification_icon(&unread), "⚑");
        assert!(!notification_dimmed(&unread));

        let read: Notification = serde_json::from_value(serde_json::json!({
            "id": "2", "title": "Deposit approved", "type": "wallet", "read": true
        }))
        .unwrap();
        assert_eq!(notification_icon(&read), "$");
        assert!(notification_dimmed(&read));
    }
}
