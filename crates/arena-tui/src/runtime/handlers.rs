//! Effect handler implementations.
//!
//! Pure async functions: the runtime spawns them and sends the returned
//! event to the inbox. Each performs exactly one screen fetch or mutation.

use std::sync::Arc;

use arena_core::api::ApiClient;
use arena_core::flows::{self, ProfileEdit};
use arena_types::Tournament;

use crate::events::{FetchEvent, MutationEvent, UiEvent};

// ============================================================================
// Home dashboard slices
// ============================================================================

pub async fn home_profile(api: Arc<ApiClient>) -> UiEvent {
    UiEvent::Fetch(FetchEvent::HomeProfile(api.me().await.map(Box::new)))
}

pub async fn home_balance(api: Arc<ApiClient>) -> UiEvent {
    UiEvent::Fetch(FetchEvent::HomeBalance(
        api.wallet().await.map(|w| w.balance),
    ))
}

pub async fn home_joined_count(api: Arc<ApiClient>) -> UiEvent {
    UiEvent::Fetch(FetchEvent::HomeJoinedCount(
        api.my_tournaments().await.map(|list| list.len()),
    ))
}

/// Total winnings: credited transactions whose reason mentions a prize.
pub async fn home_winnings(api: Arc<ApiClient>) -> UiEvent {
    let result = api.transactions(100, Some("credit")).await.map(|list| {
        list.iter()
            .filter(|tx| {
                tx.reason
                    .as_deref()
                    .is_some_and(|r| r.to_lowercase().contains("prize"))
            })
            .map(|tx| tx.amount)
            .sum::<f64>()
    });
    UiEvent::Fetch(FetchEvent::HomeWinnings(result))
}

pub async fn home_banners(api: Arc<ApiClient>) -> UiEvent {
    UiEvent::Fetch(FetchEvent::HomeBanners(api.banners().await))
}

pub async fn home_recent(api: Arc<ApiClient>) -> UiEvent {
    UiEvent::Fetch(FetchEvent::HomeRecent(api.tournaments(None, None).await))
}

// ============================================================================
// Screen fetches
// ============================================================================

pub async fn fetch_tournaments(api: Arc<ApiClient>) -> UiEvent {
    UiEvent::Fetch(FetchEvent::Tournaments(api.tournaments(None, None).await))
}

pub async fn fetch_my_tournaments(api: Arc<ApiClient>) -> UiEvent {
    UiEvent::Fetch(FetchEvent::MyTournaments(api.my_tournaments().await))
}

pub async fn fetch_wallet_balance(api: Arc<ApiClient>) -> UiEvent {
    UiEvent::Fetch(FetchEvent::WalletBalance(
        api.wallet().await.map(|w| w.balance),
    ))
}

pub async fn fetch_transactions(api: Arc<ApiClient>, per_page: u32) -> UiEvent {
    UiEvent::Fetch(FetchEvent::Transactions(
        api.transactions(per_page, None).await,
    ))
}

pub async fn fetch_notifications(api: Arc<ApiClient>, per_page: u32) -> UiEvent {
    UiEvent::Fetch(FetchEvent::Notifications(
        api.notifications(per_page, None).await,
    ))
}

pub async fn fetch_leaderboard(api: Arc<ApiClient>, limit: u32) -> UiEvent {
    UiEvent::Fetch(FetchEvent::Leaderboard(api.leaderboard(limit).await))
}

pub async fn fetch_profile(api: Arc<ApiClient>) -> UiEvent {
    UiEvent::Fetch(FetchEvent::Profile(api.me().await.map(Box::new)))
}

// ============================================================================
// Mutations
// ============================================================================

pub async fn join(api: Arc<ApiClient>, tournament: Box<Tournament>, ign: String) -> UiEvent {
    let result = flows::join_tournament(&api, &tournament, &ign).await;
    UiEvent::Mutation(MutationEvent::JoinCompleted(result))
}

pub async fn mark_notification_read(api: Arc<ApiClient>, id: String) -> UiEvent {
    let result = api.mark_notification_read(&id).await.map(|_| ());
    if let Err(e) = &result {
        tracing::warn!(notification = %id, "mark-as-read failed: {}", e.message);
    }
    UiEvent::Mutation(MutationEvent::NotificationMarked { id, result })
}

pub async fn save_profile(api: Arc<ApiClient>, edit: Box<ProfileEdit>) -> UiEvent {
    let result = flows::save_profile(&api, &edit, None).await.map(Box::new);
    UiEvent::Mutation(MutationEvent::ProfileSaved(result))
}
