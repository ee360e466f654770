//! Leaderboard endpoint.

use arena_types::{ApiEnvelope, LeaderboardEntry};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `GET leaderboard?limit`
    pub async fn leaderboard(&self, limit: u32) -> ApiResult<Vec<LeaderboardEntry>> {
        let envelope: ApiEnvelope<Vec<LeaderboardEntry>> = self
            .get("leaderboard", &[("limit", limit.to_string())])
            .await?;
        Self::unwrap_data(envelope)
    }
}
