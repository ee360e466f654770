//! Tournament endpoints.

use arena_types::{ApiEnvelope, Game, JoinTournamentRequest, Tournament};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `GET games`
    pub async fn games(&self) -> ApiResult<Vec<Game>> {
        let envelope: ApiEnvelope<Vec<Game>> = self.get("games", &[]).await?;
        Self::unwrap_data(envelope)
    }

    /// `GET tournaments?mode_id&game_id`
    pub async fn tournaments(
        &self,
        mode_id: Option<u32>,
        game_id: Option<u32>,
    ) -> ApiResult<Vec<Tournament>> {
        let mut query = Vec::new();
        if let Some(mode_id) = mode_id {
            query.push(("mode_id", mode_id.to_string()));
        }
        if let Some(game_id) = game_id {
            query.push(("game_id", game_id.to_string()));
        }
        let envelope: ApiEnvelope<Vec<Tournament>> = self.get("tournaments", &query).await?;
        Self::unwrap_data(envelope)
    }

    /// `POST tournaments/{id}/join`
    pub async fn join_tournament(
        &self,
        id: &str,
        request: &JoinTournamentRequest,
    ) -> ApiResult<String> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .post(&format!("tournaments/{id}/join"), request)
            .await?;
        Self::unwrap_ack(envelope)
    }

    /// `GET tournaments/my` — tournaments the user has joined.
    pub async fn my_tournaments(&self) -> ApiResult<Vec<Tournament>> {
        let envelope: ApiEnvelope<Vec<Tournament>> = self.get("tournaments/my", &[]).await?;
        Self::unwrap_data(envelope)
    }
}
