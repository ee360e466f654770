//! Join-tournament flow.

use arena_types::{JoinTournamentRequest, Tournament};

use crate::api::ApiClient;
use crate::validate::validate_ign;

use super::FlowError;

/// Joins a tournament after local checks.
///
/// The full-check runs against the locally held record: a full tournament
/// is rejected without any network I/O. Otherwise exactly one join request
/// is issued; the returned string is the server's success message.
pub async fn join_tournament(
    api: &ApiClient,
    tournament: &Tournament,
    ign: &str,
) -> Result<String, FlowError> {
    validate_ign(ign)?;

    if tournament.is_full() {
        return Err(FlowError::Blocked("Tournament is full".to_string()));
    }

    let request = JoinTournamentRequest {
        ign: ign.trim().to_string(),
    };
    tracing::info!(tournament = %tournament.id, "joining tournament");
    let message = api.join_tournament(&tournament.id, &request).await?;
    Ok(message)
}
