//! Notification endpoints.

use arena_types::{ApiEnvelope, Notification};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `GET notifications?per_page&priority`
    pub async fn notifications(
        &self,
        per_page: u32,
        priority: Option<&str>,
    ) -> ApiResult<Vec<Notification>> {
        let mut query = vec![("per_page", per_page.to_string())];
        if let Some(priority) = priority {
            query.push(("priority", priority.to_string()));
        }
        let envelope: ApiEnvelope<Vec<Notification>> = self.get("notifications", &query).await?;
        Self::unwrap_data(envelope)
    }

    /// `PUT notifications/{id}/read`
    pub async fn mark_notification_read(&self, id: &str) -> ApiResult<String> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.put_empty(&format!("notifications/{id}/read")).await?;
        Self::unwrap_ack(envelope)
    }

    /// `PUT notifications/read-all`
    pub async fn mark_all_notifications_read(&self) -> ApiResult<String> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.put_empty("notifications/read-all").await?;
        Self::unwrap_ack(envelope)
    }

    /// `GET notifications/unread-count`
    pub async fn unread_notification_count(&self) -> ApiResult<u64> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.get("notifications/unread-count", &[]).await?;
        let data = Self::unwrap_data(envelope)?;
        // The count arrives either bare or wrapped in {"count": n}.
        Ok(data
            .as_u64()
            .or_else(|| data.get("count").and_then(serde_json::Value::as_u64))
            .unwrap_or(0))
    }
}
