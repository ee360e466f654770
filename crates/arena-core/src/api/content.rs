//! Content endpoints (banners, highlights, videos, settings).

use arena_types::{ApiEnvelope, Banner};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `GET content/banners`
    pub async fn banners(&self) -> ApiResult<Vec<Banner>> {
        let envelope: ApiEnvelope<Vec<Banner>> = self.get("content/banners", &[]).await?;
        Self::unwrap_data(envelope)
    }

    /// `GET content/highlights`
    pub async fn highlights(&self) -> ApiResult<serde_json::Value> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.get("content/highlights", &[]).await?;
        Self::unwrap_data(envelope)
    }

    /// `GET content/videos`
    pub async fn videos(&self) -> ApiResult<serde_json::Value> {
        let envelope: ApiEnvelope<serde_json::Value> = self.get("content/videos", &[]).await?;
        Self::unwrap_data(envelope)
    }

    /// `GET content/settings?key`
    pub async fn settings(&self, key: &str) -> ApiResult<serde_json::Value> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .get("content/settings", &[("key", key.to_string())])
            .await?;
        Self::unwrap_data(envelope)
    }
}
