//! Authentication endpoints.

use arena_types::{
    ApiEnvelope, AuthData, ChangePasswordRequest, LoginRequest, RegisterRequest,
    UpdateProfileRequest, User,
};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `POST auth/login`
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthData> {
        let envelope: ApiEnvelope<AuthData> = self.post("auth/login", request).await?;
        Self::unwrap_data(envelope)
    }

    /// `POST auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthData> {
        let envelope: ApiEnvelope<AuthData> = self.post("auth/register", request).await?;
        Self::unwrap_data(envelope)
    }

    /// `POST auth/logout` — invalidates the server-side token.
    pub async fn logout(&self) -> ApiResult<String> {
        let envelope: ApiEnvelope<serde_json::Value> = self.post_empty("auth/logout").await?;
        Self::unwrap_ack(envelope)
    }

    /// `GET auth/me`
    pub async fn me(&self) -> ApiResult<User> {
        let envelope: ApiEnvelope<User> = self.get("auth/me", &[]).await?;
        Self::unwrap_data(envelope)
    }

    /// `PUT auth/profile`
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> ApiResult<User> {
        let envelope: ApiEnvelope<User> = self.put("auth/profile", request).await?;
        Self::unwrap_data(envelope)
    }

    /// `PUT auth/password`
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<String> {
        let envelope: ApiEnvelope<serde_json::Value> = self.put("auth/password", request).await?;
        Self::unwrap_ack(envelope)
    }
}
