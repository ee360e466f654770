//! REST client for the arena backend.
//!
//! One async method per server endpoint, grouped in families:
//! authentication, wallet, tournament, content, notification, leaderboard
//! and file upload. Every response body is an [`ApiEnvelope`] whose success
//! flag is authoritative independently of the HTTP status code.

mod auth;
mod content;
mod error;
mod files;
mod leaderboard;
mod notifications;
mod tournaments;
mod wallet;

pub use error::{ApiError, ApiErrorKind, ApiResult};
pub use files::{ProgressFn, ProofKind};

use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

use arena_types::ApiEnvelope;

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::session::Session;

/// REST client holding the HTTP connection pool and the session.
///
/// The session is captured at construction; replacing the stored token
/// requires building a new client, which keeps in-flight requests on the
/// token they started with.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Creates a new client from config and an explicit session.
    ///
    /// # Panics
    /// - In test builds (`#[cfg(test)]`), panics if the resolved base URL is
    ///   the production API.
    /// - At runtime, panics if `ARENA_BLOCK_REAL_API=1` and the resolved
    ///   base URL is the production API.
    ///
    /// This prevents tests from accidentally making real network requests.
    /// Point `ARENA_BASE_URL` at a mock server (e.g. wiremock) instead.
    pub fn new(config: &Config, session: Session) -> Result<Self> {
        let base_url = config.effective_base_url()?;

        #[cfg(test)]
        if base_url == DEFAULT_BASE_URL {
            panic!(
                "Tests must not use the production arena API!\n\
                 Set ARENA_BASE_URL to a mock server (e.g., wiremock).\n\
                 Found base_url: {base_url}"
            );
        }

        #[cfg(not(test))]
        if std::env::var("ARENA_BLOCK_REAL_API").is_ok_and(|v| v == "1")
            && base_url == DEFAULT_BASE_URL
        {
            panic!(
                "ARENA_BLOCK_REAL_API=1 but trying to use the production arena API!\n\
                 Set ARENA_BASE_URL to a mock server.\n\
                 Found base_url: {base_url}"
            );
        }

        let http = reqwest::Client::builder()
            .connect_timeout(config.timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Applies the fixed headers and the bearer token when present.
    fn apply_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request and decodes the envelope.
    ///
    /// HTTP-level failures map through the per-status table; success bodies
    /// that fail to decode are parse errors. The envelope flag is NOT
    /// checked here — callers branch via [`Self::unwrap_data`] /
    /// [`Self::unwrap_ack`].
    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> ApiResult<ApiEnvelope<T>> {
        let request = self.apply_headers(builder);
        let response = request.send().await.map_err(|e| {
            tracing::warn!("transport failure: {e}");
            ApiError::transport(&e)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(&e))?;

        if !status.is_success() {
            tracing::warn!("HTTP {status}: {body}");
            return Err(ApiError::http_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::parse(&e, &body))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<ApiEnvelope<T>> {
        self.send(self.http.get(self.url(path)).query(query)).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<ApiEnvelope<T>> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<ApiEnvelope<T>> {
        self.send(self.http.post(self.url(path))).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<ApiEnvelope<T>> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<ApiEnvelope<T>> {
        self.send(self.http.put(self.url(path))).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<ApiEnvelope<T>> {
        self.send(self.http.delete(self.url(path))).await
    }

    /// Resolves a data-carrying envelope: success=false surfaces the server
    /// message verbatim; a success without data is a parse-level defect.
    fn unwrap_data<T>(envelope: ApiEnvelope<T>) -> ApiResult<T> {
        if !envelope.success {
            return Err(ApiError::api(envelope.message_or_default()));
        }
        envelope.data.ok_or_else(|| {
            ApiError::new(
                ApiErrorKind::Parse,
                "Network error occurred. Please check your connection.",
            )
        })
    }

    /// Resolves an acknowledgement envelope, returning the server message
    /// (possibly empty — callers pick their own success wording).
    fn unwrap_ack<T>(envelope: ApiEnvelope<T>) -> ApiResult<String> {
        if !envelope.success {
            return Err(ApiError::api(envelope.message_or_default()));
        }
        Ok(envelope.message.unwrap_or_default())
    }

    /// `GET health` — backend reachability probe.
    pub async fn health(&self) -> ApiResult<String> {
        let envelope: ApiEnvelope<serde_json::Value> = self.get("health", &[]).await?;
        Self::unwrap_ack(envelope)
    }
}
