//! Login and registration flows.

use arena_types::{LoginRequest, RegisterRequest, User};

use crate::api::ApiClient;
use crate::session::{SessionStore, StoredSession};
use crate::validate::{validate_email, validate_password, validate_phone, validate_username};

use super::FlowError;

/// Authenticates and persists the session token.
pub async fn login(
    api: &ApiClient,
    store: &SessionStore,
    identifier: &str,
    password: &str,
) -> Result<User, FlowError> {
    if identifier.trim().is_empty() {
        return Err(FlowError::Blocked("Username or email is required".to_string()));
    }
    validate_password(password)?;

    let request = LoginRequest {
        identifier: identifier.trim().to_string(),
        password: password.to_string(),
    };
    let auth = api.login(&request).await?;

    store
        .save(&StoredSession {
            token: auth.token,
            user_id: Some(auth.user.id.clone()),
            username: Some(auth.user.username.clone()),
        })
        .map_err(|e| FlowError::Blocked(format!("Failed to save session: {e}")))?;

    tracing::info!(user = %auth.user.username, "logged in");
    Ok(auth.user)
}

/// Registers a new account and persists the session token.
pub async fn register(
    api: &ApiClient,
    store: &SessionStore,
    request: &RegisterRequest,
) -> Result<User, FlowError> {
    validate_username(&request.username)?;
    validate_email(&request.email)?;
    validate_phone(&request.phone)?;
    validate_password(&request.password)?;

    let auth = api.register(request).await?;

    store
        .save(&StoredSession {
            token: auth.token,
            user_id: Some(auth.user.id.clone()),
            username: Some(auth.user.username.clone()),
        })
        .map_err(|e| FlowError::Blocked(format!("Failed to save session: {e}")))?;

    tracing::info!(user = %auth.user.username, "registered");
    Ok(auth.user)
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::Config;
    use crate::session::Session;

    use super::*;

    async fn client(server: &MockServer) -> ApiClient {
        let config = Config {
            base_url: server.uri(),
            ..Default::default()
        };
        ApiClient::new(&config, Session::anonymous()).unwrap()
    }

    fn auth_body() -> serde_json::Value {
        serde_json::json!({
            "success": true,
            "data": {
                "token": "tok_abc",
                "user": { "id": "9", "username": "kiran" }
            }
        })
    }

    /// Successful login stores the token for later clients.
    #[tokio::test]
    async fn test_login_persists_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(auth_body()))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        let api = client(&server).await;

        let user = login(&api, &store, "kiran", "secret1").await.unwrap();
        assert_eq!(user.username, "kiran");
        assert_eq!(store.load().unwrap().unwrap().token, "tok_abc");
    }

    /// Short password fails locally; no request is issued, nothing stored.
    #[tokio::test]
    async fn test_login_validates_before_network() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        let api = client(&server).await;

        let err = login(&api, &store, "kiran", "short").await.unwrap_err();
        assert_eq!(err.user_message(), "Password must be at least 6 characters");
        assert!(server.received_requests().await.unwrap().is_empty());
        assert!(store.load().unwrap().is_none());
    }

    /// Register validates every field before the wire.
    #[tokio::test]
    async fn test_register_validates_fields() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        let api = client(&server).await;

        let request = RegisterRequest {
            username: "kiran".to_string(),
            email: "bad-email".to_string(),
            phone: "01712345678".to_string(),
            password: "secret1".to_string(),
            referral_code: None,
        };
        let err = register(&api, &store, &request).await.unwrap_err();
        assert_eq!(err.user_message(), "Please enter a valid email");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    /// Auth failure (401 with body message) surfaces the server message.
    #[tokio::test]
    async fn test_login_http_failure_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Invalid credentials"
            })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        let api = client(&server).await;

        let err = login(&api, &store, "kiran", "secret1").await.unwrap_err();
        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(store.load().unwrap().is_none());
    }
}
