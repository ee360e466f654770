//! API error taxonomy.
//!
//! Four kinds cross the client boundary: transport failures, HTTP-level
//! failures, unparseable responses, and application-level failures
//! (success=false on an otherwise-OK response). Each carries a one-line
//! user-facing message; the raw detail is kept for logs only.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Categories of API errors for consistent handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Timeout, DNS failure, connection refused, generic I/O.
    Transport,
    /// HTTP status error (4xx, 5xx).
    HttpStatus,
    /// Failed to parse the response body.
    Parse,
    /// Application-level failure reported via the envelope success flag.
    Api,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Transport => write!(f, "transport"),
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Parse => write!(f, "parse"),
            ApiErrorKind::Api => write!(f, "api"),
        }
    }
}

/// Structured error with kind, display message and optional raw detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error category.
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display.
    pub message: String,
    /// Optional additional details (e.g. raw error body).
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Classifies a transport-level failure into the fixed message table.
    pub fn transport(err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timeout. Please try again."
        } else if err.is_connect() {
            "Cannot connect to server. Please try again later."
        } else if err.is_request() {
            "No internet connection. Please check your network."
        } else {
            "Network error occurred. Please check your connection."
        };
        Self {
            kind: ApiErrorKind::Transport,
            message: message.to_string(),
            details: Some(err.to_string()),
        }
    }

    /// Creates an HTTP status error.
    ///
    /// A JSON body with a `message` field wins over the per-status default
    /// table; the raw body is retained as detail either way.
    pub fn http_status(status: u16, body: &str) -> Self {
        let message = extract_body_message(body)
            .unwrap_or_else(|| default_status_message(status).to_string());
        Self {
            kind: ApiErrorKind::HttpStatus,
            message,
            details: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    /// Creates a parse error; the user sees the generic network message.
    pub fn parse(err: &serde_json::Error, body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: "Network error occurred. Please check your connection.".to_string(),
            details: Some(format!("{err}: {body}")),
        }
    }

    /// Application-level failure; the server message is shown verbatim.
    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Api, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Per-HTTP-status default message table.
fn default_status_message(status: u16) -> &'static str {
    match status {
        400 => "Bad request. Please check your input.",
        401 => "Authentication failed. Please login again.",
        403 => "Access denied. You don't have permission.",
        404 => "Resource not found.",
        422 => "Validation error. Please check your input.",
        429 => "Too many requests. Please try again later.",
        500 => "Server error. Please try again later.",
        502 => "Bad gateway. Server is temporarily unavailable.",
        503 => "Service unavailable. Please try again later.",
        _ => "Request failed.",
    }
}

/// Pulls the `message` field out of a JSON error body, if present.
fn extract_body_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(ToString::to_string)
}
