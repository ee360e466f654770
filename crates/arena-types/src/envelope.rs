//! Response envelope shared by every backend endpoint.

use serde::{Deserialize, Serialize};

/// Standard response body: a success flag and a message alongside the payload.
///
/// The flag is authoritative. Some application failures arrive as 200-level
/// responses with `success=false`, so callers must branch on the flag
/// independently of the HTTP status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Server-supplied message, or a fixed fallback when absent.
    pub fn message_or_default(&self) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map_or_else(|| "Request failed.".to_string(), ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Envelope without data/message still deserializes (success flag only).
    #[test]
    fn test_envelope_minimal() {
        let env: ApiEnvelope<Vec<u32>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(env.success);
        assert!(env.data.is_none());
        assert!(env.message.is_none());
    }

    /// Failure envelopes carry the server message verbatim.
    #[test]
    fn test_envelope_failure_message() {
        let env: ApiEnvelope<()> =
            serde_json::from_str(r#"{"success":false,"message":"server busy"}"#).unwrap();
        assert!(!env.success);
        assert_eq!(env.message_or_default(), "server busy");
    }

    /// Blank messages fall back to the fixed default.
    #[test]
    fn test_envelope_blank_message_falls_back() {
        let env: ApiEnvelope<()> =
            serde_json::from_str(r#"{"success":false,"message":"  "}"#).unwrap();
        assert_eq!(env.message_or_default(), "Request failed.");
    }
}
