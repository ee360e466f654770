//! Tournament-proof upload flow.

use std::path::Path;

use crate::api::{ApiClient, ProgressFn, ProofKind};

use super::FlowError;

/// Maximum accepted image size.
const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Uploads a proof image for a joined tournament.
///
/// The local file is checked (exists, JPEG/PNG, within the size cap) before
/// any network I/O; then exactly one multipart request is issued. Returns
/// the hosted image URL.
pub async fn upload_proof(
    api: &ApiClient,
    tournament_id: &str,
    path: &Path,
    kind: ProofKind,
    progress: Option<ProgressFn>,
) -> Result<String, FlowError> {
    check_image(path)?;

    tracing::info!(tournament = tournament_id, kind = kind.as_str(), "uploading proof");
    let url = api
        .upload_tournament_proof(path, tournament_id, kind, progress)
        .await?;
    Ok(url)
}

fn check_image(path: &Path) -> Result<(), FlowError> {
    let metadata = std::fs::metadata(path)
        .map_err(|_| FlowError::Blocked("Please select an image first".to_string()))?;

    if !metadata.is_file() || metadata.len() == 0 {
        return Err(FlowError::Blocked("Failed to process image".to_string()));
    }
    if metadata.len() > MAX_IMAGE_BYTES {
        return Err(FlowError::Blocked(
            "Image is too large (max 5 MB)".to_string(),
        ));
    }

    match path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg" | "png") => Ok(()),
        _ => Err(FlowError::Blocked("Failed to process image".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use wiremock::matchers::{method, path as url_path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::Config;
    use crate::session::Session;

    use super::*;

    async fn client(server: &MockServer) -> ApiClient {
        let config = Config {
            base_url: server.uri(),
            ..Default::default()
        };
        ApiClient::new(&config, Session::authenticated("tok")).unwrap()
    }

    /// Missing file is rejected locally; no request reaches the server.
    #[tokio::test]
    async fn test_proof_missing_file_is_local_error() {
        let server = MockServer::start().await;
        let api = client(&server).await;

        let err = upload_proof(&api, "5", Path::new("/nope/shot.jpg"), ProofKind::Uid, None)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Please select an image first");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    /// Wrong file type is rejected locally.
    #[tokio::test]
    async fn test_proof_rejects_non_image() {
        let server = MockServer::start().await;
        let api = client(&server).await;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "hello").unwrap();

        let err = upload_proof(&api, "5", &file, ProofKind::Screenshot, None)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Failed to process image");
    }

    /// A valid image produces one multipart request and reports progress.
    #[tokio::test]
    async fn test_proof_upload_success_with_progress() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(url_path("/files/upload-tournament-proof"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": { "image_url": "https://cdn.example.com/proof.jpg" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("proof.jpg");
        let mut f = std::fs::File::create(&file).unwrap();
        f.write_all(&vec![0u8; 200 * 1024]).unwrap();

        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = std::sync::Arc::clone(&seen);
        let progress: ProgressFn = std::sync::Arc::new(move |pct| {
            sink.lock().unwrap().push(pct);
        });

        let api = client(&server).await;
        let url = upload_proof(&api, "5", &file, ProofKind::Uid, Some(progress))
            .await
            .unwrap();
        assert_eq!(url, "https://cdn.example.com/proof.jpg");

        let seen = seen.lock().unwrap();
        assert!(!seen.is_empty());
        assert_eq!(*seen.last().unwrap(), 100);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }
}
