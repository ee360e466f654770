//! File upload endpoints.
//!
//! Multipart uploads stream the image in chunks so an optional progress
//! callback can be reported as 0–100 while the body goes out.

use std::path::Path;
use std::sync::Arc;

use arena_types::{ApiEnvelope, FileUploadData};
use reqwest::multipart;

use super::{ApiClient, ApiError, ApiErrorKind, ApiResult};

/// Upload progress observer, called with 0–100.
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

/// Upload chunk size.
const CHUNK_SIZE: usize = 64 * 1024;

/// What a tournament proof image documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofKind {
    /// Screenshot of the player's in-game UID.
    Uid,
    /// Match result screenshot.
    Screenshot,
}

impl ProofKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProofKind::Uid => "uid",
            ProofKind::Screenshot => "screenshot",
        }
    }
}

impl std::str::FromStr for ProofKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "uid" => Ok(Self::Uid),
            "screenshot" => Ok(Self::Screenshot),
            other => Err(format!("Unknown proof kind: {other}")),
        }
    }
}

impl ApiClient {
    /// `POST files/upload-avatar` — returns the hosted image URL.
    pub async fn upload_avatar(
        &self,
        path: &Path,
        progress: Option<ProgressFn>,
    ) -> ApiResult<String> {
        self.upload("files/upload-avatar", "avatar", path, Vec::new(), progress)
            .await
    }

    /// `POST files/upload-tournament-proof` — returns the hosted image URL.
    pub async fn upload_tournament_proof(
        &self,
        path: &Path,
        tournament_id: &str,
        kind: ProofKind,
        progress: Option<ProgressFn>,
    ) -> ApiResult<String> {
        let extra = vec![
            ("tournament_id", tournament_id.to_string()),
            ("type", kind.as_str().to_string()),
        ];
        self.upload("files/upload-tournament-proof", "image", path, extra, progress)
            .await
    }

    async fn upload(
        &self,
        endpoint: &str,
        field: &'static str,
        path: &Path,
        extra: Vec<(&'static str, String)>,
        progress: Option<ProgressFn>,
    ) -> ApiResult<String> {
        let (file_name, mime) = image_meta(path)?;

        let bytes = tokio::fs::read(path).await.map_err(|e| ApiError {
            kind: ApiErrorKind::Transport,
            message: "Failed to process image".to_string(),
            details: Some(e.to_string()),
        })?;

        let total = bytes.len().max(1);
        let chunks: Vec<Vec<u8>> = bytes.chunks(CHUNK_SIZE).map(<[u8]>::to_vec).collect();

        let mut sent = 0usize;
        let observer = progress.clone();
        let stream = futures_util::stream::iter(chunks.into_iter().map(move |chunk| {
            sent += chunk.len();
            if let Some(cb) = &observer {
                cb(((sent * 100) / total) as u8);
            }
            Ok::<Vec<u8>, std::convert::Infallible>(chunk)
        }));

        let part = multipart::Part::stream_with_length(
            reqwest::Body::wrap_stream(stream),
            total as u64,
        )
        .file_name(file_name)
        .mime_str(mime)
        .map_err(|e| ApiError {
            kind: ApiErrorKind::Transport,
            message: "Failed to process image".to_string(),
            details: Some(e.to_string()),
        })?;

        let mut form = multipart::Form::new().part(field, part);
        for (key, value) in extra {
            form = form.text(key, value);
        }

        let builder = self.http.post(self.url(endpoint)).multipart(form);
        let envelope: ApiEnvelope<FileUploadData> = self.send(builder).await?;
        Self::unwrap_data(envelope).map(|data| data.image_url)
    }
}

/// Derives file name and MIME type; only JPEG and PNG are accepted.
fn image_meta(path: &Path) -> ApiResult<(String, &'static str)> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image.jpg".to_string());

    let mime = match path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => {
            return Err(ApiError::new(
                ApiErrorKind::Transport,
                "Failed to process image",
            ));
        }
    };

    Ok((file_name, mime))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_meta_accepts_jpeg_and_png() {
        let (name, mime) = image_meta(Path::new("/tmp/shot.PNG")).unwrap();
        assert_eq!(name, "shot.PNG");
        assert_eq!(mime, "image/png");

        let (_, mime) = image_meta(Path::new("avatar.jpeg")).unwrap();
        assert_eq!(mime, "image/jpeg");
    }

    #[test]
    fn test_image_meta_rejects_other_types() {
        assert!(image_meta(Path::new("notes.txt")).is_err());
        assert!(image_meta(Path::new("archive")).is_err());
    }

    #[test]
    fn test_proof_kind_strings() {
        assert_eq!(ProofKind::Uid.as_str(), "uid");
        assert_eq!("screenshot".parse::<ProofKind>().unwrap(), ProofKind::Screenshot);
        assert!("gif".parse::<ProofKind>().is_err());
    }
}
