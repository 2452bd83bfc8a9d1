//! File ingestion and readiness polling.
//!
//! The service ingests a media file asynchronously: upload returns a handle
//! whose state must be polled until it reaches `Ready` or `Failed`. No poll
//! bound is enforced here; timeout policy belongs to the orchestrator.

use std::path::Path;

use tracing::debug;

use vidsage_models::RemoteMediaHandle;

use crate::client::GenAiClient;
use crate::error::{GenAiError, GenAiResult};
use crate::types::{FileInfo, UploadResponse};

impl GenAiClient {
    /// Upload a staged media file for processing.
    ///
    /// Service rejection (unsupported format, size limit, bad credential)
    /// surfaces as `UploadFailed`.
    pub async fn submit_media(
        &self,
        path: &Path,
        mime_type: &str,
    ) -> GenAiResult<RemoteMediaHandle> {
        let url = format!("{}/upload/v1beta/files", self.config.base_url);
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| GenAiError::UploadFailed(format!("read {}: {}", path.display(), e)))?;

        debug!(
            "Uploading {} byte asset ({}) to {}",
            bytes.len(),
            mime_type,
            url
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("X-Goog-Upload-Protocol", "raw")
            .header(reqwest::header::CONTENT_TYPE, mime_type)
            .body(bytes)
            .send()
            .await
            .map_err(GenAiError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::UploadFailed(format!(
                "service returned {}: {}",
                status, body
            )));
        }

        let upload: UploadResponse = response.json().await?;
        Ok(upload.file.into_handle(mime_type))
    }

    /// Fetch the latest state of a submitted handle.
    ///
    /// Transient network failures surface as retryable errors; the caller
    /// owns the retry policy.
    pub async fn poll_media(&self, handle: &RemoteMediaHandle) -> GenAiResult<RemoteMediaHandle> {
        let url = format!("{}/v1beta/{}", self.config.base_url, handle.remote_id);

        let response = self
            .http
            .get(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(GenAiError::Network)?;

        let status = response.status();
        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::Unavailable(format!("{}: {}", status, body)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::RequestFailed(format!("{}: {}", status, body)));
        }

        let info: FileInfo = response.json().await?;
        Ok(info.into_handle(&handle.mime_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use wiremock::matchers::{method, path as url_path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use vidsage_models::MediaState;

    use crate::client::GenAiConfig;

    fn client_for(server: &MockServer) -> GenAiClient {
        let mut config = GenAiConfig::new("test-key");
        config.base_url = server.uri();
        GenAiClient::new(config).unwrap()
    }

    fn staged_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"fake video bytes").unwrap();
        file
    }

    #[tokio::test]
    async fn test_submit_parses_handle() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(url_path("/upload/v1beta/files"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "file": {
                    "name": "files/abc123",
                    "uri": "https://example.com/v1beta/files/abc123",
                    "mimeType": "video/mp4",
                    "state": "PROCESSING"
                }
            })))
            .mount(&server)
            .await;

        let file = staged_file();
        let handle = client_for(&server)
            .submit_media(file.path(), "video/mp4")
            .await
            .unwrap();

        assert_eq!(handle.remote_id, "files/abc123");
        assert_eq!(handle.state, MediaState::Processing);
        assert_eq!(handle.mime_type, "video/mp4");
    }

    #[tokio::test]
    async fn test_submit_rejection_is_upload_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(url_path("/upload/v1beta/files"))
            .respond_with(ResponseTemplate::new(400).set_body_string("unsupported format"))
            .mount(&server)
            .await;

        let file = staged_file();
        let err = client_for(&server)
            .submit_media(file.path(), "video/x-unknown")
            .await
            .unwrap_err();

        assert!(matches!(err, GenAiError::UploadFailed(_)));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_poll_maps_active_to_ready() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/v1beta/files/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "files/abc123",
                "uri": "https://example.com/v1beta/files/abc123",
                "state": "ACTIVE"
            })))
            .mount(&server)
            .await;

        let handle = RemoteMediaHandle {
            remote_id: "files/abc123".to_string(),
            uri: "https://example.com/v1beta/files/abc123".to_string(),
            mime_type: "video/mp4".to_string(),
            state: MediaState::Processing,
        };

        let polled = client_for(&server).poll_media(&handle).await.unwrap();
        assert_eq!(polled.state, MediaState::Ready);
        // Mime type survives even when the poll response omits it.
        assert_eq!(polled.mime_type, "video/mp4");
    }

    #[tokio::test]
    async fn test_poll_server_error_is_retryable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/v1beta/files/abc123"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let handle = RemoteMediaHandle {
            remote_id: "files/abc123".to_string(),
            uri: String::new(),
            mime_type: "video/mp4".to_string(),
            state: MediaState::Processing,
        };

        let err = client_for(&server).poll_media(&handle).await.unwrap_err();
        assert!(matches!(err, GenAiError::Unavailable(_)));
        assert!(err.is_retryable());
    }
}
