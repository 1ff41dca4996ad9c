//! Local-disk storage client for uploaded attachments
//!
//! Files are written under a single upload directory with a generated
//! unique name (millisecond timestamp + sanitized original filename) and
//! exposed at a stable public URL under the `/files` prefix.

use std::path::{Path, PathBuf};

use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use tokio::fs;
use tracing::{debug, info};

use crate::core::config::StorageConfig;
use crate::core::error::AppError;

lazy_static! {
    /// Whitespace runs in an original filename collapse to a single underscore
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();

    /// Anything outside the URL-safe filename alphabet is dropped
    static ref UNSAFE_CHARS_RE: Regex = Regex::new(r"[^A-Za-z0-9._-]").unwrap();
}

/// An attachment binary as received from the client, before storage
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub original_filename: String,
    pub content_type: String,
}

/// A stored attachment: its generated on-disk name and public URL
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub file_name: String,
    pub url: String,
}

/// Local-disk storage client
pub struct DiskStorageClient {
    upload_dir: PathBuf,
    public_base_url: String,
}

impl DiskStorageClient {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            upload_dir: PathBuf::from(config.upload_dir),
            public_base_url: config.public_base_url,
        }
    }

    /// Ensure the upload directory exists, create if not
    pub async fn ensure_upload_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.upload_dir).await.map_err(|e| {
            AppError::AttachmentIo(format!(
                "Failed to create upload directory {:?}: {}",
                self.upload_dir, e
            ))
        })?;
        info!("Upload directory ready: {:?}", self.upload_dir);
        Ok(())
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Write an attachment under a freshly generated unique name and return
    /// the name together with its public URL
    pub async fn store(&self, original_filename: &str, data: &[u8]) -> Result<StoredFile, AppError> {
        let file_name = generate_file_name(original_filename);
        let path = self.upload_dir.join(&file_name);

        fs::write(&path, data)
            .await
            .map_err(|e| AppError::AttachmentIo(format!("Failed to write {:?}: {}", path, e)))?;

        debug!("Attachment stored: {:?} ({} bytes)", path, data.len());

        let url = self.file_url(&file_name);
        Ok(StoredFile { file_name, url })
    }

    /// Delete a stored attachment by its generated name
    pub async fn delete(&self, file_name: &str) -> Result<(), AppError> {
        let path = self.upload_dir.join(file_name);
        fs::remove_file(&path)
            .await
            .map_err(|e| AppError::AttachmentIo(format!("Failed to delete {:?}: {}", path, e)))?;
        debug!("Attachment deleted: {:?}", path);
        Ok(())
    }

    /// Public URL for a stored file name
    pub fn file_url(&self, file_name: &str) -> String {
        format!("{}/files/{}", self.public_base_url, file_name)
    }
}

/// Generate a collision-resistant storage name for an uploaded file.
///
/// Uniqueness relies on the millisecond timestamp prefix; no lock or shared
/// counter is involved.
fn generate_file_name(original_filename: &str) -> String {
    format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        sanitize_filename(original_filename)
    )
}

/// Reduce an original filename to its URL-safe last path segment
pub fn sanitize_filename(original: &str) -> String {
    // Clients may submit a full path; only the basename matters
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .trim();

    let collapsed = WHITESPACE_RE.replace_all(base, "_");
    let cleaned = UNSAFE_CHARS_RE.replace_all(&collapsed, "");

    if cleaned.is_empty() {
        "archivo".to_string()
    } else {
        cleaned.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_replaces_spaces() {
        assert_eq!(sanitize_filename("report final.pdf"), "report_final.pdf");
        assert_eq!(sanitize_filename("a  b\tc.txt"), "a_b_c.txt");
    }

    #[test]
    fn test_sanitize_filename_strips_paths_and_unsafe_chars() {
        assert_eq!(sanitize_filename("/tmp/evil/../carta.pdf"), "carta.pdf");
        assert_eq!(sanitize_filename("C:\\docs\\oficio.docx"), "oficio.docx");
        assert_eq!(sanitize_filename("nota%$#!.pdf"), "nota.pdf");
        assert_eq!(sanitize_filename("   "), "archivo");
    }

    #[test]
    fn test_generate_file_name_shape() {
        let name = generate_file_name("report final.pdf");
        let re = Regex::new(r"^\d+-report_final\.pdf$").unwrap();
        assert!(re.is_match(&name), "unexpected name: {}", name);
    }

    #[tokio::test]
    async fn test_store_and_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let client = DiskStorageClient::new(StorageConfig {
            upload_dir: dir.path().to_string_lossy().into_owned(),
            public_base_url: "http://localhost:3000".to_string(),
        });
        client.ensure_upload_dir().await.unwrap();

        let data = b"contenido del oficio";
        let stored = client.store("oficio 123.pdf", data).await.unwrap();

        assert!(stored.file_name.ends_with("-oficio_123.pdf"));
        assert_eq!(
            stored.url,
            format!("http://localhost:3000/files/{}", stored.file_name)
        );

        let on_disk = tokio::fs::read(dir.path().join(&stored.file_name))
            .await
            .unwrap();
        assert_eq!(on_disk, data);

        client.delete(&stored.file_name).await.unwrap();
        assert!(!dir.path().join(&stored.file_name).exists());
    }

    #[tokio::test]
    async fn test_stored_bytes_served_via_files_route() {
        let dir = tempfile::tempdir().unwrap();
        let client = DiskStorageClient::new(StorageConfig {
            upload_dir: dir.path().to_string_lossy().into_owned(),
            public_base_url: "http://localhost:3000".to_string(),
        });
        client.ensure_upload_dir().await.unwrap();

        // 10KB payload with a PDF magic prefix
        let mut data = vec![0u8; 10 * 1024];
        data[..5].copy_from_slice(b"%PDF-");
        let stored = client.store("report final.pdf", &data).await.unwrap();

        let name_re = Regex::new(r"^\d+-report_final\.pdf$").unwrap();
        assert!(name_re.is_match(&stored.file_name));

        let app = axum::Router::new()
            .nest_service("/files", tower_http::services::ServeDir::new(client.upload_dir()));
        let server = axum_test::TestServer::new(app).unwrap();

        let response = server.get(&format!("/files/{}", stored.file_name)).await;
        response.assert_status_ok();
        assert_eq!(response.as_bytes().to_vec(), data);
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let client = DiskStorageClient::new(StorageConfig {
            upload_dir: dir.path().to_string_lossy().into_owned(),
            public_base_url: "http://localhost:3000".to_string(),
        });

        let result = client.delete("1700000000000-no-existe.pdf").await;
        assert!(matches!(result, Err(AppError::AttachmentIo(_))));
    }
}
