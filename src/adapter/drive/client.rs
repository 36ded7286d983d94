//! Drive Files Client
//!
//! 認可済みセッションの Drive v3 実装（google-drive3 の DriveHub）

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use google_drive3::api::File;
use google_drive3::common::GetToken;
use google_drive3::hyper_util::client::legacy::connect::HttpConnector;
use google_drive3::hyper_util::client::legacy::Client;
use google_drive3::hyper_util::rt::TokioExecutor;
use google_drive3::DriveHub;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use log::debug;
use std::io::Cursor;
use std::path::Path;

use crate::domain::repositories::drive_session::DriveSession;

pub type Connector = HttpsConnector<HttpConnector>;

/// rustls の暗号プロバイダを登録（登録済みなら何もしない）
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// API のベースURLを向けた DriveHub を作成
///
/// `api_base_url` は `https://www.googleapis.com` の形式（末尾スラッシュ有無は問わない）
pub fn drive_hub<A>(auth: A, api_base_url: &str) -> Result<DriveHub<Connector>>
where
    A: GetToken + 'static,
{
    install_crypto_provider();

    let connector = HttpsConnectorBuilder::new()
        .with_native_roots()
        .context("load native root certs")?
        .https_or_http()
        .enable_http1()
        .build();
    let client = Client::builder(TokioExecutor::new()).build(connector);

    let mut hub = DriveHub::new(client, auth);
    let root = format!("{}/", api_base_url.trim_end_matches('/'));
    hub.base_url(format!("{}drive/v3/", root));
    hub.root_url(root);
    Ok(hub)
}

/// DriveHub を保持する Drive クライアント
pub struct DriveFilesClient {
    hub: DriveHub<Connector>,
    scopes: Vec<String>,
}

impl DriveFilesClient {
    /// `scopes` は認証時に要求したものと同じにする（トークンキャッシュを再利用するため）
    pub fn new(hub: DriveHub<Connector>, scopes: Vec<String>) -> Self {
        Self { hub, scopes }
    }

    /// アップロード先のファイルメタデータを作成
    ///
    /// タイトルはローカルファイルのベース名。MIMEタイプは拡張子から推測できた場合のみ設定し、
    /// 推測できなければ Drive の判定に任せる
    pub fn metadata_for(local_path: &Path, folder_id: &str) -> Result<File> {
        let name = local_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("Path has no file name: {}", local_path.display()))?;

        Ok(File {
            name: Some(name),
            parents: Some(vec![folder_id.to_string()]),
            mime_type: mime_guess::from_path(local_path)
                .first()
                .map(|m| m.essence_str().to_string()),
            ..File::default()
        })
    }
}

#[async_trait]
impl DriveSession for DriveFilesClient {
    async fn upload(&self, local_path: &Path, folder_id: &str) -> Result<String> {
        let content = tokio::fs::read(local_path)
            .await
            .with_context(|| format!("Failed to read file: {}", local_path.display()))?;
        let metadata = Self::metadata_for(local_path, folder_id)?;
        let media_type = mime_guess::from_path(local_path).first_or_octet_stream();
        debug!(
            "files.create {} ({} bytes, {})",
            local_path.display(),
            content.len(),
            media_type
        );

        let (_response, created) = self
            .hub
            .files()
            .create(metadata)
            .supports_all_drives(true)
            .param("fields", "id")
            .add_scopes(self.scopes.iter())
            .upload(Cursor::new(content), media_type)
            .await
            .context("Drive upload failed")?;

        match created.id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => bail!("Drive API response did not include a file id"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn client_for(server: &mockito::Server) -> DriveFilesClient {
        let hub = drive_hub("test-token".to_string(), &server.url()).unwrap();
        DriveFilesClient::new(hub, vec!["https://www.googleapis.com/auth/drive".to_string()])
    }

    #[test]
    fn test_metadata_uses_base_name() {
        let metadata =
            DriveFilesClient::metadata_for(Path::new("/some/dir/page.html"), "F1").unwrap();

        assert_eq!(metadata.name.as_deref(), Some("page.html"));
        assert_eq!(metadata.parents, Some(vec!["F1".to_string()]));
        assert_eq!(metadata.mime_type.as_deref(), Some("text/html"));
    }

    #[test]
    fn test_metadata_leaves_unknown_mime_to_drive() {
        let metadata = DriveFilesClient::metadata_for(
            Path::new("CRD_attempt_with_fallback.ipynb"),
            "F1",
        )
        .unwrap();
        assert_eq!(metadata.mime_type, None);

        let metadata = DriveFilesClient::metadata_for(Path::new("blob.zzqq"), "F1").unwrap();
        assert_eq!(metadata.mime_type, None);
    }

    #[test]
    fn test_metadata_without_file_name() {
        assert!(DriveFilesClient::metadata_for(Path::new("/"), "F1").is_err());
    }

    #[tokio::test]
    async fn test_upload_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "page.html", "<html>body</html>");

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload/drive/v3/files")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("uploadType".into(), "multipart".into()),
                Matcher::UrlEncoded("fields".into(), "id".into()),
                Matcher::UrlEncoded("supportsAllDrives".into(), "true".into()),
            ]))
            .match_header("authorization", "Bearer test-token")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#""name":\s*"page\.html""#.into()),
                Matcher::Regex(r#""parents":\s*\[\s*"F1"\s*\]"#.into()),
                Matcher::Regex("<html>body</html>".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"drive-file-1"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let id = client.upload(&path, "F1").await.unwrap();

        assert_eq!(id, "drive-file-1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_notebook() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "nb.ipynb", r#"{"cells": []}"#);

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload/drive/v3/files")
            .match_query(Matcher::Any)
            .match_body(Matcher::Regex(r#""name":\s*"nb\.ipynb""#.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"nb-1"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        assert_eq!(client.upload(&path, "F1").await.unwrap(), "nb-1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_api_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "nb.ipynb", "{}");

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/upload/drive/v3/files")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"code":404,"message":"File not found: F9"}}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.upload(&path, "F9").await.unwrap_err();

        assert!(err.to_string().contains("Drive upload failed"));
    }

    #[tokio::test]
    async fn test_upload_response_without_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "nb.ipynb", "{}");

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/upload/drive/v3/files")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.upload(&path, "F1").await.unwrap_err();

        assert!(err.to_string().contains("did not include a file id"));
    }

    #[tokio::test]
    async fn test_upload_unreadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone.html");

        let hub = drive_hub("t".to_string(), "http://127.0.0.1:9").unwrap();
        let client = DriveFilesClient::new(hub, vec![]);
        let err = client.upload(&missing, "F1").await.unwrap_err();

        assert!(err.to_string().contains("Failed to read file"));
    }

    #[tokio::test]
    async fn test_each_upload_creates_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "nb.ipynb", "{}");

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload/drive/v3/files")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"x"}"#)
            .expect(2)
            .create_async()
            .await;

        let client = client_for(&server);
        client.upload(&path, "F1").await.unwrap();
        client.upload(&path, "F1").await.unwrap();

        // 同じ入力でも毎回 files.create（重複排除しない）
        mock.assert_async().await;
    }
}
