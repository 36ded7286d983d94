//! # Upload Errors
//!
//! 実行全体を中断する致命的エラーの分類

use std::path::PathBuf;
use thiserror::Error;

/// アップロード処理のエラー
///
/// どれもリトライされず、そのままトップレベルまで伝播する
#[derive(Debug, Error)]
pub enum UploadError {
    /// 必須ファイルがローカルに存在しない（ネットワークアクセス前に検出）
    #[error("Required file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// OAuth フローの失敗
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// ファイル作成またはコンテンツ送信の失敗
    #[error("Failed to upload {}: {message}", .path.display())]
    Transport { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_message() {
        let err = UploadError::MissingFile(PathBuf::from("notebook.ipynb"));
        assert_eq!(err.to_string(), "Required file not found: notebook.ipynb");
    }

    #[test]
    fn test_authentication_message() {
        let err = UploadError::Authentication("consent denied".to_string());
        assert_eq!(err.to_string(), "Authentication failed: consent denied");
    }

    #[test]
    fn test_transport_message() {
        let err = UploadError::Transport {
            path: PathBuf::from("page.html"),
            message: "Drive API returned 500".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to upload page.html: Drive API returned 500"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let err: anyhow::Error = UploadError::MissingFile(PathBuf::from("x")).into();
        assert!(err.to_string().starts_with("Required file not found"));
    }
}
