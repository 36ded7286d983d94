//! # Upload Result

use std::path::PathBuf;

/// アップロード結果
///
/// 1ファイルのアップロード成功ごとに作られ、表示後は破棄される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// アップロードしたローカルファイル
    pub local_path: PathBuf,
    /// Drive が割り当てたファイルID
    pub remote_file_id: String,
}

impl UploadResult {
    pub fn new(local_path: impl Into<PathBuf>, remote_file_id: impl Into<String>) -> Self {
        Self {
            local_path: local_path.into(),
            remote_file_id: remote_file_id.into(),
        }
    }
}
