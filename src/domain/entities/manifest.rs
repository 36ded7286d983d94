//! # Upload Manifest
//!
//! ローカルファイルと送信先フォルダの対応表

use std::path::PathBuf;

/// folder1 にアップロードするファイル
pub const FOLDER1_FILES: [&str; 2] = [
    "CRD_attempt_with_fallback.ipynb",
    "CRD_attempt_with_fallback.html",
];

/// folder2 にアップロードするファイル
pub const FOLDER2_FILES: [&str; 2] = [
    "cloudflared_noVNC_with_codeserver.ipynb",
    "cloudflared_noVNC_with_codeserver.html",
];

/// マニフェストの1エントリ（ローカルファイル → 送信先フォルダ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadManifestEntry {
    pub local_path: PathBuf,
    pub destination_folder_id: String,
}

/// 同じフォルダへ送るファイルのまとまり
///
/// `label` は出力に使う名前（`folder1` など）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderBatch {
    pub label: String,
    pub folder_id: String,
    pub files: Vec<PathBuf>,
}

impl FolderBatch {
    pub fn new<I, P>(label: impl Into<String>, folder_id: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            label: label.into(),
            folder_id: folder_id.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// バッチ内のファイルを送信先フォルダ付きのエントリとして返す
    pub fn entries(&self) -> impl Iterator<Item = UploadManifestEntry> + '_ {
        self.files.iter().map(|path| UploadManifestEntry {
            local_path: path.clone(),
            destination_folder_id: self.folder_id.clone(),
        })
    }
}

/// アップロードマニフェスト
///
/// バッチの順序とバッチ内のファイル順がそのままアップロード順になる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadManifest {
    batches: Vec<FolderBatch>,
}

impl UploadManifest {
    pub fn new(batches: Vec<FolderBatch>) -> Self {
        Self { batches }
    }

    /// 固定のファイル一覧と CLI で指定されたフォルダIDからマニフェストを作成
    ///
    /// ```
    /// use gdrive_upload::domain::entities::manifest::UploadManifest;
    ///
    /// let manifest = UploadManifest::default_for("F1", "F2");
    /// let entries = manifest.entries();
    ///
    /// assert_eq!(entries.len(), 4);
    /// assert_eq!(entries[0].destination_folder_id, "F1");
    /// assert_eq!(entries[3].destination_folder_id, "F2");
    /// ```
    pub fn default_for(folder1: &str, folder2: &str) -> Self {
        Self::new(vec![
            FolderBatch::new("folder1", folder1, FOLDER1_FILES),
            FolderBatch::new("folder2", folder2, FOLDER2_FILES),
        ])
    }

    pub fn batches(&self) -> &[FolderBatch] {
        &self.batches
    }

    /// 全エントリをマニフェスト順に展開
    pub fn entries(&self) -> Vec<UploadManifestEntry> {
        self.batches.iter().flat_map(|batch| batch.entries()).collect()
    }

    /// 全ローカルパスをマニフェスト順に返す
    pub fn all_paths(&self) -> Vec<PathBuf> {
        self.batches
            .iter()
            .flat_map(|batch| batch.files.iter().cloned())
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.batches.iter().map(|b| b.files.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
