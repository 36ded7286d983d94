//! # Upload Summary DTO
//!
//! アップロード結果のまとめ

use crate::domain::entities::upload_result::UploadResult;

/// 1フォルダ分のアップロード結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub label: String,
    pub folder_id: String,
    pub results: Vec<UploadResult>,
}

impl BatchSummary {
    pub fn new(label: impl Into<String>, folder_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            folder_id: folder_id.into(),
            results: Vec::new(),
        }
    }

    #[inline]
    pub fn uploaded_count(&self) -> usize {
        self.results.len()
    }
}

/// 実行全体のアップロード結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub batches: Vec<BatchSummary>,
}

impl UploadSummary {
    /// アップロードされたファイルの総数
    pub fn uploaded_count(&self) -> usize {
        self.batches.iter().map(BatchSummary::uploaded_count).sum()
    }

    /// 全結果をアップロード順に返す
    pub fn results(&self) -> impl Iterator<Item = &UploadResult> {
        self.batches.iter().flat_map(|b| b.results.iter())
    }
}
