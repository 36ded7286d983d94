//! # Upload Files Use Case
//!
//! マニフェストのファイルを順番に Drive へアップロードするユースケース

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::application::dto::upload_summary::{BatchSummary, UploadSummary};
use crate::domain::entities::manifest::{FolderBatch, UploadManifest};
use crate::domain::entities::upload_result::UploadResult;
use crate::domain::errors::UploadError;
use crate::domain::repositories::authenticator::Authenticator;
use crate::domain::services::existence_guard::ensure_all_exist;

/// 進捗の通知先
///
/// 表示のみを担当し、処理の流れには影響しない
pub trait ProgressReporter {
    /// フォルダへのアップロード開始
    fn batch_started(&mut self, batch: &FolderBatch);

    /// 1ファイルのアップロード成功
    fn file_uploaded(&mut self, result: &UploadResult);

    /// フォルダへのアップロード完了
    fn batch_finished(&mut self, summary: &BatchSummary);

    /// 全アップロード完了
    fn finished(&mut self, summary: &UploadSummary);
}

/// ファイルアップロードユースケース
///
/// 存在チェック → 認証 → フォルダごとのアップロードを順番に行う。
/// 最初のエラーで中断し、アップロード済みのファイルは取り消さない
pub struct UploadFilesUseCase<A: Authenticator> {
    authenticator: Arc<A>,
}

impl<A: Authenticator> UploadFilesUseCase<A> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `authenticator` - 認可済みセッションを発行する認証コラボレータ
    pub fn new(authenticator: Arc<A>) -> Self {
        Self { authenticator }
    }

    /// マニフェストの全ファイルをアップロード
    ///
    /// # Arguments
    ///
    /// * `manifest` - アップロード対象と送信先フォルダ
    /// * `reporter` - 進捗の通知先
    ///
    /// # Returns
    ///
    /// フォルダごとのアップロード結果
    ///
    /// # Errors
    ///
    /// - ファイルが1つでも存在しなければ、認証前に `MissingFile` を返す
    /// - 認証に失敗した場合は `Authentication` を返し、アップロードは行わない
    /// - N番目のアップロードに失敗した場合は `Transport` を返し、N+1番目以降は試行しない
    pub async fn execute(
        &self,
        manifest: &UploadManifest,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<UploadSummary, UploadError> {
        ensure_all_exist(&manifest.all_paths())?;
        info!("All {} files present", manifest.len());

        info!("Authenticating...");
        let session = self
            .authenticator
            .authenticate()
            .await
            .map_err(|e| UploadError::Authentication(format!("{:#}", e)))?;
        info!("Authenticated");

        let mut summary = UploadSummary::default();

        for batch in manifest.batches() {
            reporter.batch_started(batch);
            let mut batch_summary = BatchSummary::new(&batch.label, &batch.folder_id);

            for entry in batch.entries() {
                info!(
                    "Uploading {} to {}",
                    entry.local_path.display(),
                    entry.destination_folder_id
                );
                let file_id = session
                    .upload(&entry.local_path, &entry.destination_folder_id)
                    .await
                    .map_err(|e| UploadError::Transport {
                        path: entry.local_path.clone(),
                        message: format!("{:#}", e),
                    })?;

                let result = UploadResult::new(entry.local_path, file_id);
                reporter.file_uploaded(&result);
                batch_summary.results.push(result);
            }

            reporter.batch_finished(&batch_summary);
            summary.batches.push(batch_summary);
        }

        reporter.finished(&summary);
        Ok(summary)
    }
}
