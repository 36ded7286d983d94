//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::auth::InstalledFlowAuth;
use crate::adapter::config::Config;
use crate::application::dto::upload_summary::UploadSummary;
use crate::application::use_cases::upload_files::{ProgressReporter, UploadFilesUseCase};
use crate::domain::entities::manifest::{FolderBatch, UploadManifest};
use crate::domain::repositories::authenticator::Authenticator;

use super::cli::Args;
use super::reporter::ConsoleReporter;

/// Drive Upload Workflow
pub struct DriveUploadWorkflow {
    config: Config,
    base_dir: Option<PathBuf>,
}

impl DriveUploadWorkflow {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            base_dir: None,
        }
    }

    /// マニフェストのファイル名をこのディレクトリ基準で解決する
    ///
    /// 未指定ならカレントディレクトリ基準の相対パスのまま
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// CLI のフォルダIDから固定マニフェストを作成
    pub fn manifest_for(&self, args: &Args) -> UploadManifest {
        let manifest = UploadManifest::default_for(&args.folder1, &args.folder2);
        match &self.base_dir {
            None => manifest,
            Some(dir) => UploadManifest::new(
                manifest
                    .batches()
                    .iter()
                    .map(|batch| {
                        FolderBatch::new(
                            &batch.label,
                            &batch.folder_id,
                            batch.files.iter().map(|f| dir.join(f)),
                        )
                    })
                    .collect(),
            ),
        }
    }

    /// Execute the upload workflow
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn execute(&self, args: Args) -> Result<()> {
        let authenticator = Arc::new(InstalledFlowAuth::new(self.config.clone()));
        let mut reporter = ConsoleReporter::stdout(&self.config.viewer_url_template);

        self.execute_with(&args, authenticator, &mut reporter)
            .await?;
        Ok(())
    }

    /// 認証コラボレータとレポーターを注入して実行
    pub async fn execute_with<A: Authenticator>(
        &self,
        args: &Args,
        authenticator: Arc<A>,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<UploadSummary> {
        info!("Starting Drive uploader...");
        info!("folder1: {} / folder2: {}", args.folder1, args.folder2);

        let manifest = self.manifest_for(args);
        let use_case = UploadFilesUseCase::new(authenticator);
        let summary = use_case.execute(&manifest, reporter).await?;

        info!("Uploaded {} files", summary.uploaded_count());
        Ok(summary)
    }
}
