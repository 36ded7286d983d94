//! Console Reporter
//!
//! アップロードの進捗とファイルIDを標準出力に表示

use log::warn;
use std::fmt;
use std::io::{self, Write};

use crate::adapter::config::DEFAULT_VIEWER_URL_TEMPLATE;
use crate::application::dto::upload_summary::{BatchSummary, UploadSummary};
use crate::application::use_cases::upload_files::ProgressReporter;
use crate::domain::entities::manifest::FolderBatch;
use crate::domain::entities::upload_result::UploadResult;

/// 任意の `Write` に出力するレポーター
///
/// 書き込みに失敗してもアップロードは続ける。失敗は最初の1回だけ警告ログに出す
pub struct ConsoleReporter<W: Write> {
    out: W,
    viewer_url_template: String,
    write_failed: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(viewer_url_template: &str) -> Self {
        Self::new(io::stdout(), viewer_url_template)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, viewer_url_template: &str) -> Self {
        Self {
            out,
            viewer_url_template: viewer_url_template.to_string(),
            write_failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// 出力先への書き込みに一度でも失敗したか
    pub fn write_failed(&self) -> bool {
        self.write_failed
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args) {
            self.report_failure(e);
        }
    }

    fn report_failure(&mut self, e: io::Error) {
        if !self.write_failed {
            warn!("Failed to write progress output (file IDs may be missing): {}", e);
            self.write_failed = true;
        }
    }
}

impl<W: Write> Default for ConsoleReporter<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default(), DEFAULT_VIEWER_URL_TEMPLATE)
    }
}

impl<W: Write> ProgressReporter for ConsoleReporter<W> {
    fn batch_started(&mut self, batch: &FolderBatch) {
        self.line(format_args!("Uploading to {}: {}", batch.label, batch.folder_id));
    }

    fn file_uploaded(&mut self, result: &UploadResult) {
        self.line(format_args!(
            "Uploaded {} -> fileId: {}",
            result.local_path.display(),
            result.remote_file_id
        ));
    }

    fn batch_finished(&mut self, summary: &BatchSummary) {
        let count = summary.uploaded_count();
        let noun = if count == 1 { "file" } else { "files" };
        self.line(format_args!("✓ {}: {} {} uploaded", summary.label, count, noun));
    }

    fn finished(&mut self, _summary: &UploadSummary) {
        self.line(format_args!(
            "\nDone. Use the printed file IDs to edit the HTML files \
             (replace REPLACE_WITH_DRIVE_FILE_ID) or to open in Colab via:"
        ));
        let template = self.viewer_url_template.clone();
        self.line(format_args!("{}", template));
        if let Err(e) = self.out.flush() {
            self.report_failure(e);
        }
    }
}
