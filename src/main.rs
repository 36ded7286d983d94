//! gdrive-upload
//!
//! ノートブックとHTMLを Google Drive にアップロードし、ファイルIDを表示

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use gdrive_upload::adapter::config::{Config, DEFAULT_CONFIG_PATH};
use gdrive_upload::driver::{Args, DriveUploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (defaults when the file is absent)
    let config = Config::load_or_default(DEFAULT_CONFIG_PATH)?;

    let workflow = DriveUploadWorkflow::new(config);

    workflow.execute(args).await
}
