//! # Domain Entities
//!
//! ## エンティティ
//!
//! - **UploadManifest**: アップロード対象ファイルと送信先フォルダの対応表
//! - **UploadResult**: アップロード済みファイルとリモートIDの組

pub mod manifest;
pub mod upload_result;
