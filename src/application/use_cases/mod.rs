//! # Use Cases
//!
//! - **UploadFilesUseCase**: 存在チェック → 認証 → フォルダごとのアップロード

pub mod upload_files;
