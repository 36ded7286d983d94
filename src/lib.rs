//! # gdrive-upload
//!
//! ノートブックと HTML を Google Drive の2つのフォルダにアップロードし、ファイルIDを表示するツール
//!
//! 以下の4層で構成されています：
//!
//! - **Domain層**: マニフェスト、エラー分類、外部コラボレータの trait（外部依存なし）
//! - **Application層**: 存在チェック → 認証 → アップロードのユースケース
//! - **Adapter層**: Google OAuth, Drive API, 設定ファイル
//! - **Driver層**: CLI、レポーター、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
