//! # Domain Layer
//!
//! アップロード対象とその結果、外部コラボレータの契約を定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - OAuthやHTTPについて何も知らない
//!
//! ## 構成要素
//!
//! - **entities**: マニフェストとアップロード結果
//! - **errors**: 致命的エラーの分類
//! - **repositories**: 認証・アップロードの trait（インターフェース定義のみ）
//! - **services**: Domain Service（存在チェック）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
