//! # Domain Repositories
//!
//! 外部コラボレータの trait（インターフェース）定義
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供
//! - テストではフェイクに差し替える

pub mod authenticator;
pub mod drive_session;
