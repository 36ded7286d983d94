//! Adapter Layer
//!
//! 外部システム（Google OAuth, Drive API, 設定ファイル）との統合

pub mod auth;
pub mod config;
pub mod drive;
