//! Authentication Module
//!
//! Google OAuth（インストール型アプリケーションフロー）

pub mod oauth;

pub use oauth::InstalledFlowAuth;
