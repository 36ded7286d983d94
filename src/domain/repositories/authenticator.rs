//! # Authenticator Trait
//!
//! 対話的な認可フローを抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::drive_session::DriveSession;

/// 認証コラボレータ
///
/// OAuth の認可を行い、認証付き呼び出しができるセッションを返す
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// 認可フローを実行してセッションを取得
    ///
    /// # Errors
    ///
    /// 同意の拒否、ネットワーク障害、クライアント資格情報の不備で失敗する
    async fn authenticate(&self) -> Result<Box<dyn DriveSession>>;
}
