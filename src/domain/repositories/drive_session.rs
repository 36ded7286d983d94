//! # Drive Session Trait
//!
//! 認可済みセッションによるファイルアップロードを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// 認可済みセッション
///
/// OAuth フローの結果として得られ、認証付きの API 呼び出しを行う
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DriveSession: Send + Sync {
    /// ローカルファイルを指定フォルダ内の新しいリモートファイルとしてアップロード
    ///
    /// # Arguments
    ///
    /// * `local_path` - アップロードするファイル（存在チェックは呼び出し側で済んでいる）
    /// * `folder_id` - 送信先フォルダID（存在は検証しない）
    ///
    /// # Returns
    ///
    /// リモートで割り当てられたファイルID
    ///
    /// # Errors
    ///
    /// 送信または API 呼び出しに失敗した場合にエラーを返す。
    /// 呼び出すたびに新しいリモートファイルが作られる（冪等ではない）
    async fn upload(&self, local_path: &Path, folder_id: &str) -> Result<String>;
}
