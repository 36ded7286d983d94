//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **reporter**: 進捗とファイルIDの表示
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod reporter;
pub mod workflow;

pub use cli::Args;
pub use reporter::ConsoleReporter;
pub use workflow::DriveUploadWorkflow;
