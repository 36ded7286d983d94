//! Configuration
//!
//! 認証とDrive APIの設定（JSONファイル、未指定の項目はデフォルト値）

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "./gdrive-upload.json";
pub const DEFAULT_CLIENT_SECRETS_PATH: &str = "client_secrets.json";
pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive";
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com";
pub const DEFAULT_VIEWER_URL_TEMPLATE: &str = "https://colab.research.google.com/drive/<fileId>";

/// OAuth 認可コードの受け取り方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthFlow {
    /// ローカルWebサーバーでリダイレクトを受ける
    #[default]
    Redirect,
    /// URLを表示し、コンソールで認可コードを入力する
    Console,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// OAuth クライアント資格情報（Desktop app）
    pub client_secrets_path: String,
    /// トークンキャッシュ。未指定なら保存しない
    pub token_cache_path: Option<String>,
    pub scopes: Vec<String>,
    pub auth_flow: AuthFlow,
    /// リダイレクトを受けるポート。未指定なら空きポート
    pub redirect_port: Option<u16>,
    pub api_base_url: String,
    /// `<fileId>` をファイルIDに置き換えて開くURL
    pub viewer_url_template: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_secrets_path: DEFAULT_CLIENT_SECRETS_PATH.to_string(),
            token_cache_path: None,
            scopes: vec![DRIVE_SCOPE.to_string()],
            auth_flow: AuthFlow::default(),
            redirect_port: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            viewer_url_template: DEFAULT_VIEWER_URL_TEMPLATE.to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path))?;
        Ok(config)
    }

    /// ファイルがなければデフォルト設定を返す
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
