//! Google OAuth Authentication
//!
//! クライアント資格情報を使ったインストール型アプリケーションフロー

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use google_drive3::yup_oauth2::authenticator_delegate::InstalledFlowDelegate;
use google_drive3::yup_oauth2::{self, InstalledFlowAuthenticator, InstalledFlowReturnMethod};
use log::{info, warn};
use std::future::Future;
use std::pin::Pin;

use crate::adapter::config::{AuthFlow, Config};
use crate::adapter::drive::client::{drive_hub, install_crypto_provider, DriveFilesClient};
use crate::domain::repositories::authenticator::Authenticator;
use crate::domain::repositories::drive_session::DriveSession;

/// Expands tilde in path and returns the full path
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// 設定から認可コードの受け取り方を決める
pub fn return_method(flow: AuthFlow, redirect_port: Option<u16>) -> InstalledFlowReturnMethod {
    match (flow, redirect_port) {
        (AuthFlow::Console, _) => InstalledFlowReturnMethod::Interactive,
        (AuthFlow::Redirect, Some(port)) => InstalledFlowReturnMethod::HTTPPortRedirect(port),
        (AuthFlow::Redirect, None) => InstalledFlowReturnMethod::HTTPRedirect,
    }
}

/// 同意画面をブラウザで開く（ローカルリダイレクト用）
struct BrowserDelegate;

impl InstalledFlowDelegate for BrowserDelegate {
    fn present_user_url<'a>(
        &'a self,
        url: &'a str,
        need_code: bool,
    ) -> Pin<Box<dyn Future<Output = Result<String, String>> + Send + 'a>> {
        Box::pin(async move {
            if need_code {
                return Err("browser delegate cannot read an authorization code".to_string());
            }
            println!("Opening browser for Google authorization.");
            println!("If it does not open, visit:\n{}", url);
            // ランチャーの終了を待たない（待つとリダイレクト受信が始まらない）
            if let Err(e) = open::that_detached(url) {
                warn!("Failed to open browser: {}", e);
            }
            Ok(String::new())
        })
    }
}

/// yup-oauth2 による Authenticator 実装
pub struct InstalledFlowAuth {
    config: Config,
}

impl InstalledFlowAuth {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 同意を得てアクセストークンを取得済みの DriveHub を作成
    async fn authorized_hub(&self) -> Result<DriveFilesClient> {
        let secrets_path = expand_path(&self.config.client_secrets_path);
        let secret = yup_oauth2::read_application_secret(&secrets_path)
            .await
            .with_context(|| format!("Failed to read OAuth client secrets: {}", secrets_path))?;

        install_crypto_provider();
        let method = return_method(self.config.auth_flow, self.config.redirect_port);
        let mut builder = InstalledFlowAuthenticator::builder(secret, method);
        if self.config.auth_flow == AuthFlow::Redirect {
            builder = builder.flow_delegate(Box::new(BrowserDelegate));
        }
        if let Some(cache) = &self.config.token_cache_path {
            builder = builder.persist_tokens_to_disk(expand_path(cache));
        }

        let auth = builder
            .build()
            .await
            .context("Failed to build OAuth authenticator")?;

        // アップロード前に同意を済ませる（失敗時は1件もアップロードしない）
        let token = auth
            .token(&self.config.scopes)
            .await
            .context("OAuth authorization failed")?;
        if token.token().is_none() {
            bail!("OAuth flow returned no access token");
        }

        let hub = drive_hub(auth, &self.config.api_base_url)?;
        Ok(DriveFilesClient::new(hub, self.config.scopes.clone()))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl Authenticator for InstalledFlowAuth {
    async fn authenticate(&self) -> Result<Box<dyn DriveSession>> {
        info!(
            "Starting OAuth flow with {}",
            self.config.client_secrets_path
        );
        let client = self.authorized_hub().await?;
        Ok(Box::new(client))
    }
}
