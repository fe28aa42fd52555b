mod request;
mod types;

pub use types::{
    ACCESS_TOKEN_HEADER, ASSETS_PATH, DEFAULT_BASE_URL, SIGN_IN_PATH, USER_AGENT, VOUCHER_PATH,
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use beandock_domain::check_in::{
    ApiError, AssetsEnvelope, SignInApi, SignInEnvelope, VoucherEnvelope,
};
use beandock_domain::AccessToken;

use crate::config::TimeoutConfig;
use types::StatusPolicy;

/// Client for the JLC mobile sign-in API.
///
/// Requests are issued once; there is no retry layer.
pub struct JlcHttpClient {
    pub(super) client: Client,
    pub(super) base_url: Url,
}

impl JlcHttpClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, &TimeoutConfig::default())
    }

    pub fn with_base_url(base_url: &str, timeouts: &TimeoutConfig) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeouts.http_request)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Transport(format!("Invalid endpoint {}: {}", path, e)))
    }
}

#[async_trait]
impl SignInApi for JlcHttpClient {
    async fn fetch_assets(&self, token: &AccessToken) -> Result<AssetsEnvelope, ApiError> {
        let url = self.endpoint(ASSETS_PATH)?;
        self.get_json(url, token, StatusPolicy::AuthoritativeUnauthorized)
            .await
    }

    async fn sign_in(&self, token: &AccessToken) -> Result<SignInEnvelope, ApiError> {
        let url = self.endpoint(SIGN_IN_PATH)?;
        self.get_json(url, token, StatusPolicy::ErrorOnFailure).await
    }

    async fn receive_voucher(&self, token: &AccessToken) -> Result<VoucherEnvelope, ApiError> {
        let url = self.endpoint(VOUCHER_PATH)?;
        self.get_json(url, token, StatusPolicy::Ignore).await
    }
}
