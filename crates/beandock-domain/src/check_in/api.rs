use async_trait::async_trait;

use super::value_objects::{AssetsEnvelope, SignInEnvelope, VoucherEnvelope};
use crate::credentials::AccessToken;

/// Failure of one remote call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The platform rejected the token (HTTP 401 on the asset endpoint)
    #[error("access token rejected")]
    Unauthorized,

    /// Connection, TLS or timeout failure
    #[error("{0}")]
    Transport(String),

    /// Non-success HTTP status other than the authoritative 401
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the expected JSON shape
    #[error("invalid response payload: {0}")]
    Decode(String),
}

/// Port to the platform's mobile sign-in API
#[async_trait]
pub trait SignInApi: Send + Sync {
    /// Personal asset info: customer code and bean balance
    async fn fetch_assets(&self, token: &AccessToken) -> Result<AssetsEnvelope, ApiError>;

    /// Daily sign-in
    async fn sign_in(&self, token: &AccessToken) -> Result<SignInEnvelope, ApiError>;

    /// Seven-day streak voucher claim
    async fn receive_voucher(&self, token: &AccessToken) -> Result<VoucherEnvelope, ApiError>;
}
