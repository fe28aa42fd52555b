use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use beandock_domain::check_in::ApiError;
use beandock_domain::AccessToken;

use super::types::{preview, StatusPolicy, ACCESS_TOKEN_HEADER};

impl super::JlcHttpClient {
    /// Authenticated GET decoding the JSON body into `T`
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        token: &AccessToken,
        policy: StatusPolicy,
    ) -> Result<T, ApiError> {
        let token_value = header::HeaderValue::from_str(token.as_str())
            .map_err(|e| ApiError::Transport(format!("Access token is not a valid header: {}", e)))?;

        log::debug!("GET {} (token {})", url.path(), token.redacted());

        let response = self
            .client
            .get(url.clone())
            .header(ACCESS_TOKEN_HEADER, token_value)
            .header(
                header::ACCEPT,
                header::HeaderValue::from_static("application/json, text/plain, */*"),
            )
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        log::info!("{} response status: {}", url.path(), status);

        if status == StatusCode::UNAUTHORIZED && policy == StatusPolicy::AuthoritativeUnauthorized {
            return Err(ApiError::Unauthorized);
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() && policy != StatusPolicy::Ignore {
            log::warn!(
                "{} returned non-success status {}: {}",
                url.path(),
                status,
                preview(&text, 200)
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: preview(&text, 200),
            });
        }

        log::debug!("{} response body: {}", url.path(), preview(&text, 500));

        serde_json::from_str(&text).map_err(|e| {
            log::warn!("Failed to parse {} response: {}", url.path(), e);
            ApiError::Decode(format!("{}; body: {}", e, preview(&text, 200)))
        })
    }
}
