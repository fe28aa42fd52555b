use reqwest::Client;
use serde_json::Value;

use beandock_domain::shared::DomainError;

/// How a robot webhook reports the result inside a 200 response
pub(crate) struct ReplyFormat {
    pub channel: &'static str,
    /// Numeric field that is 0 on success
    pub code_field: &'static str,
    pub message_field: &'static str,
}

/// POST a JSON payload to a robot webhook.
///
/// Transport failures are `Network`; rejected requests and non-zero
/// reply codes are `Infrastructure`. A reply without the code field is
/// accepted.
pub(crate) async fn post_json(
    client: &Client,
    url: &str,
    payload: &Value,
    format: &ReplyFormat,
) -> Result<(), DomainError> {
    let channel = format.channel;

    let response = client.post(url).json(payload).send().await.map_err(|e| {
        DomainError::Network(format!("Failed to send {} notification: {}", channel, e))
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(DomainError::Infrastructure(format!(
            "{} webhook failed with status {}: {}",
            channel, status, body
        )));
    }

    let reply: Value = response.json().await.map_err(|e| {
        DomainError::Infrastructure(format!("Failed to parse {} response: {}", channel, e))
    })?;

    match reply.get(format.code_field).and_then(Value::as_i64) {
        Some(0) | None => Ok(()),
        Some(code) => {
            let msg = reply
                .get(format.message_field)
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            Err(DomainError::Infrastructure(format!(
                "{} webhook error code {}: {}",
                channel, code, msg
            )))
        }
    }
}
