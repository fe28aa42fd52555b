//! Shared helpers for the JLC API integration tests
//!
//! Mounts wiremock endpoints that mimic the mobile API and returns a
//! `JlcHttpClient` pointing at the mock server.

use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use beandock_domain::AccessToken;
use beandock_infrastructure::config::TimeoutConfig;
use beandock_infrastructure::http::client::{ACCESS_TOKEN_HEADER, USER_AGENT};
use beandock_infrastructure::http::JlcHttpClient;

pub const TEST_TOKEN: &str = "test-access-token-0001";

pub fn token() -> AccessToken {
    AccessToken::new(TEST_TOKEN).expect("valid token")
}

pub async fn setup_client() -> (MockServer, JlcHttpClient) {
    let server = MockServer::start().await;
    let timeouts = TimeoutConfig::new().with_http_request(Duration::from_secs(2));
    let client = JlcHttpClient::with_base_url(&server.uri(), &timeouts).expect("client");
    (server, client)
}

// UA contains commas, so compare the raw header instead of `header()`
fn has_app_user_agent(request: &Request) -> bool {
    request
        .headers
        .get("user-agent")
        .map(|value| value.as_bytes() == USER_AGENT.as_bytes())
        .unwrap_or(false)
}

/// Mount GET `route` (path only) answering with `response`, requiring the
/// token and app user agent headers
pub async fn mount_get(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header(ACCESS_TOKEN_HEADER, TEST_TOKEN))
        .and(has_app_user_agent)
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_sign_in(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/activity/sign/signIn"))
        .and(query_param("source", "3"))
        .and(header(ACCESS_TOKEN_HEADER, TEST_TOKEN))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Client aimed at a port nothing listens on
pub fn unreachable_client() -> JlcHttpClient {
    let timeouts = TimeoutConfig::new().with_http_request(Duration::from_secs(2));
    JlcHttpClient::with_base_url("http://127.0.0.1:1", &timeouts).expect("client")
}
