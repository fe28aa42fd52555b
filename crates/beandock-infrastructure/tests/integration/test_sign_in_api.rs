//! Integration tests for `JlcHttpClient` against a mock platform

use serde_json::json;
use wiremock::ResponseTemplate;

use beandock_domain::check_in::{ApiError, SignInApi};
use beandock_infrastructure::http::client::{ASSETS_PATH, VOUCHER_PATH};

use crate::common;

#[tokio::test]
async fn test_fetch_assets_decodes_payload() {
    let (server, client) = common::setup_client().await;
    common::mount_get(
        &server,
        ASSETS_PATH,
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "code": 200,
            "data": { "customerCode": "AB1234CD", "integralVoucher": 100 }
        })),
    )
    .await;

    let envelope = client
        .fetch_assets(&common::token())
        .await
        .expect("fetch_assets failed");

    let info = envelope.payload().expect("payload");
    assert_eq!(info.customer_code(), "AB1234CD");
    assert_eq!(info.integral_voucher(), 100);
}

#[tokio::test]
async fn test_fetch_assets_401_is_unauthorized() {
    let (server, client) = common::setup_client().await;
    common::mount_get(&server, ASSETS_PATH, ResponseTemplate::new(401)).await;

    let err = client.fetch_assets(&common::token()).await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
}

#[tokio::test]
async fn test_fetch_assets_server_error_is_status() {
    let (server, client) = common::setup_client().await;
    common::mount_get(
        &server,
        ASSETS_PATH,
        ResponseTemplate::new(503).set_body_string("maintenance"),
    )
    .await;

    let err = client.fetch_assets(&common::token()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 503,
            body: "maintenance".to_string()
        }
    );
}

#[tokio::test]
async fn test_sign_in_decodes_result() {
    let (server, client) = common::setup_client().await;
    common::mount_sign_in(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "签到成功",
            "data": { "gainNum": 5, "status": 1 }
        })),
    )
    .await;

    let envelope = client.sign_in(&common::token()).await.expect("sign_in failed");
    assert!(envelope.is_success());
    assert_eq!(envelope.gain_num(), 5);
    assert_eq!(envelope.status(), 1);
}

#[tokio::test]
async fn test_sign_in_401_is_not_token_signal() {
    let (server, client) = common::setup_client().await;
    common::mount_sign_in(&server, ResponseTemplate::new(401)).await;

    let err = client.sign_in(&common::token()).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_sign_in_html_body_is_decode_error() {
    let (server, client) = common::setup_client().await;
    common::mount_sign_in(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>blocked</html>"),
    )
    .await;

    let err = client.sign_in(&common::token()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{:?}", err);
}

#[tokio::test]
async fn test_voucher_body_read_regardless_of_status() {
    let (server, client) = common::setup_client().await;
    common::mount_get(
        &server,
        VOUCHER_PATH,
        ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "未满足领取条件"
        })),
    )
    .await;

    let envelope = client
        .receive_voucher(&common::token())
        .await
        .expect("receive_voucher failed");
    assert!(!envelope.is_success());
    assert_eq!(envelope.message.as_deref(), Some("未满足领取条件"));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = common::unreachable_client();

    let err = client.fetch_assets(&common::token()).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{:?}", err);
}
