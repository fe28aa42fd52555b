//! Integration tests for the Feishu webhook sender

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use beandock_domain::notification::{NotificationMessage, NotificationSender};
use beandock_infrastructure::notification::FeishuWebhookSender;

fn sender(server: &MockServer) -> FeishuWebhookSender {
    FeishuWebhookSender::new("hook-key".to_string(), Duration::from_secs(2))
        .expect("sender")
        .with_api_base(server.uri())
}

#[tokio::test]
async fn test_send_rich_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/open-apis/bot/v2/hook/hook-key"))
        .and(body_partial_json(json!({ "msg_type": "post" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let result = sender(&server)
        .send(&NotificationMessage::new("嘉立创签到汇总", "✅ 签到成功"))
        .await;
    assert!(result.is_ok(), "{:?}", result);
}

#[tokio::test]
async fn test_rejected_rich_message_falls_back_to_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/open-apis/bot/v2/hook/hook-key"))
        .and(body_partial_json(json!({ "msg_type": "post" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "code": 9499, "msg": "bad post" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/open-apis/bot/v2/hook/hook-key"))
        .and(body_partial_json(json!({ "msg_type": "text" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let result = sender(&server)
        .send(&NotificationMessage::new("title", "body"))
        .await;
    assert!(result.is_ok(), "{:?}", result);
}

#[tokio::test]
async fn test_error_code_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/open-apis/bot/v2/hook/hook-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "code": 19001, "msg": "param invalid" })),
        )
        .mount(&server)
        .await;

    let err = sender(&server)
        .send(&NotificationMessage::new("title", "body"))
        .await
        .unwrap_err();
    assert!(err.message().contains("19001"), "{}", err);
}
