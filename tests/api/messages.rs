use crate::helpers::{subscriber_body, TestApp};

#[tokio::test]
async fn send_reminder_records_a_sent_log_naming_the_subscriber() {
    let test_app = TestApp::spawn_app();

    let created: serde_json::Value = test_app
        .post_subscriber(&subscriber_body(3))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = test_app
        .post_message(&serde_json::json!({
            "subscriberId": id,
            "messageType": "recordatorio",
        }))
        .await;

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("MARÍA LÓPEZ"));
    assert_eq!(body["messageLog"]["status"], "sent");
    assert_eq!(body["messageLog"]["messageType"], "recordatorio");

    let composed = body["messageLog"]["message"].as_str().unwrap();
    assert!(composed.contains("MARÍA LÓPEZ"));
    assert!(composed.contains("NETFLIX"));

    let entries = test_app.message_logs.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].subscriber_id, id);
}

#[tokio::test]
async fn send_expiration_notice_mentions_the_remaining_days() {
    let test_app = TestApp::spawn_app();

    let created: serde_json::Value = test_app
        .post_subscriber(&subscriber_body(3))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let body: serde_json::Value = test_app
        .post_message(&serde_json::json!({
            "subscriberId": id,
            "messageType": "vencimiento",
        }))
        .await
        .json()
        .await
        .unwrap();

    let composed = body["messageLog"]["message"].as_str().unwrap();
    assert!(composed.contains("vence en 3 días"));
}

#[tokio::test]
async fn send_custom_message_uses_the_caller_text() {
    let test_app = TestApp::spawn_app();

    let created: serde_json::Value = test_app
        .post_subscriber(&subscriber_body(10))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let body: serde_json::Value = test_app
        .post_message(&serde_json::json!({
            "subscriberId": id,
            "messageType": "personalizado",
            "message": "Oferta: renueva dos meses por uno.",
        }))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(
        body["messageLog"]["message"],
        "Oferta: renueva dos meses por uno."
    );
}

#[tokio::test]
async fn send_custom_message_without_text_falls_back_to_the_placeholder() {
    let test_app = TestApp::spawn_app();

    let created: serde_json::Value = test_app
        .post_subscriber(&subscriber_body(10))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let body: serde_json::Value = test_app
        .post_message(&serde_json::json!({
            "subscriberId": id,
            "messageType": "personalizado",
        }))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(body["messageLog"]["message"], "Mensaje personalizado enviado.");
}

#[tokio::test]
async fn send_to_an_unknown_subscriber_returns_404_and_records_nothing() {
    let test_app = TestApp::spawn_app();

    let response = test_app
        .post_message(&serde_json::json!({
            "subscriberId": "does-not-exist",
            "messageType": "recordatorio",
        }))
        .await;

    assert_eq!(404, response.status().as_u16());
    assert!(test_app.message_logs.entries().is_empty());
}
