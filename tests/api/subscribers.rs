use chrono::{Duration, Utc};

use stream_manager::domain::service_type::ServiceType;
use stream_manager::domain::subscriber::Subscriber;
use stream_manager::domain::subscriber_email::SubscriberEmail;
use stream_manager::domain::subscriber_name::SubscriberName;
use stream_manager::domain::subscriber_phone::SubscriberPhone;
use stream_manager::domain::subscriber_status::SubscriberStatus;
use stream_manager::storage::SubscriberStore;

use crate::helpers::{date_in, subscriber_body, TestApp};

/// Row whose stored derived fields contradict its expiration date, as if it
/// had not been touched in a long time.
fn stale_subscriber(id: &str) -> Subscriber {
    let now = Utc::now();

    Subscriber {
        id: id.to_string(),
        service: ServiceType::Spotify,
        name: SubscriberName::parse(String::from("Carlos")).unwrap(),
        phone: SubscriberPhone::parse(String::from("655444333")).unwrap(),
        email: SubscriberEmail::parse(String::from("carlos@test.com")).unwrap(),
        expiration_date: now.date_naive() - Duration::days(1),
        status: SubscriberStatus::Active,
        days_remaining: 99,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn create_returns_the_normalized_subscriber_with_derived_fields() {
    let test_app = TestApp::spawn_app();

    let response = test_app.post_subscriber(&subscriber_body(15)).await;

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["service"], "NETFLIX");
    assert_eq!(body["name"], "MARÍA LÓPEZ");
    assert_eq!(body["phone"], "34611222333");
    assert_eq!(body["email"], "maria@test.com");
    assert_eq!(body["status"], "active");
    assert_eq!(body["daysRemaining"], 15);
    assert!(!body["createdAt"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn create_soon_expiring_subscriber_is_expiring() {
    let test_app = TestApp::spawn_app();

    let response = test_app.post_subscriber(&subscriber_body(3)).await;

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "expiring");
    assert_eq!(body["daysRemaining"], 3);
}

#[tokio::test]
async fn create_past_expiration_subscriber_is_expired() {
    let test_app = TestApp::spawn_app();

    let response = test_app.post_subscriber(&subscriber_body(-5)).await;

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "expired");
    assert_eq!(body["daysRemaining"], -5);
}

#[tokio::test]
async fn the_seven_day_boundary_is_expiring_and_eight_is_active() {
    let test_app = TestApp::spawn_app();

    let on_boundary = test_app.post_subscriber(&subscriber_body(7)).await;
    let past_boundary = test_app.post_subscriber(&subscriber_body(8)).await;

    let on_boundary: serde_json::Value = on_boundary.json().await.unwrap();
    let past_boundary: serde_json::Value = past_boundary.json().await.unwrap();

    assert_eq!(on_boundary["status"], "expiring");
    assert_eq!(past_boundary["status"], "active");
}

#[tokio::test]
async fn create_returns_400_when_body_is_present_but_not_valid() {
    let test_app = TestApp::spawn_app();

    // This is a common practice and it is called table-driven tests. In this case, it simulates different kind of possible request bodies
    // where API should return 400.
    let test_cases: Vec<(serde_json::Value, &str)> = vec![
        (
            serde_json::json!({
                "service": "NETFLIX",
                "name": "Ana",
                "phone": "61122",
                "email": "ana@test.com",
                "expirationDate": date_in(10).to_string(),
            }),
            "phone with fewer than 9 digits",
        ),
        (
            serde_json::json!({
                "service": "NETFLIX",
                "name": "Ana",
                "phone": "611222333",
                "email": "test.com",
                "expirationDate": date_in(10).to_string(),
            }),
            "malformed email",
        ),
        (
            serde_json::json!({
                "service": "NETFLIX",
                "name": "   ",
                "phone": "611222333",
                "email": "ana@test.com",
                "expirationDate": date_in(10).to_string(),
            }),
            "blank name",
        ),
        (
            serde_json::json!({
                "service": "BLOCKBUSTER",
                "name": "Ana",
                "phone": "611222333",
                "email": "ana@test.com",
                "expirationDate": date_in(10).to_string(),
            }),
            "service outside the catalog",
        ),
        (
            serde_json::json!({
                "name": "Ana",
                "phone": "611222333",
                "email": "ana@test.com",
            }),
            "missing service and expirationDate",
        ),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = test_app.post_subscriber(&invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 status when payload was {}",
            error_message
        );
    }
}

#[tokio::test]
async fn list_returns_every_subscriber_and_the_total() {
    let test_app = TestApp::spawn_app();
    test_app.post_subscriber(&subscriber_body(15)).await;
    test_app.post_subscriber(&subscriber_body(3)).await;

    let response = test_app.get_subscribers().await;

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"], 2);
    assert_eq!(body["subscribers"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn listing_twice_yields_the_same_derived_fields() {
    let test_app = TestApp::spawn_app();
    test_app.post_subscriber(&subscriber_body(3)).await;

    let first: serde_json::Value = test_app.get_subscribers().await.json().await.unwrap();
    let second: serde_json::Value = test_app.get_subscribers().await.json().await.unwrap();

    assert_eq!(
        first["subscribers"][0]["status"],
        second["subscribers"][0]["status"]
    );
    assert_eq!(
        first["subscribers"][0]["daysRemaining"],
        second["subscribers"][0]["daysRemaining"]
    );
}

#[tokio::test]
async fn get_by_id_round_trips_the_created_subscriber() {
    let test_app = TestApp::spawn_app();

    let created: serde_json::Value = test_app
        .post_subscriber(&subscriber_body(15))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = test_app.get_subscriber(id).await;

    assert_eq!(200, response.status().as_u16());

    let fetched: serde_json::Value = response.json().await.unwrap();
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], "MARÍA LÓPEZ");
    assert_eq!(fetched["status"], "active");
    assert_eq!(fetched["daysRemaining"], 15);
}

#[tokio::test]
async fn get_by_id_refreshes_the_response_without_touching_the_stored_row() {
    let test_app = TestApp::spawn_app();
    test_app
        .subscribers
        .insert(&stale_subscriber("stale"))
        .await
        .unwrap();

    let fetched: serde_json::Value = test_app
        .get_subscriber("stale")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(fetched["status"], "expired");
    assert_eq!(fetched["daysRemaining"], -1);

    let stored = test_app.subscribers.find_one("stale").await.unwrap().unwrap();
    assert!(stored.status.is_active());
    assert_eq!(stored.days_remaining, 99);
}

#[tokio::test]
async fn listing_writes_the_recomputed_fields_back_to_the_store() {
    let test_app = TestApp::spawn_app();
    test_app
        .subscribers
        .insert(&stale_subscriber("stale"))
        .await
        .unwrap();

    test_app.get_subscribers().await;

    let stored = test_app.subscribers.find_one("stale").await.unwrap().unwrap();
    assert!(stored.status.is_expired());
    assert_eq!(stored.days_remaining, -1);
}

#[tokio::test]
async fn get_of_unknown_id_returns_404() {
    let test_app = TestApp::spawn_app();

    let response = test_app.get_subscriber("does-not-exist").await;

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn update_of_name_only_keeps_the_derived_fields() {
    let test_app = TestApp::spawn_app();

    let created: serde_json::Value = test_app
        .post_subscriber(&subscriber_body(15))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = test_app
        .put_subscriber(id, &serde_json::json!({ "name": "ana garcía" }))
        .await;

    assert_eq!(200, response.status().as_u16());

    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["name"], "ANA GARCÍA");
    assert_eq!(updated["status"], "active");
    assert_eq!(updated["daysRemaining"], 15);
}

#[tokio::test]
async fn update_of_expiration_date_recomputes_the_derived_fields() {
    let test_app = TestApp::spawn_app();

    let created: serde_json::Value = test_app
        .post_subscriber(&subscriber_body(15))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = test_app
        .put_subscriber(
            id,
            &serde_json::json!({ "expirationDate": date_in(2).to_string() }),
        )
        .await;

    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["status"], "expiring");
    assert_eq!(updated["daysRemaining"], 2);
}

#[tokio::test]
async fn update_with_an_invalid_phone_returns_400() {
    let test_app = TestApp::spawn_app();

    let created: serde_json::Value = test_app
        .post_subscriber(&subscriber_body(15))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = test_app
        .put_subscriber(id, &serde_json::json!({ "phone": "12345" }))
        .await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn update_of_unknown_id_returns_404() {
    let test_app = TestApp::spawn_app();

    let response = test_app
        .put_subscriber("does-not-exist", &serde_json::json!({ "name": "Ana" }))
        .await;

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn delete_removes_the_subscriber() {
    let test_app = TestApp::spawn_app();

    let created: serde_json::Value = test_app
        .post_subscriber(&subscriber_body(15))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = test_app.delete_subscriber(id).await;

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Subscriber deleted successfully");

    assert_eq!(404, test_app.get_subscriber(id).await.status().as_u16());
    assert_eq!(404, test_app.delete_subscriber(id).await.status().as_u16());
}
