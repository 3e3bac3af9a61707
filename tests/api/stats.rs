use crate::helpers::{subscriber_body, TestApp};

#[tokio::test]
async fn stats_of_an_empty_collection_are_all_zero() {
    let test_app = TestApp::spawn_app();

    let response = test_app.get_stats().await;

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"], 0);
    assert_eq!(body["active"], 0);
    assert_eq!(body["expiring"], 0);
    assert_eq!(body["expired"], 0);
    assert_eq!(body["revenue"], 0.0);
}

#[tokio::test]
async fn stats_count_every_tier_and_price_the_live_subscriptions() {
    let test_app = TestApp::spawn_app();
    test_app.post_subscriber(&subscriber_body(15)).await;
    test_app.post_subscriber(&subscriber_body(30)).await;
    test_app.post_subscriber(&subscriber_body(3)).await;
    test_app.post_subscriber(&subscriber_body(-5)).await;

    let body: serde_json::Value = test_app.get_stats().await.json().await.unwrap();

    assert_eq!(body["total"], 4);
    assert_eq!(body["active"], 2);
    assert_eq!(body["expiring"], 1);
    assert_eq!(body["expired"], 1);
    // 3 not-yet-expired subscriptions at 15.0 each
    assert_eq!(body["revenue"], 45.0);
}
