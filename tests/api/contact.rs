use std::time::Duration;

use contact_relay::routes::MAX_BODY_BYTES;
use serde_json::json;
use wiremock::{
    matchers::{any, body_partial_json, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{spawn_app, OWNER_EMAIL};

const SUCCESS_MESSAGE: &str =
    "Email sent successfully! You will receive a confirmation email shortly.";
const FAILURE_MESSAGE: &str =
    "Failed to send email. Please try again or contact directly via phone/email.";

fn valid_body() -> String {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "message": "Hello"
    })
    .to_string()
}

#[tokio::test]
async fn contact_returns_a_200_for_a_valid_submission() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let res = app.post_contact(valid_body()).await;

    // Assert
    assert_eq!(res.status().as_u16(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"success": true, "message": SUCCESS_MESSAGE}));
}

#[tokio::test]
async fn contact_sends_one_email_to_the_owner_and_one_to_the_submitter() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    app.post_contact(valid_body()).await;

    let owner_email = app.sent_email_to(OWNER_EMAIL).await;
    assert_eq!(owner_email["Subject"], "Message from portfolio: Jane Doe");
    assert_eq!(owner_email["ReplyTo"], "jane@example.com");
    let html = owner_email["HtmlBody"].as_str().unwrap();
    assert!(html.contains("Jane Doe"));
    assert!(html.contains("jane@example.com"));
    assert!(html.contains("Hello"));

    let acknowledgement = app.sent_email_to("jane@example.com").await;
    assert!(acknowledgement["Subject"]
        .as_str()
        .unwrap()
        .starts_with("Thank you for contacting"));
    let html = acknowledgement["HtmlBody"].as_str().unwrap();
    assert!(html.contains("Hello Jane Doe,"));
    assert!(html.contains("\"Hello\""));
}

#[tokio::test]
async fn contact_returns_a_400_when_fields_are_missing() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (json!({"email": "jane@example.com", "message": "Hello"}), "missing name"),
        (json!({"name": "Jane", "message": "Hello"}), "missing email"),
        (json!({"name": "Jane", "email": "jane@example.com"}), "missing message"),
        (json!({"name": "", "email": "jane@example.com", "message": "Hello"}), "empty name"),
        (json!({"name": "Jane", "email": "", "message": "Hello"}), "empty email"),
        (json!({"name": "Jane", "email": "jane@example.com", "message": ""}), "empty message"),
        (json!({"name": null, "email": "jane@example.com", "message": "Hello"}), "null name"),
        (json!({}), "empty body"),
    ];

    for (body, description) in test_cases {
        let res = app.post_contact(body.to_string()).await;
        assert_eq!(
            res.status().as_u16(),
            400,
            "Test Failed for: {}",
            description
        );
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(
            body,
            json!({"error": "All fields are required"}),
            "Test Failed for: {}",
            description
        );
    }
}

#[tokio::test]
async fn contact_returns_a_400_when_the_email_is_malformed() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        ("janeexample.com", "no at symbol"),
        ("jane@example", "no dot after the at symbol"),
        ("jane doe@example.com", "contains whitespace"),
        ("jane@@example.com", "double at symbol"),
    ];

    for (email, description) in test_cases {
        let body = json!({"name": "Jane", "email": email, "message": "Hello"});
        let res = app.post_contact(body.to_string()).await;
        assert_eq!(
            res.status().as_u16(),
            400,
            "Test Failed for: {}",
            description
        );
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(
            body,
            json!({"error": "Invalid email address"}),
            "Test Failed for: {}",
            description
        );
    }
}

#[tokio::test]
async fn contact_returns_a_500_when_the_email_service_fails() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let res = app.post_contact(valid_body()).await;

    assert_eq!(res.status().as_u16(), 500);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": FAILURE_MESSAGE}));
}

#[tokio::test]
async fn contact_returns_a_500_when_only_the_acknowledgement_is_rejected() {
    let app = spawn_app().await;

    Mock::given(body_partial_json(json!({"To": OWNER_EMAIL})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(body_partial_json(json!({"To": "jane@example.com"})))
        .respond_with(ResponseTemplate::new(422))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let res = app.post_contact(valid_body()).await;

    assert_eq!(res.status().as_u16(), 500);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": FAILURE_MESSAGE}));
}

#[tokio::test]
async fn contact_returns_a_500_when_only_the_owner_notification_is_rejected() {
    let app = spawn_app().await;

    Mock::given(body_partial_json(json!({"To": OWNER_EMAIL})))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(body_partial_json(json!({"To": "jane@example.com"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let res = app.post_contact(valid_body()).await;

    assert_eq!(res.status().as_u16(), 500);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": FAILURE_MESSAGE}));
}

#[tokio::test]
async fn contact_returns_a_500_when_the_email_service_is_too_slow() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .mount(&app.email_server)
        .await;

    let res = app.post_contact(valid_body()).await;

    assert_eq!(res.status().as_u16(), 500);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": FAILURE_MESSAGE}));
}

#[tokio::test]
async fn contact_returns_a_500_for_a_body_that_is_not_json() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let res = app.post_contact("name=Jane&email=jane@example.com".to_string()).await;

    assert_eq!(res.status().as_u16(), 500);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": FAILURE_MESSAGE}));
}

#[tokio::test]
async fn resubmitting_the_same_message_sends_it_again() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(4)
        .mount(&app.email_server)
        .await;

    for _ in 0..2 {
        let res = app.post_contact(valid_body()).await;
        assert_eq!(res.status().as_u16(), 200);
    }
}

#[tokio::test]
async fn contact_accepts_a_long_message() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let body = json!({
        "name": "Jane",
        "email": "jane@example.com",
        "message": "a".repeat(300_000)
    });
    let res = app.post_contact(body.to_string()).await;

    assert_eq!(res.status().as_u16(), 200);
}

#[tokio::test]
async fn contact_returns_a_json_500_for_an_oversized_body() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let body = json!({
        "name": "Jane",
        "email": "jane@example.com",
        "message": "a".repeat(MAX_BODY_BYTES + 1)
    });
    let res = app.post_contact(body.to_string()).await;

    assert_eq!(res.status().as_u16(), 500);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": FAILURE_MESSAGE}));
}

#[tokio::test]
async fn contact_returns_a_400_for_a_body_that_is_not_an_object() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (json!(["Jane Doe", "jane@example.com", "Hello"]), "positional array"),
        (json!("Jane Doe"), "bare string"),
        (json!(42), "bare number"),
    ];

    for (body, description) in test_cases {
        let res = app.post_contact(body.to_string()).await;
        assert_eq!(
            res.status().as_u16(),
            400,
            "Test Failed for: {}",
            description
        );
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(
            body,
            json!({"error": "All fields are required"}),
            "Test Failed for: {}",
            description
        );
    }
}
