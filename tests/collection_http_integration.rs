//! Integration tests for the HTTP collection adapter.
//!
//! These tests run the reqwest adapter against a local mock server:
//! 1. Account creation sends the four-field JSON body
//! 2. Non-2xx creation responses surface as status errors
//! 3. Listing parses the body whatever the status

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use member_portal::adapters::collection::{HttpCollectionConfig, HttpMemberCollection};
use member_portal::domain::directory::{normalize_collection, Member};
use member_portal::domain::registration::{RegistrationForm, RegistrationPayload};
use member_portal::ports::{CollectionError, MemberCollection};

// =============================================================================
// Test Infrastructure
// =============================================================================

const COLLECTION_PATH: &str = "/c/members";

// Nothing listens on the discard port.
const UNREACHABLE_URL: &str = "http://127.0.0.1:9/c/members";

fn adapter(server: &MockServer) -> HttpMemberCollection {
    let url = format!("{}{}", server.uri(), COLLECTION_PATH);
    HttpMemberCollection::new(HttpCollectionConfig::new(url)).unwrap()
}

fn payload() -> RegistrationPayload {
    let mut form = RegistrationForm::new();
    form.set_name("Ada Lovelace");
    form.set_phone("5551234567");
    form.set_email("ada@example.com");
    form.set_password("analytical");
    form.validate().unwrap()
}

// =============================================================================
// Account Creation
// =============================================================================

#[tokio::test]
async fn create_member_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Ada Lovelace",
            "phone": "5551234567",
            "email": "ada@example.com",
            "password": "analytical"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    adapter(&server).create_member(&payload()).await.unwrap();
}

#[tokio::test]
async fn create_member_maps_non_success_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "error": "taken" })))
        .mount(&server)
        .await;

    let err = adapter(&server).create_member(&payload()).await.unwrap_err();

    assert!(matches!(err, CollectionError::Status(422)));
}

#[tokio::test]
async fn create_member_reports_unreachable_endpoint_as_network_error() {
    let collection =
        HttpMemberCollection::new(HttpCollectionConfig::new(UNREACHABLE_URL)).unwrap();
    let err = collection.create_member(&payload()).await.unwrap_err();

    assert!(matches!(err, CollectionError::Network(_)));
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn fetch_collection_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [
                { "Name": "Ada", "Email": "ada@example.com", "PhoneNumber": 5551234567_u64 },
                { "Name": "Grace", "Gender": "F" }
            ]
        })))
        .mount(&server)
        .await;

    let body = adapter(&server).fetch_collection().await.unwrap();
    let members = normalize_collection(&body);

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].phone_number.as_deref(), Some("5551234567"));
    assert_eq!(members[1], Member {
        gender: Some("F".to_string()),
        ..Member::named("Grace")
    });
}

#[tokio::test]
async fn fetch_collection_parses_error_status_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "not found" })))
        .mount(&server)
        .await;

    let body = adapter(&server).fetch_collection().await.unwrap();

    assert!(normalize_collection(&body).is_empty());
}

#[tokio::test]
async fn fetch_collection_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = adapter(&server).fetch_collection().await.unwrap_err();

    assert!(matches!(err, CollectionError::Decode(_)));
}

#[tokio::test]
async fn fetch_collection_honours_configured_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let url = format!("{}{}", server.uri(), COLLECTION_PATH);
    let collection = HttpMemberCollection::new(
        HttpCollectionConfig::new(url).with_timeout(Duration::from_millis(100)),
    )
    .unwrap();

    let err = collection.fetch_collection().await.unwrap_err();

    assert!(matches!(err, CollectionError::Network(_)));
}
