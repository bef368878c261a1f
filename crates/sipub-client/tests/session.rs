//! End-to-end tests for `IntakeSession`: map click, push to form, submit.

use serde_json::json;
use sipub_client::{
    EnrichError, GeocodeEnricher, IntakeSession, ResourceApiClient, ReverseGeocoder,
    SubmissionPipeline,
};
use sipub_core::NotificationKind;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_session(server: &MockServer) -> IntakeSession {
    let geocoder = ReverseGeocoder::new(&format!("{}/reverse", server.uri()), 5, "sipub-test/0.1")
        .expect("client construction should not fail");
    let api = ResourceApiClient::new(&server.uri(), 5, "sipub-test/0.1")
        .expect("client construction should not fail");
    IntakeSession::new(GeocodeEnricher::new(geocoder), SubmissionPipeline::new(api))
}

#[tokio::test]
async fn push_before_click_posts_error_and_keeps_form() {
    let server = MockServer::start().await;
    let mut session = test_session(&server);
    session.form_mut().email = "ana@example.com".to_string();

    let err = session.push_to_form().unwrap_err();

    assert!(matches!(err, EnrichError::NoLocationSelected));
    assert_eq!(session.form().email, "ana@example.com");
    assert_eq!(session.form().geolocation, "");
    let current = session.banner().current().unwrap();
    assert_eq!(current.kind, NotificationKind::Error);
    assert_eq!(
        current.message,
        "Please click on the map to select a location first."
    );
}

#[tokio::test]
async fn click_push_and_submit_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "display_name": "Brasília, DF",
            "address": { "city": "Brasília", "state": "DF", "country": "Brasil" }
        })))
        .mount(&server)
        .await;
    for route in ["/u", "/addresses", "/products"] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut session = test_session(&server);
    session.form_mut().email = "ana@example.com".to_string();
    session.form_mut().number = "1".to_string();

    session.click_map(-15.79, -47.88).await.unwrap();
    session.push_to_form().unwrap();

    assert_eq!(session.form().geolocation, "-15.79, -47.88");
    assert_eq!(session.form().street, "Brasília, DF");
    assert_eq!(session.form().city, "Brasília");
    assert_eq!(
        session.banner().current().map(|n| n.message.as_str()),
        Some("Form populated with map data!")
    );

    let report = session.submit().await.unwrap();

    assert!(report.all_succeeded());
    assert!(session.form().is_empty());
}

#[tokio::test]
async fn geocode_failure_is_posted_to_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut session = test_session(&server);
    let err = session.click_map(1.0, 2.0).await.unwrap_err();

    assert!(matches!(err, EnrichError::GeocodeService(_)));
    let current = session.banner().current().unwrap();
    assert_eq!(current.kind, NotificationKind::Error);
    assert!(current.message.starts_with("Erro: reverse geocoding failed"));
}

#[tokio::test]
async fn invalid_form_is_posted_to_banner() {
    let server = MockServer::start().await;
    let mut session = test_session(&server);
    session.form_mut().geolocation = "not a location".to_string();

    assert!(session.submit().await.is_err());
    let current = session.banner().current().unwrap();
    assert_eq!(current.kind, NotificationKind::Error);
    assert!(current.message.contains("malformed coordinate input"));
}
