//! Integration tests for `SubmissionPipeline` using wiremock HTTP mocks.
//!
//! Each test stands up a local server playing the resource API and checks the
//! per-resource outcomes, the banner, and the form reset behaviour.

use serde_json::json;
use sipub_client::{ResourceApiClient, SubmissionError, SubmissionPipeline};
use sipub_core::{CoreError, FormState, NotificationKind, Resource, StatusBanner};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_pipeline(server: &MockServer) -> SubmissionPipeline {
    let api = ResourceApiClient::new(&server.uri(), 5, "sipub-test/0.1")
        .expect("client construction should not fail");
    SubmissionPipeline::new(api)
}

fn filled_form() -> FormState {
    FormState {
        email: "ana@example.com".to_string(),
        cpf: "123.456.789-00".to_string(),
        name: "Ana".to_string(),
        geolocation: " -15.79 , -47.88 ".to_string(),
        street: "Eixo Monumental".to_string(),
        number: "1".to_string(),
        neighborhood: "Asa Norte".to_string(),
        complement: "Bloco A".to_string(),
        city: "Brasília".to_string(),
        state: "DF".to_string(),
        country: "Brasil".to_string(),
        weight: "250".to_string(),
        price: "19.5".to_string(),
        product_name: "Café".to_string(),
    }
}

async fn mount_created(server: &MockServer, route: &str, id: &str) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": id })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn all_three_resources_are_created_with_expected_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/u"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "IsActive": true,
            "IsDeleted": false,
            "Email": "ana@example.com",
            "Cpf": "123.456.789-00",
            "Name": "Ana"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": "user-1" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/addresses"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "IsActive": true,
            "IsDeleted": false,
            "Street": "Eixo Monumental",
            "Number": "1",
            "Neighborhood": "Asa Norte",
            "Complement": "Bloco A",
            "City": "Brasília",
            "State": "DF",
            "Country": "Brasil",
            "Latitude": -15.79,
            "Longitude": -47.88
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": "addr-1" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "IsActive": true,
            "IsDeleted": false,
            "WeightGrams": 250.0,
            "Price": 19.5,
            "Name": "Café"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": "prod-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server);
    let mut form = filled_form();
    let mut banner = StatusBanner::new();

    let report = pipeline
        .submit(&mut form, &mut banner)
        .await
        .expect("form is valid");

    assert!(report.all_succeeded());
    assert_eq!(report.customer.as_ref().unwrap().id.as_deref(), Some("user-1"));
    assert_eq!(report.address.as_ref().unwrap().id.as_deref(), Some("addr-1"));
    assert_eq!(report.product.as_ref().unwrap().id.as_deref(), Some("prod-1"));
    assert!(form.is_empty(), "form should be reset after success");
    assert_eq!(banner.history().len(), 3);
    assert_eq!(
        banner.current().map(|n| n.message.as_str()),
        Some("Dados enviados com sucesso!")
    );
}

#[tokio::test]
async fn customer_failure_does_not_halt_pipeline() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/u"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_created(&server, "/addresses", "addr-1").await;
    mount_created(&server, "/products", "prod-1").await;

    let pipeline = test_pipeline(&server);
    let mut form = filled_form();
    let mut banner = StatusBanner::new();

    let report = pipeline.submit(&mut form, &mut banner).await.unwrap();

    let failure = report.customer.as_ref().unwrap_err();
    assert_eq!(failure.resource, Resource::Customer);
    assert_eq!(failure.detail, "HTTP 500");
    assert!(report.address.is_ok());
    assert!(report.product.is_ok());
    assert_eq!(report.failures().len(), 1);
    assert!(!report.all_succeeded());

    let kinds: Vec<NotificationKind> = banner.history().iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NotificationKind::Error,
            NotificationKind::Success,
            NotificationKind::Success
        ]
    );
}

#[tokio::test]
async fn requests_are_sent_in_fixed_order() {
    let server = MockServer::start().await;
    mount_created(&server, "/u", "user-1").await;
    mount_created(&server, "/addresses", "addr-1").await;
    mount_created(&server, "/products", "prod-1").await;

    let pipeline = test_pipeline(&server);
    pipeline
        .submit(&mut filled_form(), &mut StatusBanner::new())
        .await
        .unwrap();

    let requests = server.received_requests().await.expect("recording enabled");
    let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert_eq!(paths, vec!["/u", "/addresses", "/products"]);
}

#[tokio::test]
async fn product_outcome_wins_the_banner() {
    let server = MockServer::start().await;
    mount_created(&server, "/u", "user-1").await;
    mount_created(&server, "/addresses", "addr-1").await;
    Mock::given(method("POST"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid WeightGrams\n"))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server);
    let mut banner = StatusBanner::new();
    let report = pipeline
        .submit(&mut filled_form(), &mut banner)
        .await
        .unwrap();

    assert_eq!(
        report.product.as_ref().unwrap_err().detail,
        "HTTP 400: Invalid WeightGrams"
    );
    let current = banner.current().unwrap();
    assert_eq!(current.kind, NotificationKind::Error);
    assert_eq!(current.message, "Erro: HTTP 400: Invalid WeightGrams");
}

#[tokio::test]
async fn payloads_are_built_before_the_form_is_reset() {
    let server = MockServer::start().await;
    mount_created(&server, "/u", "user-1").await;
    // The customer success clears the form; the address must still carry
    // the submitted snapshot.
    Mock::given(method("POST"))
        .and(path("/addresses"))
        .and(body_json(json!({
            "IsActive": true,
            "IsDeleted": false,
            "Street": "Eixo Monumental",
            "Number": "1",
            "Neighborhood": "Asa Norte",
            "Complement": "Bloco A",
            "City": "Brasília",
            "State": "DF",
            "Country": "Brasil",
            "Latitude": -15.79,
            "Longitude": -47.88
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    mount_created(&server, "/products", "prod-1").await;

    let pipeline = test_pipeline(&server);
    let report = pipeline
        .submit(&mut filled_form(), &mut StatusBanner::new())
        .await
        .unwrap();

    let address = report.address.as_ref().unwrap();
    assert_eq!(address.status, 201);
    assert!(address.id.is_none(), "empty body carries no id");
}

#[tokio::test]
async fn malformed_geolocation_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server);
    let mut form = FormState {
        geolocation: "-15.79".to_string(),
        ..filled_form()
    };
    let before = form.clone();
    let mut banner = StatusBanner::new();

    let err = pipeline.submit(&mut form, &mut banner).await.unwrap_err();

    assert!(matches!(
        err,
        SubmissionError::Invalid(CoreError::MalformedCoordinateInput { .. })
    ));
    assert_eq!(form, before);
    assert!(banner.current().is_none());
}

#[tokio::test]
async fn unreachable_api_reports_every_resource_as_failed() {
    // Port 9 (discard) is not listening on the loopback interface.
    let api = ResourceApiClient::new("http://127.0.0.1:9", 2, "sipub-test/0.1").unwrap();
    let pipeline = SubmissionPipeline::new(api);
    let mut form = filled_form();

    let report = pipeline
        .submit(&mut form, &mut StatusBanner::new())
        .await
        .unwrap();

    assert_eq!(report.failures().len(), 3);
    assert_eq!(form, filled_form(), "form is kept when nothing succeeded");
}
