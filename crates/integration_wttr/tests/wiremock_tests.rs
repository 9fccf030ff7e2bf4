//! Integration tests for the wttr.in client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! using recorded-shape fixtures for Melbourne, Seattle and Mamaroneck.

use domain::{AreaLabel, DominantCondition};
use integration_wttr::{WeatherClient, WttrClient, WttrConfig, WttrError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const MELBOURNE: &str = include_str!("fixtures/melbourne.json");
const SEATTLE: &str = include_str!("fixtures/seattle.json");
const MAMARONECK: &str = include_str!("fixtures/mamaroneck.json");

fn fixture(json: &str) -> serde_json::Value {
    #[allow(clippy::expect_used)]
    serde_json::from_str(json).expect("fixture is valid JSON")
}

/// Create a test client configured to use the mock server
fn create_test_client(mock_server: &MockServer) -> WttrClient {
    let config = WttrConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    WttrClient::new(config).expect("Failed to create client")
}

/// Mount a mock for `/{location}` with the given response
async fn setup_location_mock(mock_server: &MockServer, location: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{location}")))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_melbourne_view_model() {
    let mock_server = MockServer::start().await;
    setup_location_mock(
        &mock_server,
        "Melbourne",
        ResponseTemplate::new(200).set_body_json(fixture(MELBOURNE)),
    )
    .await;

    let client = create_test_client(&mock_server);
    let query = client.query_for("Melbourne").unwrap();
    let result = client.get_weather(&query).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let view = result.unwrap();
    assert_eq!(view.feels_like_temp_f, 47);
    assert_eq!(
        view.days.iter().map(|d| d.average_temp_f).collect::<Vec<_>>(),
        [49, 52, 55]
    );
    assert_eq!(view.region, "Victoria");
    assert_eq!(view.country, "Australia");
    assert_eq!(view.request_url, format!("{}/Melbourne?format=j1", mock_server.uri()));
}

#[tokio::test]
async fn test_seattle_selects_rain() {
    let mock_server = MockServer::start().await;
    setup_location_mock(
        &mock_server,
        "Seattle",
        ResponseTemplate::new(200).set_body_json(fixture(SEATTLE)),
    )
    .await;

    let client = create_test_client(&mock_server);
    let query = client.query_for("Seattle").unwrap();
    let view = client.get_weather(&query).await.unwrap();

    assert_eq!(view.dominant, DominantCondition::Rain);
    assert_eq!(view.dominant.icon(), "torrential-rain");
    assert_eq!(view.area_label, AreaLabel::Area);
}

#[tokio::test]
async fn test_mamaroneck_resolves_to_nearest_area() {
    let mock_server = MockServer::start().await;
    setup_location_mock(
        &mock_server,
        "mamaroneck",
        ResponseTemplate::new(200).set_body_json(fixture(MAMARONECK)),
    )
    .await;

    let client = create_test_client(&mock_server);
    let query = client.query_for("mamaroneck").unwrap();
    let view = client.get_weather(&query).await.unwrap();

    assert_eq!(view.area_label, AreaLabel::NearestArea);
    assert_eq!(view.area_name, "Orienta");
    assert_eq!(view.region, "New York");
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;
    setup_location_mock(
        &mock_server,
        "Melbourne",
        ResponseTemplate::new(503).set_body_string("Service Unavailable"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let query = client.query_for("Melbourne").unwrap();
    let result = client.get_weather(&query).await;

    assert!(
        matches!(result, Err(WttrError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unknown_location_is_request_failure() {
    let mock_server = MockServer::start().await;
    setup_location_mock(
        &mock_server,
        "Atlantis",
        ResponseTemplate::new(404).set_body_string("Unknown location"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let query = client.query_for("Atlantis").unwrap();
    let result = client.get_weather(&query).await;

    assert!(
        matches!(result, Err(WttrError::RequestFailed(ref m)) if m.contains("404")),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;
    setup_location_mock(
        &mock_server,
        "Melbourne",
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let query = client.query_for("Melbourne").unwrap();
    let result = client.get_weather(&query).await;

    assert!(
        matches!(result, Err(WttrError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;
    setup_location_mock(
        &mock_server,
        "Melbourne",
        ResponseTemplate::new(200).set_body_string("Sorry, we are running out of queries"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let query = client.query_for("Melbourne").unwrap();
    let result = client.get_weather(&query).await;

    assert!(
        matches!(result, Err(WttrError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_empty_object_is_malformed() {
    let mock_server = MockServer::start().await;
    setup_location_mock(
        &mock_server,
        "Melbourne",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let query = client.query_for("Melbourne").unwrap();
    let result = client.get_weather(&query).await;

    assert!(
        matches!(result, Err(WttrError::MalformedResponse(_))),
        "Expected MalformedResponse, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_server_is_connection_failure() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    let query = client.query_for("Melbourne").unwrap();
    drop(mock_server);

    let result = client.get_weather(&query).await;
    assert!(
        matches!(result, Err(WttrError::ConnectionFailed(_))),
        "Expected ConnectionFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_timeout_is_request_failure() {
    let mock_server = MockServer::start().await;
    setup_location_mock(
        &mock_server,
        "Melbourne",
        ResponseTemplate::new(200)
            .set_body_json(fixture(MELBOURNE))
            .set_delay(std::time::Duration::from_secs(3)),
    )
    .await;

    let client = WttrClient::new(WttrConfig {
        base_url: mock_server.uri(),
        timeout_secs: 1,
        ..Default::default()
    })
    .unwrap();
    let query = client.query_for("Melbourne").unwrap();
    let result = client.get_weather(&query).await;

    assert!(
        matches!(result, Err(WttrError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

// ============================================================================
// Request shape verification
// ============================================================================

#[tokio::test]
async fn test_request_asks_for_j1_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Seattle"))
        .and(query_param("format", "j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture(SEATTLE)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let query = client.query_for("Seattle").unwrap();
    let result = client.get_weather(&query).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_replay_fetches_stored_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Melbourne"))
        .and(query_param("format", "j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture(MELBOURNE)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let query = client.query_for("Melbourne").unwrap();
    let first = client.get_weather(&query).await.unwrap();

    let replayed = domain::WeatherQuery::from_history(&first.history_entry());
    let second = client.get_weather(&replayed).await.unwrap();

    assert_eq!(first, second);
}
