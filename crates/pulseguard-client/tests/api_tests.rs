//! Backend client tests against a mock HTTP server.

use pulseguard_client::{PulseClient, RetryConfig};
use pulseguard_core::PulseError;
use std::time::Duration;
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PulseClient {
    PulseClient::builder("test-token")
        .base_url(server.uri())
        .echo_url(format!("{}/echo", server.uri()))
        .retry(RetryConfig::new().max_retries(0))
        .build()
}

#[tokio::test]
async fn dns_lookup_normalizes_domain_before_dispatch() {
    let server = MockServer::start().await;

    // Only the normalized path is mounted; an un-normalized request would
    // miss the mock and fail the lookup.
    Mock::given(method("GET"))
        .and(path("/toolbox/dns/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "records": [
                {"type": "A", "name": "example.com", "value": "93.184.216.34", "ttl": 3600}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .dns()
        .lookup("HTTPS://Example.COM/path")
        .await
        .unwrap();

    assert_eq!(result.domain, "example.com");
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].record_type, "A");
    assert!(result.scan_time_ms > 0);
}

#[tokio::test]
async fn bearer_token_is_attached_to_backend_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/toolbox/dns/example.com"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "records": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).dns().lookup("example.com").await.unwrap();
    assert!(result.records.is_empty());
}

#[tokio::test]
async fn organization_header_is_sent_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/toolbox/dns/example.com"))
        .and(header("X-Organization-Id", "org-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "records": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PulseClient::builder("test-token")
        .base_url(server.uri())
        .organization("org-42")
        .retry(RetryConfig::new().max_retries(0))
        .build();

    client.dns().lookup("example.com").await.unwrap();
}

#[tokio::test]
async fn dns_records_tolerate_missing_optional_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/toolbox/dns/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "records": [
                {"type": "TXT", "name": "example.com", "value": "v=spf1 -all"},
                {"type": "MX", "name": "example.com", "value": "mail.example.com", "priority": 10}
            ]
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).dns().lookup("example.com").await.unwrap();

    assert_eq!(result.records[0].ttl, None);
    assert_eq!(result.records[0].priority, None);
    assert_eq!(result.records[1].priority, Some(10));
    assert_eq!(result.nameservers, None);
}

#[tokio::test]
async fn ip_lookup_keeps_absent_reputation_flags_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/toolbox/ip/203.0.113.9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ip": "203.0.113.9",
            "city": "Oslo",
            "isProxy": false
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).ip().lookup("203.0.113.9").await.unwrap();

    assert_eq!(result.is_proxy, Some(false));
    assert_eq!(result.is_vpn, None);
    assert_eq!(result.is_tor, None);
    assert_eq!(result.is_hosting, None);
    assert_eq!(result.city.as_deref(), Some("Oslo"));
}

#[tokio::test]
async fn ip_lookup_rejects_bad_input_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client.ip().lookup("not-an-ip").await.unwrap_err();
    assert!(matches!(err, PulseError::InvalidInput(_)));

    let err = client.ip().lookup("  ").await.unwrap_err();
    assert!(matches!(err, PulseError::InvalidInput(_)));

    // Nothing was sent upstream.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn upstream_failures_surface_as_typed_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/toolbox/dns/example.com"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"error": "boom"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).dns().lookup("example.com").await.unwrap_err();

    match err {
        PulseError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_its_own_variant() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/toolbox/dns/example.com"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).dns().lookup("example.com").await.unwrap_err();
    assert!(matches!(err, PulseError::Unauthorized));
}

#[tokio::test]
async fn retryable_failures_are_retried_then_succeed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/toolbox/dns/example.com"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/toolbox/dns/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "records": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PulseClient::builder("test-token")
        .base_url(server.uri())
        .retry(
            RetryConfig::new()
                .max_retries(2)
                .initial_backoff(Duration::from_millis(10)),
        )
        .build();

    let result = client.dns().lookup("example.com").await.unwrap();
    assert!(result.records.is_empty());
}

#[tokio::test]
async fn self_ip_echo_failure_never_reaches_enrichment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/echo"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/toolbox/ip/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ip": "x"})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).ip().self_ip().await.unwrap_err();
    assert!(matches!(err, PulseError::SelfIpUnavailable(_)));
}

#[tokio::test]
async fn self_ip_rejects_an_empty_echo_address() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/echo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ip": "  "})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/toolbox/ip/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ip": "x"})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).ip().self_ip().await.unwrap_err();
    assert!(matches!(err, PulseError::SelfIpUnavailable(_)));
}

#[tokio::test]
async fn self_ip_composes_echo_and_enrichment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/echo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ip": "198.51.100.7"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/toolbox/ip/198.51.100.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ip": "198.51.100.7",
            "isHosting": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).ip().self_ip().await.unwrap();
    assert_eq!(result.ip, "198.51.100.7");
    assert_eq!(result.is_hosting, Some(true));
}
