use std::net::Ipv4Addr;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{echo_server, echo_url, TIMEOUT};
use crate::error::DdnsError;
use crate::ip::IpResolver;

#[tokio::test]
async fn test_resolve_returns_origin_unchanged() {
    let server = echo_server("203.0.113.7").await;
    let resolver = IpResolver::new(echo_url(&server), TIMEOUT).unwrap();

    let ip = resolver.resolve_external_ip().await.unwrap();
    assert_eq!(ip, Ipv4Addr::new(203, 0, 113, 7));
    assert_eq!(ip.to_string(), "203.0.113.7");
}

#[tokio::test]
async fn test_resolve_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = IpResolver::new(echo_url(&server), TIMEOUT).unwrap();
    let result = resolver.resolve_external_ip().await;
    assert!(matches!(result, Err(DdnsError::Network(_))));
}

#[tokio::test]
async fn test_resolve_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let resolver = IpResolver::new(echo_url(&server), TIMEOUT).unwrap();
    let result = resolver.resolve_external_ip().await;
    assert!(matches!(result, Err(DdnsError::Network(_))));
}

#[tokio::test]
async fn test_resolve_missing_origin_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ip": "1.2.3.4" })),
        )
        .mount(&server)
        .await;

    let resolver = IpResolver::new(echo_url(&server), TIMEOUT).unwrap();
    let result = resolver.resolve_external_ip().await;
    assert!(matches!(result, Err(DdnsError::Network(_))));
}

#[tokio::test]
async fn test_resolve_rejects_ipv6_origin() {
    let server = echo_server("2001:db8::1").await;
    let resolver = IpResolver::new(echo_url(&server), TIMEOUT).unwrap();

    let result = resolver.resolve_external_ip().await;
    assert!(matches!(result, Err(DdnsError::Network(_))));
}

#[tokio::test]
async fn test_resolve_unreachable_service() {
    // Nothing listens on the discard port
    let resolver = IpResolver::new("http://127.0.0.1:9/ip", TIMEOUT).unwrap();

    let result = resolver.resolve_external_ip().await;
    assert!(matches!(result, Err(DdnsError::Network(_))));
}
