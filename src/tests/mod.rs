mod resolver;

use std::time::Duration;

use crate::config::models::{Config, DEFAULT_RECORD_TTL};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Helper function to create a config pointed at a local echo server
fn test_config(ip_service: String) -> Config {
    Config {
        region: "us-east-1".to_string(),
        profile: None,
        domain: "example.com".to_string(),
        subdomain: Some("surface".to_string()),
        zone_id: "Z0123456789EXAMPLE".to_string(),
        ip_service,
        record_ttl: DEFAULT_RECORD_TTL,
        comment: "dynamic dns update".to_string(),
        timeout_secs: 5,
        dry_run: false,
    }
}

async fn echo_server(origin: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "origin": origin })),
        )
        .mount(&server)
        .await;
    server
}

fn echo_url(server: &MockServer) -> String {
    format!("{}/ip", server.uri())
}

const TIMEOUT: Duration = Duration::from_secs(5);
