use crate::error::{DdnsError, Result};
use log::info;
use serde::Deserialize;
use std::{net::Ipv4Addr, str::FromStr, time::Duration};

// httpbin-style echo: {"origin": "203.0.113.7"}
#[derive(Debug, Deserialize)]
struct OriginResponse {
    origin: String,
}

pub struct IpResolver {
    client: reqwest::Client,
    url: String,
}

impl IpResolver {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DdnsError::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// One GET against the echo service. Not retried.
    pub async fn resolve_external_ip(&self) -> Result<Ipv4Addr> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DdnsError::network(format!("request to {} failed: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(DdnsError::network(format!(
                "{} answered with HTTP {}",
                self.url,
                response.status()
            )));
        }

        let body = response
            .json::<OriginResponse>()
            .await
            .map_err(|e| DdnsError::network(format!("failed to parse response: {}", e)))?;

        let ip = Ipv4Addr::from_str(body.origin.trim()).map_err(|e| {
            DdnsError::network(format!("'{}' is not an IPv4 address: {}", body.origin, e))
        })?;

        info!("Found external IP: {}", ip);
        Ok(ip)
    }
}
