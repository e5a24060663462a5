use std::time::Duration;
use validator::Validate;

use crate::error::Result;

pub const DEFAULT_IP_SERVICE: &str = "http://httpbin.org/ip";
pub const DEFAULT_RECORD_TTL: i64 = 123;

#[derive(Debug, Clone, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "Region cannot be empty"))]
    pub region: String,

    /// Named credential profile handed to the AWS config loader
    pub profile: Option<String>,

    #[validate(length(min = 1, message = "Domain cannot be empty"))]
    pub domain: String,

    /// Empty or absent means the apex itself is managed
    pub subdomain: Option<String>,

    #[validate(length(min = 1, message = "Hosted zone ID cannot be empty"))]
    pub zone_id: String,

    #[validate(length(min = 1, message = "IP service URL cannot be empty"))]
    pub ip_service: String,

    #[validate(range(min = 1, message = "TTL must be greater than 0"))]
    pub record_ttl: i64,

    pub comment: String,

    #[validate(range(min = 1, message = "Timeout must be greater than 0"))]
    pub timeout_secs: u64,

    pub dry_run: bool,
}

impl Config {
    /// Checks field constraints; nothing touches the network before this passes.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn fqdn(&self) -> String {
        match self.subdomain.as_deref() {
            Some(sub) if !sub.is_empty() => format!("{}.{}", sub, self.domain),
            _ => self.domain.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
