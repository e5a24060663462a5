use clap::Parser;

use super::models::{Config, DEFAULT_IP_SERVICE, DEFAULT_RECORD_TTL};

/// Manage a dynamic home IP address with an AWS Route 53 hosted domain
///
/// Every flag has a default, so a bare invocation works.
#[derive(Parser, Debug)]
#[command(name = "route53-ddns")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// AWS region to connect to
    #[arg(short, long, env = "DDNS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Domain to modify
    #[arg(short, long, env = "DDNS_DOMAIN", default_value = "example.com")]
    pub domain: String,

    /// Subdomain to modify (pass "" to update the apex)
    #[arg(short, long, env = "DDNS_SUBDOMAIN", default_value = "surface")]
    pub subdomain: String,

    /// AWS hosted zone ID
    #[arg(short, long, env = "DDNS_ZONE", default_value = "Z0123456789EXAMPLE")]
    pub zone: String,

    /// Named AWS credential profile
    #[arg(short, long, env = "DDNS_PROFILE", default_value = "ddns")]
    pub profile: String,

    /// Endpoint that echoes the caller's address as {"origin": "..."}
    #[arg(long, env = "DDNS_IP_SERVICE", default_value = DEFAULT_IP_SERVICE)]
    pub ip_service: String,

    /// TTL in seconds for the A record
    #[arg(long, env = "DDNS_TTL", default_value_t = DEFAULT_RECORD_TTL)]
    pub ttl: i64,

    /// Comment attached to the change batch
    #[arg(long, env = "DDNS_COMMENT", default_value = "dynamic dns update")]
    pub comment: String,

    /// HTTP timeout in seconds for the IP lookup
    #[arg(long, env = "DDNS_TIMEOUT", default_value_t = 10)]
    pub timeout: u64,

    /// Report what would change without writing to Route 53
    #[arg(long, env = "DDNS_DRY_RUN")]
    pub dry_run: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            region: cli.region,
            profile: Some(cli.profile).filter(|p| !p.is_empty()),
            domain: cli.domain,
            subdomain: Some(cli.subdomain).filter(|s| !s.is_empty()),
            zone_id: cli.zone,
            ip_service: cli.ip_service,
            record_ttl: cli.ttl,
            comment: cli.comment,
            timeout_secs: cli.timeout,
            dry_run: cli.dry_run,
        }
    }
}
