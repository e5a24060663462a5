use log::{info, warn};
use std::net::Ipv4Addr;

use crate::api::models::{ChangeInfo, RecordSet, RecordUpsert};
use crate::api::DnsApiClient;
use crate::config::Config;
use crate::error::{DdnsError, Result};
use crate::ip::IpResolver;

pub const RECORD_TYPE: &str = "A";

/// What the provider's list call said about the managed name, before any
/// policy is applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLookup {
    Found(RecordSet),
    /// The zone returned no record sets at all
    Empty,
    /// The first record set returned belongs to some other name
    NameMismatch(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    UpToDate { ip: Ipv4Addr },
    Updated { ip: Ipv4Addr, change: ChangeInfo },
    WouldUpdate { ip: Ipv4Addr },
}

pub struct Route53Ddns<C> {
    config: Config,
    client: C,
    resolver: IpResolver,
}

impl<C: DnsApiClient> Route53Ddns<C> {
    pub fn new(config: Config, client: C) -> Result<Self> {
        let resolver = IpResolver::new(config.ip_service.clone(), config.timeout())?;

        Ok(Self {
            config,
            client,
            resolver,
        })
    }

    async fn lookup_record(&self, fqdn: &str, zone_id: &str) -> Result<RecordLookup> {
        let mut records = self
            .client
            .list_record_sets(zone_id, fqdn, RECORD_TYPE)
            .await?;

        if records.is_empty() {
            return Ok(RecordLookup::Empty);
        }

        // Route 53 names end in a trailing dot, so match by containment
        let first = records.swap_remove(0);
        if first.name.contains(fqdn) {
            Ok(RecordLookup::Found(first))
        } else {
            Ok(RecordLookup::NameMismatch(first.name))
        }
    }

    /// Whether `ip` is already among the values of the record set for `fqdn`.
    pub async fn find_current_value(
        &self,
        fqdn: &str,
        zone_id: &str,
        ip: &Ipv4Addr,
    ) -> Result<bool> {
        match self.lookup_record(fqdn, zone_id).await? {
            RecordLookup::Found(record) => {
                let wanted = ip.to_string();
                Ok(record.values.iter().any(|value| *value == wanted))
            }
            RecordLookup::Empty => Err(DdnsError::RecordNotFound(format!(
                "Could not find any records matching domain: {}",
                fqdn
            ))),
            RecordLookup::NameMismatch(name) => Err(DdnsError::RecordNotFound(format!(
                "Cannot find record set for domain: {} (first record is {})",
                fqdn, name
            ))),
        }
    }

    pub async fn upsert_record(
        &self,
        fqdn: &str,
        zone_id: &str,
        ip: &Ipv4Addr,
    ) -> Result<ChangeInfo> {
        let record = RecordUpsert {
            name: fqdn.to_string(),
            r#type: RECORD_TYPE.to_string(),
            ttl: self.config.record_ttl,
            values: vec![ip.to_string()],
            comment: Some(self.config.comment.clone()).filter(|c| !c.is_empty()),
        };

        self.client.upsert_record(zone_id, &record).await
    }

    /// Resolve, compare, and write only when the record is stale.
    pub async fn update_record(&self) -> Result<Outcome> {
        let ip = self.resolver.resolve_external_ip().await?;
        let fqdn = self.config.fqdn();
        let zone_id = &self.config.zone_id;

        info!("Checking {} in hosted zone {}", fqdn, zone_id);
        if self.find_current_value(&fqdn, zone_id, &ip).await? {
            return Ok(Outcome::UpToDate { ip });
        }

        if self.config.dry_run {
            warn!("Dry run: not updating {} to {}", fqdn, ip);
            return Ok(Outcome::WouldUpdate { ip });
        }

        let change = self.upsert_record(&fqdn, zone_id, &ip).await?;
        info!("Submitted change {} ({})", change.id, change.status);
        Ok(Outcome::Updated { ip, change })
    }
}
