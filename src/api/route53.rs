use super::{client::DnsApiClient, models::*};
use crate::error::{DdnsError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_route53::config::Region;
use aws_sdk_route53::error::DisplayErrorContext;
use aws_sdk_route53::primitives::DateTimeFormat;
use aws_sdk_route53::types::{
    Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
};
use log::debug;

pub struct Route53Client {
    client: aws_sdk_route53::Client,
}

#[async_trait]
impl DnsApiClient for Route53Client {
    async fn list_record_sets(
        &self,
        zone_id: &str,
        start_name: &str,
        start_type: &str,
    ) -> Result<Vec<RecordSet>> {
        let response = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(zone_id)
            .start_record_name(start_name)
            .start_record_type(RrType::from(start_type))
            .send()
            .await
            .map_err(|e| DdnsError::provider(DisplayErrorContext(&e).to_string()))?;

        let records: Vec<RecordSet> = response
            .resource_record_sets()
            .iter()
            .map(Self::record_set_from)
            .collect();

        debug!("Route 53 returned {} record set(s): {:?}", records.len(), records);
        Ok(records)
    }

    async fn upsert_record(&self, zone_id: &str, record: &RecordUpsert) -> Result<ChangeInfo> {
        let batch = Self::build_change_batch(record)?;

        let response = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|e| DdnsError::provider(DisplayErrorContext(&e).to_string()))?;

        let info = response
            .change_info()
            .ok_or_else(|| DdnsError::provider("change response carried no change info"))?;

        Ok(ChangeInfo {
            id: info.id().to_string(),
            status: info.status().as_str().to_string(),
            submitted_at: info
                .submitted_at()
                .fmt(DateTimeFormat::DateTime)
                .unwrap_or_else(|_| info.submitted_at().secs().to_string()),
            comment: info.comment().map(str::to_string),
        })
    }
}

impl Route53Client {
    /// Builds the SDK client once, with region and credential profile passed
    /// explicitly instead of through the process environment.
    pub async fn new(region: &str, profile: Option<&str>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        let shared = loader.load().await;

        Self {
            client: aws_sdk_route53::Client::new(&shared),
        }
    }

    pub(crate) fn record_set_from(set: &ResourceRecordSet) -> RecordSet {
        RecordSet {
            name: set.name().to_string(),
            r#type: set.r#type().as_str().to_string(),
            ttl: set.ttl(),
            values: set
                .resource_records()
                .iter()
                .map(|rr| rr.value().to_string())
                .collect(),
        }
    }

    /// One UPSERT change; a `None` comment leaves the batch uncommented.
    pub(crate) fn build_change_batch(record: &RecordUpsert) -> Result<ChangeBatch> {
        let build_err = |e: aws_sdk_route53::error::BuildError| {
            DdnsError::provider(format!("malformed change request: {}", e))
        };

        let mut set = ResourceRecordSet::builder()
            .name(&record.name)
            .r#type(RrType::from(record.r#type.as_str()))
            .ttl(record.ttl);
        for value in &record.values {
            let rr = ResourceRecord::builder()
                .value(value)
                .build()
                .map_err(build_err)?;
            set = set.resource_records(rr);
        }

        let change = Change::builder()
            .action(ChangeAction::Upsert)
            .resource_record_set(set.build().map_err(build_err)?)
            .build()
            .map_err(build_err)?;

        ChangeBatch::builder()
            .set_comment(record.comment.clone())
            .changes(change)
            .build()
            .map_err(build_err)
    }
}
