use super::models::*;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient {
    /// Lists record sets in the zone, starting at `start_name`/`start_type` in
    /// the provider's lexicographic order.
    async fn list_record_sets(
        &self,
        zone_id: &str,
        start_name: &str,
        start_type: &str,
    ) -> Result<Vec<RecordSet>>;

    /// Submits one change batch holding a single UPSERT.
    async fn upsert_record(&self, zone_id: &str, record: &RecordUpsert) -> Result<ChangeInfo>;
}
