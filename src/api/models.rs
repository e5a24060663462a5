use serde::Serialize;

/// One resource record set as returned by a list call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    /// Fully-qualified, provider-side name (Route 53 appends a trailing dot)
    pub name: String,
    pub r#type: String,
    pub ttl: Option<i64>,
    pub values: Vec<String>,
}

/// Create-or-replace request for a single A record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordUpsert {
    pub name: String,
    pub r#type: String,
    pub ttl: i64,
    pub values: Vec<String>,
    pub comment: Option<String>,
}

/// Acknowledgement of a submitted change batch. Not polled to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeInfo {
    pub id: String,
    pub status: String,
    pub submitted_at: String,
    pub comment: Option<String>,
}
