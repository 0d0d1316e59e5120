use chrono::{DateTime, Utc};
use serde::Serialize;

/// Read-only view of an uploaded receipt file. Never persisted; the file
/// name is its only identity.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub name: String,
    pub upload_date: DateTime<Utc>,
}
