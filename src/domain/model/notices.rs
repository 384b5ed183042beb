use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    Warning,
    Error,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    Unrecognized(String),
}

/// A warning or error raised while ingesting a document or running a query.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub notice_id: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub document_id: Option<String>,
    pub collection_id: Option<String>,
    pub query_id: Option<String>,
    pub severity: Option<NoticeSeverity>,
    pub step: Option<String>,
    pub description: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryNoticesResponse {
    pub matching_results: Option<i64>,
    pub notices: Option<Vec<Notice>>,
}
