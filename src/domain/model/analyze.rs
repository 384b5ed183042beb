use crate::domain::model::notices::Notice;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Enrichment output of an analyzed document. The service adds one member
/// per enriched field, kept in `extra`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedResult {
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedDocument {
    pub notices: Option<Vec<Notice>>,
    pub result: Option<AnalyzedResult>,
}
