use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A document labelled with a relevance score for a training query.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub document_id: String,
    pub collection_id: String,
    pub relevance: i64,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

impl TrainingExample {
    pub fn new(
        document_id: impl Into<String>,
        collection_id: impl Into<String>,
        relevance: i64,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            collection_id: collection_id.into(),
            relevance,
            created: None,
            updated: None,
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingQuery {
    pub query_id: Option<String>,
    pub natural_language_query: String,
    pub filter: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub examples: Vec<TrainingExample>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingQuerySet {
    pub queries: Option<Vec<TrainingQuery>>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub(crate) struct TrainingQueryBody<'a> {
    pub natural_language_query: &'a str,
    pub examples: &'a [TrainingExample],
    pub filter: Option<&'a str>,
}
