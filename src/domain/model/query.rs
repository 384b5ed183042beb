use crate::domain::model::aggregations::QueryAggregation;
use crate::domain::model::tables::QueryTableResult;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryLargeTableResults {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryLargeSuggestedRefinements {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
}

/// Passage retrieval settings of a query.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryLargePassages {
    pub enabled: Option<bool>,
    pub per_document: Option<bool>,
    pub max_per_document: Option<i64>,
    pub fields: Option<Vec<String>>,
    pub count: Option<i64>,
    pub characters: Option<i64>,
    pub find_answers: Option<bool>,
    pub max_answers_per_passage: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryLargeSimilar {
    pub enabled: Option<bool>,
    pub document_ids: Option<Vec<String>>,
    pub fields: Option<Vec<String>>,
}

/// Body of a `query` request. Every member is optional; an empty query
/// returns the most recently added documents.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    pub collection_ids: Option<Vec<String>>,
    pub filter: Option<String>,
    pub query: Option<String>,
    pub natural_language_query: Option<String>,
    pub aggregation: Option<String>,
    pub count: Option<i64>,
    #[serde(rename = "return")]
    pub return_fields: Option<Vec<String>>,
    pub offset: Option<i64>,
    pub sort: Option<String>,
    pub highlight: Option<bool>,
    pub spelling_suggestions: Option<bool>,
    pub table_results: Option<QueryLargeTableResults>,
    pub suggested_refinements: Option<QueryLargeSuggestedRefinements>,
    pub passages: Option<QueryLargePassages>,
    pub similar: Option<QueryLargeSimilar>,
}

impl QueryOptions {
    pub fn natural_language(text: impl Into<String>) -> Self {
        Self {
            natural_language_query: Some(text.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRetrievalSource {
    Search,
    Curation,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    Unrecognized(String),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResultMetadata {
    pub document_retrieval_source: Option<DocumentRetrievalSource>,
    pub collection_id: String,
    pub confidence: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPassageAnswer {
    pub answer_text: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub confidence: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResultPassage {
    pub passage_text: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub field: Option<String>,
    pub answers: Option<Vec<ResultPassageAnswer>>,
}

/// A matching document. Members of the stored document other than the
/// ones below (title, text, enrichments, ...) are collected in `extra`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub document_id: String,
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    pub result_metadata: QueryResultMetadata,
    pub document_passages: Option<Vec<QueryResultPassage>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl QueryResult {
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.extra.get(name)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponsePassage {
    pub passage_text: Option<String>,
    pub passage_score: Option<f64>,
    pub document_id: Option<String>,
    pub collection_id: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub field: Option<String>,
    pub answers: Option<Vec<ResultPassageAnswer>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRetrievalStrategy {
    Untrained,
    RelevancyTraining,
    #[serde(untagged)]
    Unrecognized(String),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalDetails {
    pub document_retrieval_strategy: Option<DocumentRetrievalStrategy>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySuggestedRefinement {
    pub text: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub matching_results: Option<i64>,
    pub results: Option<Vec<QueryResult>>,
    pub aggregations: Option<Vec<QueryAggregation>>,
    pub retrieval_details: Option<RetrievalDetails>,
    pub suggested_query: Option<String>,
    pub suggested_refinements: Option<Vec<QuerySuggestedRefinement>>,
    pub table_results: Option<Vec<QueryTableResult>>,
    pub passages: Option<Vec<QueryResponsePassage>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Completions {
    pub completions: Option<Vec<String>>,
}

/// Optional parameters of `get_autocompletion`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutocompletionOptions {
    pub collection_ids: Option<Vec<String>>,
    pub field: Option<String>,
    pub count: Option<i64>,
}

/// Optional parameters shared by `query_notices` and `query_collection_notices`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticesQueryOptions {
    pub filter: Option<String>,
    pub query: Option<String>,
    pub natural_language_query: Option<String>,
    pub count: Option<i64>,
    pub offset: Option<i64>,
}
