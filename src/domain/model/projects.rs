use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    IntelligentDocumentProcessing,
    DocumentRetrieval,
    ConversationalSearch,
    ContentMining,
    ContentIntelligence,
    Other,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    Unrecognized(String),
}

/// Relevancy training state of a project.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRelTrainStatus {
    pub data_updated: Option<String>,
    pub total_examples: Option<i64>,
    pub sufficient_label_diversity: Option<bool>,
    pub processing: Option<bool>,
    pub minimum_examples_added: Option<bool>,
    pub successfully_trained: Option<String>,
    pub available: Option<bool>,
    pub notices: Option<i64>,
    pub minimum_queries_added: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectListDetails {
    pub project_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ProjectType>,
    pub relevancy_training_status: Option<ProjectRelTrainStatus>,
    pub collection_count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListProjectsResponse {
    pub projects: Option<Vec<ProjectListDetails>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub project_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ProjectType>,
    pub relevancy_training_status: Option<ProjectRelTrainStatus>,
    pub collection_count: Option<i64>,
    pub default_query_parameters: Option<DefaultQueryParams>,
}

/// Query parameters the project applies when a query leaves them out.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultQueryParams {
    pub collection_ids: Option<Vec<String>>,
    pub passages: Option<DefaultQueryParamsPassages>,
    pub table_results: Option<DefaultQueryParamsTableResults>,
    pub aggregation: Option<String>,
    pub suggested_refinements: Option<DefaultQueryParamsSuggestedRefinements>,
    pub spelling_suggestions: Option<bool>,
    pub highlight: Option<bool>,
    pub count: Option<i64>,
    pub sort: Option<String>,
    #[serde(rename = "return")]
    pub return_fields: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultQueryParamsPassages {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
    pub fields: Option<Vec<String>>,
    pub characters: Option<i64>,
    pub per_document: Option<bool>,
    pub max_per_document: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultQueryParamsTableResults {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
    pub per_document: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultQueryParamsSuggestedRefinements {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Nested,
    String,
    Date,
    Long,
    Integer,
    Short,
    Byte,
    Double,
    Float,
    Boolean,
    Binary,
    #[serde(untagged)]
    Unrecognized(String),
}

/// A field that can be queried, as reported by the fields endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub field: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<FieldType>,
    pub collection_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFieldsResponse {
    pub fields: Option<Vec<Field>>,
}

/// Request body of `create_project`.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub(crate) struct CreateProjectBody<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    pub default_query_parameters: Option<&'a DefaultQueryParams>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub(crate) struct UpdateProjectBody<'a> {
    pub name: Option<&'a str>,
}
