use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub collection_id: Option<String>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListCollectionsResponse {
    pub collections: Option<Vec<Collection>>,
}

/// An enrichment applied to a set of fields of a collection.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionEnrichment {
    pub enrichment_id: Option<String>,
    pub fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmartDocumentUnderstandingModel {
    Custom,
    PreTrained,
    TextExtraction,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    Unrecognized(String),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionDetailsSmartDocumentUnderstanding {
    pub enabled: Option<bool>,
    pub model: Option<SmartDocumentUnderstandingModel>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionDetails {
    pub collection_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub language: Option<String>,
    pub ocr_enabled: Option<bool>,
    pub enrichments: Option<Vec<CollectionEnrichment>>,
    pub smart_document_understanding: Option<CollectionDetailsSmartDocumentUnderstanding>,
}

/// Options for `create_collection`. `name` is required.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateCollectionOptions {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub ocr_enabled: Option<bool>,
    pub enrichments: Option<Vec<CollectionEnrichment>>,
}

impl CreateCollectionOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateCollectionOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ocr_enabled: Option<bool>,
    pub enrichments: Option<Vec<CollectionEnrichment>>,
}
