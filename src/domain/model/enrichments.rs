use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentType {
    PartOfSpeech,
    Sentiment,
    NaturalLanguageUnderstanding,
    Dictionary,
    RegularExpression,
    UimaAnnotator,
    RuleBased,
    WatsonKnowledgeStudioModel,
    Classifier,
    Webhook,
    SentenceClassifier,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    Unrecognized(String),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookHeader {
    pub name: String,
    pub value: String,
}

/// Type-specific settings; which members apply depends on the enrichment type.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentOptions {
    pub languages: Option<Vec<String>>,
    pub entity_type: Option<String>,
    pub regular_expression: Option<String>,
    pub result_field: Option<String>,
    pub classifier_id: Option<String>,
    pub model_id: Option<String>,
    pub confidence_threshold: Option<f64>,
    pub top_k: Option<i64>,
    pub url: Option<String>,
    pub version: Option<String>,
    pub secret: Option<String>,
    pub headers: Option<Vec<WebhookHeader>>,
    pub location_encoding: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    pub enrichment_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<EnrichmentType>,
    pub options: Option<EnrichmentOptions>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enrichments {
    pub enrichments: Option<Vec<Enrichment>>,
}

/// Definition sent as the `enrichment` part of `create_enrichment`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEnrichment {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<EnrichmentType>,
    pub options: Option<EnrichmentOptions>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub(crate) struct UpdateEnrichmentBody<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}
