use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentClassifierEnrichment {
    pub enrichment_id: String,
    pub fields: Vec<String>,
}

/// Field used to split training data into one model per value.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierFederatedModel {
    pub field: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentClassifier {
    pub classifier_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub language: Option<String>,
    pub enrichments: Option<Vec<DocumentClassifierEnrichment>>,
    pub recognized_fields: Option<Vec<String>>,
    pub answer_field: Option<String>,
    pub training_data_file: Option<String>,
    pub test_data_file: Option<String>,
    pub federated_classification: Option<ClassifierFederatedModel>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentClassifiers {
    pub classifiers: Option<Vec<DocumentClassifier>>,
}

/// Sent as the `classifier` part of `create_document_classifier`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDocumentClassifier {
    pub name: String,
    pub description: Option<String>,
    pub language: String,
    pub answer_field: String,
    pub enrichments: Option<Vec<DocumentClassifierEnrichment>>,
    pub federated_classification: Option<ClassifierFederatedModel>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDocumentClassifier {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierModelStatus {
    Training,
    Available,
    Failed,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    Unrecognized(String),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelEvaluationMicroAverage {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelEvaluationMacroAverage {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerClassModelEvaluation {
    pub name: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierModelEvaluation {
    pub micro_average: ModelEvaluationMicroAverage,
    pub macro_average: ModelEvaluationMacroAverage,
    pub per_class: Vec<PerClassModelEvaluation>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentClassifierModel {
    pub model_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub training_data_file: Option<String>,
    pub test_data_file: Option<String>,
    pub status: Option<ClassifierModelStatus>,
    pub evaluation: Option<ClassifierModelEvaluation>,
    pub enrichment_id: Option<String>,
    pub deployed_at: Option<DateTime<Utc>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentClassifierModels {
    pub models: Option<Vec<DocumentClassifierModel>>,
}

/// Training hyperparameters for `create_document_classifier_model`. `name` is required.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateClassifierModelOptions {
    pub name: String,
    pub description: Option<String>,
    pub learning_rate: Option<f64>,
    pub l1_regularization_strengths: Option<Vec<f64>>,
    pub l2_regularization_strengths: Option<Vec<f64>>,
    pub training_max_steps: Option<i64>,
    pub improvement_ratio: Option<f64>,
}

impl CreateClassifierModelOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub(crate) struct UpdateClassifierModelBody<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_model_with_evaluation() {
        let payload = json!({
            "model_id": "m-1",
            "name": "v1",
            "status": "available",
            "evaluation": {
                "micro_average": {"precision": 0.9, "recall": 0.8, "f1": 0.85},
                "macro_average": {"precision": 0.7, "recall": 0.6, "f1": 0.65},
                "per_class": [{"name": "billing", "precision": 1.0, "recall": 0.5, "f1": 0.66}]
            },
            "enrichment_id": "e-3",
            "deployed_at": "2023-06-01T00:00:00Z"
        });

        let model: DocumentClassifierModel = serde_json::from_value(payload.clone()).unwrap();

        assert_eq!(model.status, Some(ClassifierModelStatus::Available));
        let evaluation = model.evaluation.as_ref().unwrap();
        assert_eq!(evaluation.per_class[0].name, "billing");
        assert_eq!(evaluation.micro_average.f1, 0.85);
        assert_eq!(serde_json::to_value(&model).unwrap(), payload);
    }

    #[test]
    fn test_create_classifier_encoding() {
        let classifier = CreateDocumentClassifier {
            name: "tickets".to_string(),
            language: "en".to_string(),
            answer_field: "category".to_string(),
            federated_classification: Some(ClassifierFederatedModel {
                field: "region".to_string(),
            }),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&classifier).unwrap(),
            json!({
                "name": "tickets",
                "language": "en",
                "answer_field": "category",
                "federated_classification": {"field": "region"}
            })
        );
    }

    #[test]
    fn test_unknown_model_status_is_kept() {
        let model: DocumentClassifierModel =
            serde_json::from_value(json!({"name": "v2", "status": "deploying"})).unwrap();
        assert_eq!(
            model.status,
            Some(ClassifierModelStatus::Unrecognized("deploying".to_string()))
        );
    }
}
