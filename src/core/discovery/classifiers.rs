use super::DiscoveryV2;
use crate::core::service::{file_part, json_part, DetailedResponse};
use crate::domain::model::classifiers::{
    CreateClassifierModelOptions, CreateDocumentClassifier, DocumentClassifier,
    DocumentClassifierModel, DocumentClassifierModels, DocumentClassifiers,
    UpdateClassifierModelBody, UpdateDocumentClassifier,
};
use crate::utils::error::Result;
use crate::utils::validation::require;
use reqwest::multipart::{Form, Part};
use reqwest::Method;

fn csv_part(bytes: Vec<u8>, filename: &str) -> Result<Part> {
    file_part(bytes, Some(filename), Some("text/csv"))
}

impl DiscoveryV2 {
    pub async fn list_document_classifiers(
        &self,
        project_id: &str,
    ) -> Result<DetailedResponse<DocumentClassifiers>> {
        require("project_id", project_id)?;
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "document_classifiers"],
            &self.params(),
            "list_document_classifiers",
        )?;
        self.service.send(request).await
    }

    /// Creates a classifier from CSV training data. When `test_data` is
    /// omitted the service holds back part of the training data for evaluation.
    pub async fn create_document_classifier(
        &self,
        project_id: &str,
        training_data: Vec<u8>,
        classifier: &CreateDocumentClassifier,
        test_data: Option<Vec<u8>>,
    ) -> Result<DetailedResponse<DocumentClassifier>> {
        require("project_id", project_id)?;
        require("name", &classifier.name)?;
        require("language", &classifier.language)?;
        require("answer_field", &classifier.answer_field)?;
        let mut form = Form::new()
            .part("training_data", csv_part(training_data, "training_data.csv")?)
            .part("classifier", json_part(classifier)?);
        if let Some(test_data) = test_data {
            form = form.part("test_data", csv_part(test_data, "test_data.csv")?);
        }
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "document_classifiers"],
                &self.params(),
                "create_document_classifier",
            )?
            .multipart(form);
        self.service.send(request).await
    }

    pub async fn get_document_classifier(
        &self,
        project_id: &str,
        classifier_id: &str,
    ) -> Result<DetailedResponse<DocumentClassifier>> {
        require("project_id", project_id)?;
        require("classifier_id", classifier_id)?;
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "document_classifiers", classifier_id],
            &self.params(),
            "get_document_classifier",
        )?;
        self.service.send(request).await
    }

    pub async fn update_document_classifier(
        &self,
        project_id: &str,
        classifier_id: &str,
        classifier: &UpdateDocumentClassifier,
        training_data: Option<Vec<u8>>,
        test_data: Option<Vec<u8>>,
    ) -> Result<DetailedResponse<DocumentClassifier>> {
        require("project_id", project_id)?;
        require("classifier_id", classifier_id)?;
        let mut form = Form::new().part("classifier", json_part(classifier)?);
        if let Some(training_data) = training_data {
            form = form.part("training_data", csv_part(training_data, "training_data.csv")?);
        }
        if let Some(test_data) = test_data {
            form = form.part("test_data", csv_part(test_data, "test_data.csv")?);
        }
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "document_classifiers", classifier_id],
                &self.params(),
                "update_document_classifier",
            )?
            .multipart(form);
        self.service.send(request).await
    }

    pub async fn delete_document_classifier(
        &self,
        project_id: &str,
        classifier_id: &str,
    ) -> Result<DetailedResponse<()>> {
        require("project_id", project_id)?;
        require("classifier_id", classifier_id)?;
        let request = self.service.request(
            Method::DELETE,
            &["v2", "projects", project_id, "document_classifiers", classifier_id],
            &self.params(),
            "delete_document_classifier",
        )?;
        self.service.send_empty(request).await
    }

    pub async fn list_document_classifier_models(
        &self,
        project_id: &str,
        classifier_id: &str,
    ) -> Result<DetailedResponse<DocumentClassifierModels>> {
        require("project_id", project_id)?;
        require("classifier_id", classifier_id)?;
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "document_classifiers", classifier_id, "models"],
            &self.params(),
            "list_document_classifier_models",
        )?;
        self.service.send(request).await
    }

    /// Starts training a new model. The returned model is usually still `training`.
    pub async fn create_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        options: &CreateClassifierModelOptions,
    ) -> Result<DetailedResponse<DocumentClassifierModel>> {
        require("project_id", project_id)?;
        require("classifier_id", classifier_id)?;
        require("name", &options.name)?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "document_classifiers", classifier_id, "models"],
                &self.params(),
                "create_document_classifier_model",
            )?
            .json(options);
        self.service.send(request).await
    }

    pub async fn get_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        model_id: &str,
    ) -> Result<DetailedResponse<DocumentClassifierModel>> {
        require("project_id", project_id)?;
        require("classifier_id", classifier_id)?;
        require("model_id", model_id)?;
        let request = self.service.request(
            Method::GET,
            &[
                "v2",
                "projects",
                project_id,
                "document_classifiers",
                classifier_id,
                "models",
                model_id,
            ],
            &self.params(),
            "get_document_classifier_model",
        )?;
        self.service.send(request).await
    }

    pub async fn update_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        model_id: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<DetailedResponse<DocumentClassifierModel>> {
        require("project_id", project_id)?;
        require("classifier_id", classifier_id)?;
        require("model_id", model_id)?;
        let request = self
            .service
            .request(
                Method::POST,
                &[
                    "v2",
                    "projects",
                    project_id,
                    "document_classifiers",
                    classifier_id,
                    "models",
                    model_id,
                ],
                &self.params(),
                "update_document_classifier_model",
            )?
            .json(&UpdateClassifierModelBody { name, description });
        self.service.send(request).await
    }

    pub async fn delete_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        model_id: &str,
    ) -> Result<DetailedResponse<()>> {
        require("project_id", project_id)?;
        require("classifier_id", classifier_id)?;
        require("model_id", model_id)?;
        let request = self.service.request(
            Method::DELETE,
            &[
                "v2",
                "projects",
                project_id,
                "document_classifiers",
                classifier_id,
                "models",
                model_id,
            ],
            &self.params(),
            "delete_document_classifier_model",
        )?;
        self.service.send_empty(request).await
    }
}
