use super::DiscoveryV2;
use crate::core::service::{file_part, DetailedResponse};
use crate::domain::model::documents::{
    DeleteDocumentResponse, DocumentAccepted, DocumentDetails, DocumentUpload,
    ListDocumentsOptions, ListDocumentsResponse,
};
use crate::utils::error::{DiscoveryError, Result};
use crate::utils::validation::require;
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder};

pub(crate) const FORCE_HEADER: &str = "X-Watson-Discovery-Force";

/// Builds the `file` and `metadata` parts of an upload.
pub(crate) fn upload_form(upload: &DocumentUpload) -> Result<Form> {
    if upload.file.is_none() && upload.metadata.is_none() {
        return Err(DiscoveryError::Validation {
            message: "file or metadata must be provided".to_string(),
        });
    }

    let mut form = Form::new();
    if let Some(file) = &upload.file {
        let filename = upload
            .filename
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| DiscoveryError::missing("filename"))?;
        let content_type = upload.file_content_type.map(|c| c.as_str());
        form = form.part("file", file_part(file.clone(), Some(filename), content_type)?);
    }
    if let Some(metadata) = &upload.metadata {
        form = form.text("metadata", serde_json::to_string(metadata)?);
    }
    Ok(form)
}

fn with_force(request: RequestBuilder, force: Option<bool>) -> RequestBuilder {
    match force {
        Some(force) => request.header(FORCE_HEADER, force.to_string()),
        None => request,
    }
}

impl DiscoveryV2 {
    pub async fn list_documents(
        &self,
        project_id: &str,
        collection_id: &str,
        options: &ListDocumentsOptions,
    ) -> Result<DetailedResponse<ListDocumentsResponse>> {
        require("project_id", project_id)?;
        require("collection_id", collection_id)?;
        let mut params = self.params();
        params
            .push_opt("count", options.count)
            .push_list("status", options.status.as_deref())
            .push_opt("has_notices", options.has_notices)
            .push_opt("is_parent", options.is_parent)
            .push_opt("parent_document_id", options.parent_document_id.as_deref())
            .push_opt("sha256", options.sha256.as_deref());
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "collections", collection_id, "documents"],
            &params,
            "list_documents",
        )?;
        self.service.send(request).await
    }

    /// Uploads a document for ingestion. Processing is asynchronous; the
    /// response only confirms the document was accepted.
    pub async fn add_document(
        &self,
        project_id: &str,
        collection_id: &str,
        upload: &DocumentUpload,
    ) -> Result<DetailedResponse<DocumentAccepted>> {
        require("project_id", project_id)?;
        require("collection_id", collection_id)?;
        let form = upload_form(upload)?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "collections", collection_id, "documents"],
                &self.params(),
                "add_document",
            )?
            .multipart(form);
        self.service
            .send(with_force(request, upload.x_watson_discovery_force))
            .await
    }

    pub async fn get_document(
        &self,
        project_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<DetailedResponse<DocumentDetails>> {
        require("project_id", project_id)?;
        require("collection_id", collection_id)?;
        require("document_id", document_id)?;
        let request = self.service.request(
            Method::GET,
            &[
                "v2",
                "projects",
                project_id,
                "collections",
                collection_id,
                "documents",
                document_id,
            ],
            &self.params(),
            "get_document",
        )?;
        self.service.send(request).await
    }

    /// Replaces a document. Uploading to an unknown id creates it.
    pub async fn update_document(
        &self,
        project_id: &str,
        collection_id: &str,
        document_id: &str,
        upload: &DocumentUpload,
    ) -> Result<DetailedResponse<DocumentAccepted>> {
        require("project_id", project_id)?;
        require("collection_id", collection_id)?;
        require("document_id", document_id)?;
        let form = upload_form(upload)?;
        let request = self
            .service
            .request(
                Method::POST,
                &[
                    "v2",
                    "projects",
                    project_id,
                    "collections",
                    collection_id,
                    "documents",
                    document_id,
                ],
                &self.params(),
                "update_document",
            )?
            .multipart(form);
        self.service
            .send(with_force(request, upload.x_watson_discovery_force))
            .await
    }

    pub async fn delete_document(
        &self,
        project_id: &str,
        collection_id: &str,
        document_id: &str,
        x_watson_discovery_force: Option<bool>,
    ) -> Result<DetailedResponse<DeleteDocumentResponse>> {
        require("project_id", project_id)?;
        require("collection_id", collection_id)?;
        require("document_id", document_id)?;
        let request = self.service.request(
            Method::DELETE,
            &[
                "v2",
                "projects",
                project_id,
                "collections",
                collection_id,
                "documents",
                document_id,
            ],
            &self.params(),
            "delete_document",
        )?;
        self.service
            .send(with_force(request, x_watson_discovery_force))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::documents::FileContentType;
    use serde_json::json;

    #[test]
    fn test_upload_requires_file_or_metadata() {
        let err = upload_form(&DocumentUpload::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: file or metadata must be provided"
        );
    }

    #[test]
    fn test_upload_file_requires_filename() {
        let upload = DocumentUpload {
            file: Some(b"{}".to_vec()),
            ..Default::default()
        };
        let err = upload_form(&upload).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: filename must be provided");
    }

    #[test]
    fn test_metadata_only_upload_is_accepted() {
        let upload = DocumentUpload {
            metadata: Some(json!({"author": "ops"})),
            ..Default::default()
        };
        assert!(upload_form(&upload).is_ok());

        let with_file = DocumentUpload::from_bytes(b"<html/>".to_vec(), "a.html", FileContentType::Html);
        assert!(upload_form(&with_file).is_ok());
    }
}
