use super::DiscoveryV2;
use crate::core::service::{file_part, json_part, DetailedResponse};
use crate::domain::model::enrichments::{
    CreateEnrichment, Enrichment, Enrichments, UpdateEnrichmentBody,
};
use crate::utils::error::Result;
use crate::utils::validation::require;
use reqwest::multipart::Form;
use reqwest::Method;

impl DiscoveryV2 {
    pub async fn list_enrichments(&self, project_id: &str) -> Result<DetailedResponse<Enrichments>> {
        require("project_id", project_id)?;
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "enrichments"],
            &self.params(),
            "list_enrichments",
        )?;
        self.service.send(request).await
    }

    /// Creates an enrichment. Dictionary, regular expression, rule based and
    /// model enrichments also need a `file` with their definition.
    pub async fn create_enrichment(
        &self,
        project_id: &str,
        enrichment: &CreateEnrichment,
        file: Option<Vec<u8>>,
    ) -> Result<DetailedResponse<Enrichment>> {
        require("project_id", project_id)?;
        let mut form = Form::new().part("enrichment", json_part(enrichment)?);
        if let Some(file) = file {
            form = form.part("file", file_part(file, None, None)?);
        }
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "enrichments"],
                &self.params(),
                "create_enrichment",
            )?
            .multipart(form);
        self.service.send(request).await
    }

    pub async fn get_enrichment(
        &self,
        project_id: &str,
        enrichment_id: &str,
    ) -> Result<DetailedResponse<Enrichment>> {
        require("project_id", project_id)?;
        require("enrichment_id", enrichment_id)?;
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "enrichments", enrichment_id],
            &self.params(),
            "get_enrichment",
        )?;
        self.service.send(request).await
    }

    pub async fn update_enrichment(
        &self,
        project_id: &str,
        enrichment_id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<DetailedResponse<Enrichment>> {
        require("project_id", project_id)?;
        require("enrichment_id", enrichment_id)?;
        require("name", name)?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "enrichments", enrichment_id],
                &self.params(),
                "update_enrichment",
            )?
            .json(&UpdateEnrichmentBody { name, description });
        self.service.send(request).await
    }

    /// Deletes an enrichment. Built-in enrichments cannot be deleted.
    pub async fn delete_enrichment(
        &self,
        project_id: &str,
        enrichment_id: &str,
    ) -> Result<DetailedResponse<()>> {
        require("project_id", project_id)?;
        require("enrichment_id", enrichment_id)?;
        let request = self.service.request(
            Method::DELETE,
            &["v2", "projects", project_id, "enrichments", enrichment_id],
            &self.params(),
            "delete_enrichment",
        )?;
        self.service.send_empty(request).await
    }
}
