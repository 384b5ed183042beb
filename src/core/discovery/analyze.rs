use super::documents::upload_form;
use super::DiscoveryV2;
use crate::core::service::DetailedResponse;
use crate::domain::model::analyze::AnalyzedDocument;
use crate::domain::model::documents::DocumentUpload;
use crate::utils::error::Result;
use crate::utils::validation::require;
use reqwest::Method;

impl DiscoveryV2 {
    /// Runs the collection's enrichments over a document without indexing it.
    pub async fn analyze_document(
        &self,
        project_id: &str,
        collection_id: &str,
        upload: &DocumentUpload,
    ) -> Result<DetailedResponse<AnalyzedDocument>> {
        require("project_id", project_id)?;
        require("collection_id", collection_id)?;
        let form = upload_form(upload)?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "collections", collection_id, "analyze"],
                &self.params(),
                "analyze_document",
            )?
            .multipart(form);
        self.service.send(request).await
    }

    /// Deletes all data associated with a customer id across the instance.
    pub async fn delete_user_data(&self, customer_id: &str) -> Result<DetailedResponse<()>> {
        require("customer_id", customer_id)?;
        let mut params = self.params();
        params.push("customer_id", customer_id);
        let request =
            self.service
                .request(Method::DELETE, &["v2", "user_data"], &params, "delete_user_data")?;
        self.service.send_empty(request).await
    }
}
