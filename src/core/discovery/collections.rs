use super::DiscoveryV2;
use crate::core::service::DetailedResponse;
use crate::domain::model::collections::{
    CollectionDetails, CreateCollectionOptions, ListCollectionsResponse, UpdateCollectionOptions,
};
use crate::utils::error::Result;
use crate::utils::validation::require;
use reqwest::Method;

impl DiscoveryV2 {
    pub async fn list_collections(
        &self,
        project_id: &str,
    ) -> Result<DetailedResponse<ListCollectionsResponse>> {
        require("project_id", project_id)?;
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "collections"],
            &self.params(),
            "list_collections",
        )?;
        self.service.send(request).await
    }

    pub async fn create_collection(
        &self,
        project_id: &str,
        options: &CreateCollectionOptions,
    ) -> Result<DetailedResponse<CollectionDetails>> {
        require("project_id", project_id)?;
        require("name", &options.name)?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "collections"],
                &self.params(),
                "create_collection",
            )?
            .json(options);
        self.service.send(request).await
    }

    pub async fn get_collection(
        &self,
        project_id: &str,
        collection_id: &str,
    ) -> Result<DetailedResponse<CollectionDetails>> {
        require("project_id", project_id)?;
        require("collection_id", collection_id)?;
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "collections", collection_id],
            &self.params(),
            "get_collection",
        )?;
        self.service.send(request).await
    }

    pub async fn update_collection(
        &self,
        project_id: &str,
        collection_id: &str,
        options: &UpdateCollectionOptions,
    ) -> Result<DetailedResponse<CollectionDetails>> {
        require("project_id", project_id)?;
        require("collection_id", collection_id)?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "collections", collection_id],
                &self.params(),
                "update_collection",
            )?
            .json(options);
        self.service.send(request).await
    }

    /// Deletes a collection together with its documents.
    pub async fn delete_collection(
        &self,
        project_id: &str,
        collection_id: &str,
    ) -> Result<DetailedResponse<()>> {
        require("project_id", project_id)?;
        require("collection_id", collection_id)?;
        let request = self.service.request(
            Method::DELETE,
            &["v2", "projects", project_id, "collections", collection_id],
            &self.params(),
            "delete_collection",
        )?;
        self.service.send_empty(request).await
    }
}
