use super::DiscoveryV2;
use crate::core::service::{DetailedResponse, QueryParams};
use crate::domain::model::components::ComponentSettingsResponse;
use crate::domain::model::notices::QueryNoticesResponse;
use crate::domain::model::query::{
    AutocompletionOptions, Completions, NoticesQueryOptions, QueryOptions, QueryResponse,
};
use crate::utils::error::Result;
use crate::utils::validation::require;
use reqwest::Method;

impl NoticesQueryOptions {
    fn append_to(&self, params: &mut QueryParams) {
        params
            .push_opt("filter", self.filter.as_deref())
            .push_opt("query", self.query.as_deref())
            .push_opt("natural_language_query", self.natural_language_query.as_deref())
            .push_opt("count", self.count)
            .push_opt("offset", self.offset);
    }
}

impl DiscoveryV2 {
    /// Searches the collections of a project.
    pub async fn query(
        &self,
        project_id: &str,
        options: &QueryOptions,
    ) -> Result<DetailedResponse<QueryResponse>> {
        require("project_id", project_id)?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "query"],
                &self.params(),
                "query",
            )?
            .json(options);
        self.service.send(request).await
    }

    /// Suggests completions for a partial query term.
    pub async fn get_autocompletion(
        &self,
        project_id: &str,
        prefix: &str,
        options: &AutocompletionOptions,
    ) -> Result<DetailedResponse<Completions>> {
        require("project_id", project_id)?;
        require("prefix", prefix)?;
        let mut params = self.params();
        params
            .push("prefix", prefix)
            .push_list("collection_ids", options.collection_ids.as_deref())
            .push_opt("field", options.field.as_deref())
            .push_opt("count", options.count);
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "autocompletion"],
            &params,
            "get_autocompletion",
        )?;
        self.service.send(request).await
    }

    /// Finds ingestion notices of one collection.
    pub async fn query_collection_notices(
        &self,
        project_id: &str,
        collection_id: &str,
        options: &NoticesQueryOptions,
    ) -> Result<DetailedResponse<QueryNoticesResponse>> {
        require("project_id", project_id)?;
        require("collection_id", collection_id)?;
        let mut params = self.params();
        options.append_to(&mut params);
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "collections", collection_id, "notices"],
            &params,
            "query_collection_notices",
        )?;
        self.service.send(request).await
    }

    /// Finds notices across every collection of a project.
    pub async fn query_notices(
        &self,
        project_id: &str,
        options: &NoticesQueryOptions,
    ) -> Result<DetailedResponse<QueryNoticesResponse>> {
        require("project_id", project_id)?;
        let mut params = self.params();
        options.append_to(&mut params);
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "notices"],
            &params,
            "query_notices",
        )?;
        self.service.send(request).await
    }

    pub async fn get_component_settings(
        &self,
        project_id: &str,
    ) -> Result<DetailedResponse<ComponentSettingsResponse>> {
        require("project_id", project_id)?;
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "component_settings"],
            &self.params(),
            "get_component_settings",
        )?;
        self.service.send(request).await
    }
}
