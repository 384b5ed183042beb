use super::DiscoveryV2;
use crate::core::service::DetailedResponse;
use crate::domain::model::training::{
    TrainingExample, TrainingQuery, TrainingQueryBody, TrainingQuerySet,
};
use crate::utils::error::Result;
use crate::utils::validation::require;
use reqwest::Method;

impl DiscoveryV2 {
    pub async fn list_training_queries(
        &self,
        project_id: &str,
    ) -> Result<DetailedResponse<TrainingQuerySet>> {
        require("project_id", project_id)?;
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "training_data", "queries"],
            &self.params(),
            "list_training_queries",
        )?;
        self.service.send(request).await
    }

    /// Removes all training queries of a project.
    pub async fn delete_training_queries(&self, project_id: &str) -> Result<DetailedResponse<()>> {
        require("project_id", project_id)?;
        let request = self.service.request(
            Method::DELETE,
            &["v2", "projects", project_id, "training_data", "queries"],
            &self.params(),
            "delete_training_queries",
        )?;
        self.service.send_empty(request).await
    }

    pub async fn create_training_query(
        &self,
        project_id: &str,
        natural_language_query: &str,
        examples: &[TrainingExample],
        filter: Option<&str>,
    ) -> Result<DetailedResponse<TrainingQuery>> {
        require("project_id", project_id)?;
        require("natural_language_query", natural_language_query)?;
        let body = TrainingQueryBody {
            natural_language_query,
            examples,
            filter,
        };
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "training_data", "queries"],
                &self.params(),
                "create_training_query",
            )?
            .json(&body);
        self.service.send(request).await
    }

    pub async fn get_training_query(
        &self,
        project_id: &str,
        query_id: &str,
    ) -> Result<DetailedResponse<TrainingQuery>> {
        require("project_id", project_id)?;
        require("query_id", query_id)?;
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "training_data", "queries", query_id],
            &self.params(),
            "get_training_query",
        )?;
        self.service.send(request).await
    }

    /// Replaces the text, examples and filter of an existing training query.
    pub async fn update_training_query(
        &self,
        project_id: &str,
        query_id: &str,
        natural_language_query: &str,
        examples: &[TrainingExample],
        filter: Option<&str>,
    ) -> Result<DetailedResponse<TrainingQuery>> {
        require("project_id", project_id)?;
        require("query_id", query_id)?;
        require("natural_language_query", natural_language_query)?;
        let body = TrainingQueryBody {
            natural_language_query,
            examples,
            filter,
        };
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id, "training_data", "queries", query_id],
                &self.params(),
                "update_training_query",
            )?
            .json(&body);
        self.service.send(request).await
    }

    pub async fn delete_training_query(
        &self,
        project_id: &str,
        query_id: &str,
    ) -> Result<DetailedResponse<()>> {
        require("project_id", project_id)?;
        require("query_id", query_id)?;
        let request = self.service.request(
            Method::DELETE,
            &["v2", "projects", project_id, "training_data", "queries", query_id],
            &self.params(),
            "delete_training_query",
        )?;
        self.service.send_empty(request).await
    }
}
