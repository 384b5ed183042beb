use super::DiscoveryV2;
use crate::core::service::DetailedResponse;
use crate::domain::model::projects::{
    CreateProjectBody, DefaultQueryParams, ListFieldsResponse, ListProjectsResponse,
    ProjectDetails, ProjectType, UpdateProjectBody,
};
use crate::utils::error::Result;
use crate::utils::validation::require;
use reqwest::Method;

impl DiscoveryV2 {
    /// Lists the projects of the service instance.
    pub async fn list_projects(&self) -> Result<DetailedResponse<ListProjectsResponse>> {
        let request =
            self.service
                .request(Method::GET, &["v2", "projects"], &self.params(), "list_projects")?;
        self.service.send(request).await
    }

    pub async fn create_project(
        &self,
        name: &str,
        kind: ProjectType,
        default_query_parameters: Option<&DefaultQueryParams>,
    ) -> Result<DetailedResponse<ProjectDetails>> {
        require("name", name)?;
        let body = CreateProjectBody {
            name,
            kind,
            default_query_parameters,
        };
        let request = self
            .service
            .request(Method::POST, &["v2", "projects"], &self.params(), "create_project")?
            .json(&body);
        self.service.send(request).await
    }

    pub async fn get_project(&self, project_id: &str) -> Result<DetailedResponse<ProjectDetails>> {
        require("project_id", project_id)?;
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id],
            &self.params(),
            "get_project",
        )?;
        self.service.send(request).await
    }

    /// Renames a project. Sends an empty body when `name` is `None`.
    pub async fn update_project(
        &self,
        project_id: &str,
        name: Option<&str>,
    ) -> Result<DetailedResponse<ProjectDetails>> {
        require("project_id", project_id)?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v2", "projects", project_id],
                &self.params(),
                "update_project",
            )?
            .json(&UpdateProjectBody { name });
        self.service.send(request).await
    }

    /// Deletes a project and everything in it. Not reversible.
    pub async fn delete_project(&self, project_id: &str) -> Result<DetailedResponse<()>> {
        require("project_id", project_id)?;
        let request = self.service.request(
            Method::DELETE,
            &["v2", "projects", project_id],
            &self.params(),
            "delete_project",
        )?;
        self.service.send_empty(request).await
    }

    /// Lists the fields that can be queried, optionally limited to some collections.
    pub async fn list_fields(
        &self,
        project_id: &str,
        collection_ids: Option<&[String]>,
    ) -> Result<DetailedResponse<ListFieldsResponse>> {
        require("project_id", project_id)?;
        let mut params = self.params();
        params.push_list("collection_ids", collection_ids);
        let request = self.service.request(
            Method::GET,
            &["v2", "projects", project_id, "fields"],
            &params,
            "list_fields",
        )?;
        self.service.send(request).await
    }
}
