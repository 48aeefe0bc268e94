use async_trait::async_trait;

use crate::domain::{
    models::{NewProject, Project, ProjectChanges, ProjectId},
    ProjectError,
};

/// Inbound port for project operations.
///
/// One method per use case; HTTP handlers only talk to this trait.
#[async_trait]
pub trait ProjectService: Send + Sync + 'static {
    /// List every project, newest first.
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectError>;

    /// Fetch a single project, failing with `NotFound` if it does not exist.
    async fn get_project(&self, id: &ProjectId) -> Result<Project, ProjectError>;

    async fn create_project(&self, request: NewProject) -> Result<Project, ProjectError>;

    /// Apply a partial update to an existing project.
    async fn update_project(
        &self,
        id: &ProjectId,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectError>;

    async fn delete_project(&self, id: &ProjectId) -> Result<(), ProjectError>;
}
