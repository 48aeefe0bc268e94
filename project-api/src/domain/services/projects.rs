use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{NewProject, Project, ProjectChanges, ProjectId},
    ports::{inbound::ProjectService, outbound::ProjectRepository},
    ProjectError,
};

/// Implementation of the ProjectService inbound port.
///
/// Validation lives in the [`Project`] entity; this service only sequences
/// entity and repository calls and passes their errors through unchanged.
pub struct ProjectServiceImpl<R> {
    repo: Arc<R>,
}

impl<R> ProjectServiceImpl<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: ProjectRepository> ProjectService for ProjectServiceImpl<R> {
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectError> {
        self.repo.find_all().await
    }

    async fn get_project(&self, id: &ProjectId) -> Result<Project, ProjectError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(*id))
    }

    async fn create_project(&self, request: NewProject) -> Result<Project, ProjectError> {
        let project = Project::new(&request.name, &request.description, request.status)?;
        let project = self.repo.save(project).await?;

        tracing::info!(id = %project.id(), status = %project.status(), "project created");
        Ok(project)
    }

    async fn update_project(
        &self,
        id: &ProjectId,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectError> {
        let mut project = self.get_project(id).await?;
        project.update(changes)?;
        let project = self.repo.save(project).await?;

        tracing::info!(id = %project.id(), status = %project.status(), "project updated");
        Ok(project)
    }

    async fn delete_project(&self, id: &ProjectId) -> Result<(), ProjectError> {
        self.repo.delete(id).await?;

        tracing::info!(id = %id, "project deleted");
        Ok(())
    }
}
