//! Project repository port (outbound).
//!
//! Defines the persistence contract the project service depends on.

use async_trait::async_trait;

use crate::domain::{
    models::{Project, ProjectId},
    ProjectError,
};

/// Outbound port for project persistence.
///
/// Absence is an ordinary value for lookups (`find_by_id`, `exists`) and an
/// error only for `delete`, where the caller explicitly targets a project.
#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    /// All projects, newest `created_at` first, ties ordered by id.
    async fn find_all(&self) -> Result<Vec<Project>, ProjectError>;

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, ProjectError>;

    /// Insert or overwrite by id, returning the stored project.
    async fn save(&self, project: Project) -> Result<Project, ProjectError>;

    /// Remove a project. Fails with [`ProjectError::NotFound`] if it is absent.
    async fn delete(&self, id: &ProjectId) -> Result<(), ProjectError>;

    #[allow(dead_code)]
    async fn exists(&self, id: &ProjectId) -> Result<bool, ProjectError>;
}
