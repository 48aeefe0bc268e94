//! HTTP response types for project endpoints.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::models::{Project, ProjectId, ProjectStatus};

/// Public representation of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Creation time (RFC 3339).
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id(),
            name: project.name().to_string(),
            description: project.description().to_string(),
            status: project.status(),
            created_at: project.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
