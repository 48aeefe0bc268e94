//! HTTP request bodies for project endpoints.
//!
//! Shape and length limits are checked here; emptiness is left to the
//! [`Project`](crate::domain::models::Project) entity.

use serde::Deserialize;

use crate::domain::models::{NewProject, ProjectChanges, ProjectStatus};

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// A request body that broke a boundary limit.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{field} must be at most {max} characters")]
pub struct RequestValidationError {
    pub field: &'static str,
    pub max: usize,
}

fn check_length(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), RequestValidationError> {
    match value {
        Some(v) if v.chars().count() > max => Err(RequestValidationError { field, max }),
        _ => Ok(()),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
}

impl CreateProjectRequest {
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        check_length("name", Some(&self.name), MAX_NAME_LENGTH)?;
        check_length(
            "description",
            Some(&self.description),
            MAX_DESCRIPTION_LENGTH,
        )
    }
}

impl From<CreateProjectRequest> for NewProject {
    fn from(request: CreateProjectRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            status: request.status,
        }
    }
}

/// Every field is optional; omitted fields keep their current value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl UpdateProjectRequest {
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        check_length("name", self.name.as_deref(), MAX_NAME_LENGTH)?;
        check_length(
            "description",
            self.description.as_deref(),
            MAX_DESCRIPTION_LENGTH,
        )
    }
}

impl From<UpdateProjectRequest> for ProjectChanges {
    fn from(request: UpdateProjectRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            status: request.status,
        }
    }
}
