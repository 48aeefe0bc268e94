use thiserror::Error;

use crate::domain::models::ProjectId;

/// Errors that can occur during project operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("{0}")]
    Validation(String),
    #[error("Project with id '{0}' not found")]
    NotFound(ProjectId),
    #[allow(dead_code)]
    #[error("Project with id '{0}' already exists")]
    AlreadyExists(ProjectId),
    /// Raised by persistent backends; the in-memory store never fails.
    #[allow(dead_code)]
    #[error("storage error: {0}")]
    Storage(String),
}

impl ProjectError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
