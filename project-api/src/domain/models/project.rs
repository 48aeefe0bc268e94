use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use super::ProjectId;
use crate::domain::ProjectError;

const EMPTY_NAME: &str = "Project name cannot be empty";
const EMPTY_DESCRIPTION: &str = "Project description cannot be empty";

/// Lifecycle label of a project.
///
/// There is no transition graph, any status may replace any other.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Planned,
    InProgress,
    Done,
}

/// A project record.
///
/// `id` and `created_at` are fixed at construction; the remaining fields only
/// change through [`Project::update`], which keeps `name` and `description`
/// trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    status: ProjectStatus,
    created_at: OffsetDateTime,
}

impl Project {
    /// Create a brand new project with a generated id, stamped with the current time.
    pub fn new(
        name: &str,
        description: &str,
        status: ProjectStatus,
    ) -> Result<Self, ProjectError> {
        Self::from_parts(
            ProjectId::generate(),
            name,
            description,
            status,
            OffsetDateTime::now_utc(),
        )
    }

    /// Rebuild a project from already known identity and creation time.
    pub fn from_parts(
        id: ProjectId,
        name: &str,
        description: &str,
        status: ProjectStatus,
        created_at: OffsetDateTime,
    ) -> Result<Self, ProjectError> {
        Ok(Self {
            id,
            name: non_empty(name, EMPTY_NAME)?,
            description: non_empty(description, EMPTY_DESCRIPTION)?,
            status,
            created_at,
        })
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Apply a partial update in place.
    ///
    /// Every supplied field is validated before anything is written, so an
    /// error leaves the project untouched.
    pub fn update(&mut self, changes: ProjectChanges) -> Result<(), ProjectError> {
        let name = changes
            .name
            .as_deref()
            .map(|n| non_empty(n, EMPTY_NAME))
            .transpose()?;
        let description = changes
            .description
            .as_deref()
            .map(|d| non_empty(d, EMPTY_DESCRIPTION))
            .transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }

        Ok(())
    }
}

fn non_empty(value: &str, message: &str) -> Result<String, ProjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProjectError::validation(message));
    }
    Ok(trimmed.to_string())
}

/// Input for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
}

/// A partial update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}
