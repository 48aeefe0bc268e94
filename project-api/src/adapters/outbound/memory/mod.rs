//! In-memory implementation of the ProjectRepository port.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use itertools::Itertools;
use tokio::sync::RwLock;

use crate::domain::{
    models::{Project, ProjectId},
    ports::outbound::ProjectRepository,
    ProjectError,
};

/// Project store backed by a `HashMap` behind a single lock.
///
/// Clones share the same map, so one instance built at startup can be handed
/// to every service that needs it. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing projects.
    #[allow(dead_code)]
    pub async fn with_projects(self, projects: Vec<Project>) -> Self {
        {
            let mut map = self.projects.write().await;
            for project in projects {
                map.insert(project.id(), project);
            }
        }
        self
    }

    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_all(&self) -> Result<Vec<Project>, ProjectError> {
        // Snapshot under the lock, sort after releasing it.
        let snapshot: Vec<Project> = self.projects.read().await.values().cloned().collect();

        Ok(snapshot
            .into_iter()
            .sorted_by(|a, b| {
                b.created_at()
                    .cmp(&a.created_at())
                    .then_with(|| a.id().cmp(&b.id()))
            })
            .collect())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, ProjectError> {
        Ok(self.projects.read().await.get(id).cloned())
    }

    async fn save(&self, project: Project) -> Result<Project, ProjectError> {
        self.projects
            .write()
            .await
            .insert(project.id(), project.clone());
        Ok(project)
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), ProjectError> {
        self.projects
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(ProjectError::NotFound(*id))
    }

    async fn exists(&self, id: &ProjectId) -> Result<bool, ProjectError> {
        Ok(self.projects.read().await.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use time::{macros::datetime, OffsetDateTime};

    use super::*;
    use crate::domain::models::ProjectStatus;

    fn project_at(name: &str, created_at: OffsetDateTime) -> Project {
        Project::from_parts(
            ProjectId::generate(),
            name,
            "description",
            ProjectStatus::Planned,
            created_at,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find() {
        let repo = InMemoryProjectRepository::new();
        let project = project_at("One", datetime!(2024-05-01 12:00 UTC));

        let stored = repo.save(project.clone()).await.unwrap();

        assert_eq!(stored, project);
        assert_eq!(repo.find_by_id(&project.id()).await.unwrap(), Some(project.clone()));
        assert!(repo.exists(&project.id()).await.unwrap());
    }

    #[tokio::test]
    async fn missing_id_is_absent_not_error() {
        let repo = InMemoryProjectRepository::new();
        let id = ProjectId::generate();

        assert_eq!(repo.find_by_id(&id).await.unwrap(), None);
        assert!(!repo.exists(&id).await.unwrap());
    }

    #[tokio::test]
    async fn save_is_idempotent_upsert() {
        let repo = InMemoryProjectRepository::new();
        let project = project_at("One", datetime!(2024-05-01 12:00 UTC));

        repo.save(project.clone()).await.unwrap();
        let before = repo.find_all().await.unwrap();
        repo.save(project.clone()).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.find_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn save_overwrites_existing_id() {
        let repo = InMemoryProjectRepository::new();
        let mut project = project_at("One", datetime!(2024-05-01 12:00 UTC));
        repo.save(project.clone()).await.unwrap();

        project
            .update(crate::domain::models::ProjectChanges {
                status: Some(ProjectStatus::Done),
                ..Default::default()
            })
            .unwrap();
        repo.save(project.clone()).await.unwrap();

        assert_eq!(repo.len().await, 1);
        let stored = repo.find_by_id(&project.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), ProjectStatus::Done);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let repo = InMemoryProjectRepository::new();
        let id = ProjectId::generate();

        assert_eq!(repo.delete(&id).await.unwrap_err(), ProjectError::NotFound(id));
    }

    #[tokio::test]
    async fn delete_removes() {
        let repo = InMemoryProjectRepository::new();
        let project = project_at("One", datetime!(2024-05-01 12:00 UTC));
        repo.save(project.clone()).await.unwrap();

        repo.delete(&project.id()).await.unwrap();

        assert!(repo.is_empty().await);
        assert_eq!(
            repo.delete(&project.id()).await.unwrap_err(),
            ProjectError::NotFound(project.id())
        );
    }

    #[tokio::test]
    async fn find_all_newest_first() {
        let middle = project_at("Middle", datetime!(2024-05-02 00:00 UTC));
        let newest = project_at("Newest", datetime!(2024-05-03 00:00 UTC));
        let repo = InMemoryProjectRepository::new()
            .with_projects(vec![middle.clone(), newest.clone()])
            .await;

        let oldest = project_at("Oldest", datetime!(2024-05-01 00:00 UTC));
        repo.save(oldest.clone()).await.unwrap();

        let names: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, ["Newest", "Middle", "Oldest"]);
    }

    #[tokio::test]
    async fn find_all_breaks_ties_by_id() {
        let at = datetime!(2024-05-01 00:00 UTC);
        let projects: Vec<_> = (0..20).map(|i| project_at(&format!("p{i}"), at)).collect();
        let repo = InMemoryProjectRepository::new().with_projects(projects.clone()).await;

        let ids: Vec<_> = repo.find_all().await.unwrap().iter().map(|p| p.id()).collect();
        let mut expected: Vec<_> = projects.iter().map(|p| p.id()).collect();
        expected.sort();

        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn concurrent_saves_are_all_kept() {
        let repo = InMemoryProjectRepository::new();

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let project =
                        Project::new(&format!("p{i}"), "desc", ProjectStatus::Planned).unwrap();
                    repo.save(project).await.unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.len().await, 50);
        assert_eq!(repo.find_all().await.unwrap().len(), 50);
    }
}
