use std::sync::Arc;

use crate::domain::{
    ports::{inbound::ProjectService, outbound::ProjectRepository},
    services::ProjectServiceImpl,
};

#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<dyn ProjectService>,
}

impl AppState {
    /// Wire the project service to the given store.
    ///
    /// The store is created once by the caller and shared by every request.
    pub fn new<R: ProjectRepository>(repository: Arc<R>) -> Self {
        Self {
            project_service: Arc::new(ProjectServiceImpl::new(repository)),
        }
    }
}
