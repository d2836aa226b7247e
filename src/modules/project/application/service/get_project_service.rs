use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectError, GetProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepository;

pub struct GetProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> GetProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> GetProjectUseCase for GetProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<Project, GetProjectError> {
        self.project_repository
            .find_by_id(project_id)
            .await
            .map_err(|e| GetProjectError::RepositoryError(e.to_string()))?
            .ok_or(GetProjectError::NotFound)
    }
}
