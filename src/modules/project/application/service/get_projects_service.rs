use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepository;

pub struct GetProjectsService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> GetProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> GetProjectsUseCase for GetProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        self.project_repository
            .find_all()
            .await
            .map_err(|e| GetProjectsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::mocks::MockProjectRepo;
    use crate::tests::support::project_test_fixtures::sample_project;

    #[tokio::test]
    async fn test_list_passes_through() {
        let mut repo = MockProjectRepo::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![sample_project(), sample_project()]));

        let service = GetProjectsService::new(repo);
        assert_eq!(service.execute().await.unwrap().len(), 2);
    }
}
