use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectPatch};
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::storage::{FileStorage, UploadedFile};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
    file_storage: Arc<dyn FileStorage + Send + Sync>,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R, file_storage: Arc<dyn FileStorage + Send + Sync>) -> Self {
        Self {
            project_repository,
            file_storage,
        }
    }
}

fn map_repository_error(e: ProjectRepositoryError) -> UpdateProjectError {
    match e {
        ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
        ProjectRepositoryError::GithubLinkAlreadyExists => {
            UpdateProjectError::GithubLinkAlreadyExists
        }
        ProjectRepositoryError::DemoLiveAlreadyExists => UpdateProjectError::DemoLiveAlreadyExists,
        ProjectRepositoryError::DatabaseError(msg)
        | ProjectRepositoryError::SerializationError(msg) => {
            UpdateProjectError::RepositoryError(msg)
        }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        patch: ProjectPatch,
        image: Option<UploadedFile>,
    ) -> Result<Project, UpdateProjectError> {
        let current = self
            .project_repository
            .find_by_id(project_id)
            .await
            .map_err(map_repository_error)?
            .ok_or(UpdateProjectError::NotFound)?;

        let fields = patch.merge_into(&current).validate()?;

        // The previous file stays on disk; only the reference moves.
        let image_path = match image {
            Some(file) => self
                .file_storage
                .store(file)
                .await
                .map_err(|e| UpdateProjectError::StorageError(e.to_string()))?,
            None => current.project_image,
        };

        let data = fields.with_image(Some(image_path))?;

        let project = self
            .project_repository
            .replace_project(project_id, data)
            .await
            .map_err(map_repository_error)?;

        info!(project_id = %project.id, "Project updated");
        Ok(project)
    }
}
