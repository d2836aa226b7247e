use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::project::application::domain::entities::{
    Project, ProjectDraft, ProjectValidationError,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::storage::{FileStorage, UploadedFile};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
    file_storage: Arc<dyn FileStorage + Send + Sync>,
}

impl<R> CreateProjectService<R>
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

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        draft: ProjectDraft,
        image: Option<UploadedFile>,
    ) -> Result<Project, CreateProjectError> {
        let fields = draft.validate()?;

        // Nothing is written to disk for a submission that cannot be saved.
        let image = image.ok_or(ProjectValidationError::MissingImage)?;
        let image_path = self
            .file_storage
            .store(image)
            .await
            .map_err(|e| CreateProjectError::StorageError(e.to_string()))?;

        let data = fields.with_image(Some(image_path))?;

        let project = self
            .project_repository
            .create_project(data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::GithubLinkAlreadyExists => {
                    CreateProjectError::GithubLinkAlreadyExists
                }
                ProjectRepositoryError::DemoLiveAlreadyExists => {
                    CreateProjectError::DemoLiveAlreadyExists
                }
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::NotFound => CreateProjectError::RepositoryError(
                    "unexpected not found while creating project".to_string(),
                ),
            })?;

        info!(project_id = %project.id, "Project created");
        Ok(project)
    }
}
