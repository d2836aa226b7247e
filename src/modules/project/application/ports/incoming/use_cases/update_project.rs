use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    Project, ProjectPatch, ProjectValidationError,
};
use crate::shared::storage::UploadedFile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ProjectValidationError),

    #[error("A project with this GitHub link already exists.")]
    GithubLinkAlreadyExists,

    #[error("A project with this live demo link already exists.")]
    DemoLiveAlreadyExists,

    #[error("storage error: {0}")]
    StorageError(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    /// A new image, when given, replaces the stored reference.
    async fn execute(
        &self,
        project_id: Uuid,
        patch: ProjectPatch,
        image: Option<UploadedFile>,
    ) -> Result<Project, UpdateProjectError>;
}
