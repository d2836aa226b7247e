use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{
    Project, ProjectDraft, ProjectValidationError,
};
use crate::shared::storage::UploadedFile;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
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

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        draft: ProjectDraft,
        image: Option<UploadedFile>,
    ) -> Result<Project, CreateProjectError>;
}
