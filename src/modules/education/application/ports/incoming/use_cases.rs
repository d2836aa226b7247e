use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::education::application::domain::entities::{
    EducationDraft, EducationPatch, EducationRecord, EducationValidationError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationError {
    #[error("Education record not found.")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] EducationValidationError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateEducationUseCase: Send + Sync {
    async fn execute(&self, draft: EducationDraft) -> Result<EducationRecord, EducationError>;
}

#[async_trait]
pub trait ListEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EducationRecord>, EducationError>;
}

#[async_trait]
pub trait UpdateEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        patch: EducationPatch,
    ) -> Result<EducationRecord, EducationError>;
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), EducationError>;
}
