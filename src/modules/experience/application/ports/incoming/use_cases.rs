use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{
    ExperienceDraft, ExperiencePatch, ExperienceRecord, ExperienceValidationError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceError {
    #[error("Experience not found.")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ExperienceValidationError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(&self, draft: ExperienceDraft) -> Result<ExperienceRecord, ExperienceError>;
}

#[async_trait]
pub trait ListExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ExperienceError>;
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        patch: ExperiencePatch,
    ) -> Result<ExperienceRecord, ExperienceError>;
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ExperienceError>;
}
