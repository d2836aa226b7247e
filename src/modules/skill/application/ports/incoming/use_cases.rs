use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{
    Skill, SkillDraft, SkillPatch, SkillValidationError,
};
use crate::shared::storage::UploadedFile;

/// Failure of any skill write.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillWriteError {
    #[error("Skill not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] SkillValidationError),

    #[error("A skill with this name already exists.")]
    NameAlreadyExists,

    #[error("storage error: {0}")]
    StorageError(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillReadError {
    #[error("Skill not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        draft: SkillDraft,
        icon: Option<UploadedFile>,
    ) -> Result<Skill, SkillWriteError>;
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, SkillReadError>;
}

#[async_trait]
pub trait GetSkillUseCase: Send + Sync {
    async fn execute(&self, skill_id: Uuid) -> Result<Skill, SkillReadError>;
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        skill_id: Uuid,
        patch: SkillPatch,
        icon: Option<UploadedFile>,
    ) -> Result<Skill, SkillWriteError>;
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, skill_id: Uuid) -> Result<(), SkillWriteError>;
}
