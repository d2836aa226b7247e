use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{Skill, SkillData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill name already exists")]
    NameAlreadyExists,

    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, data: SkillData) -> Result<Skill, SkillRepositoryError>;

    /// Oldest first.
    async fn find_all(&self) -> Result<Vec<Skill>, SkillRepositoryError>;

    async fn find_by_id(&self, skill_id: Uuid) -> Result<Option<Skill>, SkillRepositoryError>;

    async fn replace_skill(&self, skill_id: Uuid, data: SkillData)
        -> Result<Skill, SkillRepositoryError>;

    async fn delete_skill(&self, skill_id: Uuid) -> Result<(), SkillRepositoryError>;
}
