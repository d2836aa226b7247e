use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{ExperienceData, ExperienceRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create(&self, data: ExperienceData) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    /// Most recent start date first.
    async fn find_all(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ExperienceRecord>, ExperienceRepositoryError>;

    async fn replace(
        &self,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}
