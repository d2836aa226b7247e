use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::education::application::domain::entities::{EducationData, EducationRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationRepositoryError {
    #[error("Education record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn create(&self, data: EducationData) -> Result<EducationRecord, EducationRepositoryError>;

    /// Most recent start date first.
    async fn find_all(&self) -> Result<Vec<EducationRecord>, EducationRepositoryError>;

    async fn find_by_id(&self, id: Uuid)
        -> Result<Option<EducationRecord>, EducationRepositoryError>;

    async fn replace(
        &self,
        id: Uuid,
        data: EducationData,
    ) -> Result<EducationRecord, EducationRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), EducationRepositoryError>;
}
