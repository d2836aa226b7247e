use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{
    ExperienceDraft, ExperiencePatch, ExperienceRecord,
};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceError, ListExperienceUseCase,
    UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceRepository, ExperienceRepositoryError,
};

pub struct ExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> ExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<ExperienceRepositoryError> for ExperienceError {
    fn from(e: ExperienceRepositoryError) -> Self {
        match e {
            ExperienceRepositoryError::NotFound => ExperienceError::NotFound,
            other => ExperienceError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, draft: ExperienceDraft) -> Result<ExperienceRecord, ExperienceError> {
        let record = self.repository.create(draft.validate()?).await?;
        info!(experience_id = %record.id, "Experience created");
        Ok(record)
    }
}

#[async_trait]
impl<R> ListExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ExperienceError> {
        Ok(self.repository.find_all().await?)
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        patch: ExperiencePatch,
    ) -> Result<ExperienceRecord, ExperienceError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ExperienceError::NotFound)?;

        let data = patch.merge_into(&current).validate()?;
        let record = self.repository.replace(id, data).await?;

        info!(experience_id = %id, "Experience updated");
        Ok(record)
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ExperienceError> {
        self.repository.delete(id).await?;
        info!(experience_id = %id, "Experience deleted");
        Ok(())
    }
}
