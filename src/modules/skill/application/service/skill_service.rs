use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{
    Skill, SkillDraft, SkillPatch, SkillValidationError,
};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillUseCase, GetSkillsUseCase, SkillReadError,
    SkillWriteError, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    SkillRepository, SkillRepositoryError,
};
use crate::shared::storage::{FileStorage, UploadedFile};

/// All skill use cases over one repository and one file store.
pub struct SkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
    file_storage: Arc<dyn FileStorage + Send + Sync>,
}

impl<R> SkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R, file_storage: Arc<dyn FileStorage + Send + Sync>) -> Self {
        Self {
            skill_repository,
            file_storage,
        }
    }

    async fn store_icon(&self, icon: UploadedFile) -> Result<String, SkillWriteError> {
        self.file_storage
            .store(icon)
            .await
            .map_err(|e| SkillWriteError::StorageError(e.to_string()))
    }
}

impl From<SkillRepositoryError> for SkillWriteError {
    fn from(e: SkillRepositoryError) -> Self {
        match e {
            SkillRepositoryError::NameAlreadyExists => SkillWriteError::NameAlreadyExists,
            SkillRepositoryError::NotFound => SkillWriteError::NotFound,
            SkillRepositoryError::DatabaseError(msg) => SkillWriteError::RepositoryError(msg),
        }
    }
}

impl From<SkillRepositoryError> for SkillReadError {
    fn from(e: SkillRepositoryError) -> Self {
        match e {
            SkillRepositoryError::NotFound => SkillReadError::NotFound,
            other => SkillReadError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        draft: SkillDraft,
        icon: Option<UploadedFile>,
    ) -> Result<Skill, SkillWriteError> {
        let fields = draft.validate()?;
        let icon = icon.ok_or(SkillValidationError::MissingIcon)?;
        let icon_path = self.store_icon(icon).await?;

        let skill = self
            .skill_repository
            .create_skill(fields.with_icon(Some(icon_path))?)
            .await?;

        info!(skill_id = %skill.id, name = %skill.name, "Skill created");
        Ok(skill)
    }
}

#[async_trait]
impl<R> GetSkillsUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Skill>, SkillReadError> {
        Ok(self.skill_repository.find_all().await?)
    }
}

#[async_trait]
impl<R> GetSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, skill_id: Uuid) -> Result<Skill, SkillReadError> {
        self.skill_repository
            .find_by_id(skill_id)
            .await?
            .ok_or(SkillReadError::NotFound)
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        skill_id: Uuid,
        patch: SkillPatch,
        icon: Option<UploadedFile>,
    ) -> Result<Skill, SkillWriteError> {
        let current = self
            .skill_repository
            .find_by_id(skill_id)
            .await?
            .ok_or(SkillWriteError::NotFound)?;

        let fields = patch.merge_into(&current).validate()?;

        let icon_path = match icon {
            Some(icon) => self.store_icon(icon).await?,
            None => current.skill_icon,
        };

        let skill = self
            .skill_repository
            .replace_skill(skill_id, fields.with_icon(Some(icon_path))?)
            .await?;

        info!(%skill_id, "Skill updated");
        Ok(skill)
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, skill_id: Uuid) -> Result<(), SkillWriteError> {
        self.skill_repository.delete_skill(skill_id).await?;
        info!(%skill_id, "Skill deleted");
        Ok(())
    }
}
