use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::education::application::domain::entities::{
    EducationDraft, EducationPatch, EducationRecord,
};
use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, EducationError, ListEducationUseCase,
    UpdateEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::education_repository::{
    EducationRepository, EducationRepositoryError,
};

pub struct EducationService<R>
where
    R: EducationRepository,
{
    repository: R,
}

impl<R> EducationService<R>
where
    R: EducationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<EducationRepositoryError> for EducationError {
    fn from(e: EducationRepositoryError) -> Self {
        match e {
            EducationRepositoryError::NotFound => EducationError::NotFound,
            EducationRepositoryError::DatabaseError(msg) => EducationError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<R> CreateEducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, draft: EducationDraft) -> Result<EducationRecord, EducationError> {
        let record = self.repository.create(draft.validate()?).await?;
        info!(education_id = %record.id, "Education record created");
        Ok(record)
    }
}

#[async_trait]
impl<R> ListEducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EducationRecord>, EducationError> {
        Ok(self.repository.find_all().await?)
    }
}

#[async_trait]
impl<R> UpdateEducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        patch: EducationPatch,
    ) -> Result<EducationRecord, EducationError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(EducationError::NotFound)?;

        let data = patch.merge_into(&current).validate()?;
        let record = self.repository.replace(id, data).await?;

        info!(education_id = %id, "Education record updated");
        Ok(record)
    }
}

#[async_trait]
impl<R> DeleteEducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), EducationError> {
        self.repository.delete(id).await?;
        info!(education_id = %id, "Education record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::education::application::domain::entities::EducationValidationError;
    use crate::tests::support::education_test_fixtures::sample_education;
    use crate::tests::support::mocks::MockEducationRepo;

    fn draft() -> EducationDraft {
        EducationDraft {
            school: Some("MIT".to_string()),
            degree: Some("BSc".to_string()),
            field_of_study: Some("Computer Science".to_string()),
            start_date: Some("2018-09-01".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_validates_before_writing() {
        let mut repo = MockEducationRepo::new();
        repo.expect_create().never();

        let mut bad = draft();
        bad.degree = None;

        let err = CreateEducationUseCase::execute(&EducationService::new(repo), bad)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            EducationError::Validation(EducationValidationError::Missing(_))
        ));
    }

    #[tokio::test]
    async fn test_create_persists_parsed_dates() {
        let mut repo = MockEducationRepo::new();
        repo.expect_create()
            .withf(|data| data.start_date.to_rfc3339().starts_with("2018-09-01") && data.end_date.is_none())
            .times(1)
            .returning(|_| Ok(sample_education()));

        let result = CreateEducationUseCase::execute(&EducationService::new(repo), draft()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_merges_over_stored_record() {
        let mut repo = MockEducationRepo::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(sample_education())));
        repo.expect_replace()
            .withf(|_, data| data.degree == "MSc" && data.school == sample_education().school)
            .times(1)
            .returning(|_, _| Ok(sample_education()));

        let patch = EducationPatch {
            degree: Some("MSc".to_string()),
            ..Default::default()
        };

        let result =
            UpdateEducationUseCase::execute(&EducationService::new(repo), Uuid::new_v4(), patch)
                .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_blank_required_field_is_rejected() {
        let mut repo = MockEducationRepo::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(sample_education())));
        repo.expect_replace().never();

        let patch = EducationPatch {
            school: Some("   ".to_string()),
            ..Default::default()
        };

        let err =
            UpdateEducationUseCase::execute(&EducationService::new(repo), Uuid::new_v4(), patch)
                .await
                .unwrap_err();
        assert!(matches!(err, EducationError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_not_found() {
        let mut repo = MockEducationRepo::new();
        repo.expect_delete()
            .returning(|_| Err(EducationRepositoryError::NotFound));

        let err = DeleteEducationUseCase::execute(&EducationService::new(repo), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, EducationError::NotFound));
    }
}
