use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::modules::education::application::domain::entities::{
    EducationData, EducationDraft, EducationPatch, EducationRecord,
};
use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, EducationError, ListEducationUseCase,
    UpdateEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::education_repository::{
    EducationRepository, EducationRepositoryError,
};
use crate::modules::experience::application::domain::entities::{
    ExperienceData, ExperienceDraft, ExperiencePatch, ExperienceRecord,
};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceError, ListExperienceUseCase,
    UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::modules::project::application::domain::entities::{
    Project, ProjectData, ProjectDraft, ProjectPatch,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectError, GetProjectUseCase, GetProjectsError, GetProjectsUseCase, UpdateProjectError,
    UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::skill::application::domain::entities::{
    Skill, SkillData, SkillDraft, SkillPatch,
};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillUseCase, GetSkillsUseCase, SkillReadError,
    SkillWriteError, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    SkillRepository, SkillRepositoryError,
};
use crate::shared::storage::{FileStorage, StorageError, UploadedFile};

// ============================================================================
// Outgoing ports
// ============================================================================

mock! {
    pub FileStore {}

    #[async_trait]
    impl FileStorage for FileStore {
        async fn store(&self, file: UploadedFile) -> Result<String, StorageError>;
    }
}

mock! {
    pub ProjectRepo {}

    #[async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn create_project(&self, data: ProjectData) -> Result<Project, ProjectRepositoryError>;
        async fn find_all(&self) -> Result<Vec<Project>, ProjectRepositoryError>;
        async fn find_by_id(&self, project_id: Uuid) -> Result<Option<Project>, ProjectRepositoryError>;
        async fn replace_project(&self, project_id: Uuid, data: ProjectData) -> Result<Project, ProjectRepositoryError>;
        async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError>;
    }
}

mock! {
    pub SkillRepo {}

    #[async_trait]
    impl SkillRepository for SkillRepo {
        async fn create_skill(&self, data: SkillData) -> Result<Skill, SkillRepositoryError>;
        async fn find_all(&self) -> Result<Vec<Skill>, SkillRepositoryError>;
        async fn find_by_id(&self, skill_id: Uuid) -> Result<Option<Skill>, SkillRepositoryError>;
        async fn replace_skill(&self, skill_id: Uuid, data: SkillData) -> Result<Skill, SkillRepositoryError>;
        async fn delete_skill(&self, skill_id: Uuid) -> Result<(), SkillRepositoryError>;
    }
}

mock! {
    pub EducationRepo {}

    #[async_trait]
    impl EducationRepository for EducationRepo {
        async fn create(&self, data: EducationData) -> Result<EducationRecord, EducationRepositoryError>;
        async fn find_all(&self) -> Result<Vec<EducationRecord>, EducationRepositoryError>;
        async fn find_by_id(&self, id: Uuid) -> Result<Option<EducationRecord>, EducationRepositoryError>;
        async fn replace(&self, id: Uuid, data: EducationData) -> Result<EducationRecord, EducationRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), EducationRepositoryError>;
    }
}

mock! {
    pub ExperienceRepo {}

    #[async_trait]
    impl ExperienceRepository for ExperienceRepo {
        async fn create(&self, data: ExperienceData) -> Result<ExperienceRecord, ExperienceRepositoryError>;
        async fn find_all(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError>;
        async fn find_by_id(&self, id: Uuid) -> Result<Option<ExperienceRecord>, ExperienceRepositoryError>;
        async fn replace(&self, id: Uuid, data: ExperienceData) -> Result<ExperienceRecord, ExperienceRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;
    }
}

// ============================================================================
// Project use cases
// ============================================================================

mock! {
    pub CreateProjectUseCase {}

    #[async_trait]
    impl CreateProjectUseCase for CreateProjectUseCase {
        async fn execute(&self, draft: ProjectDraft, image: Option<UploadedFile>) -> Result<Project, CreateProjectError>;
    }
}

mock! {
    pub GetProjectsUseCase {}

    #[async_trait]
    impl GetProjectsUseCase for GetProjectsUseCase {
        async fn execute(&self) -> Result<Vec<Project>, GetProjectsError>;
    }
}

mock! {
    pub GetProjectUseCase {}

    #[async_trait]
    impl GetProjectUseCase for GetProjectUseCase {
        async fn execute(&self, project_id: Uuid) -> Result<Project, GetProjectError>;
    }
}

mock! {
    pub UpdateProjectUseCase {}

    #[async_trait]
    impl UpdateProjectUseCase for UpdateProjectUseCase {
        async fn execute(&self, project_id: Uuid, patch: ProjectPatch, image: Option<UploadedFile>) -> Result<Project, UpdateProjectError>;
    }
}

mock! {
    pub DeleteProjectUseCase {}

    #[async_trait]
    impl DeleteProjectUseCase for DeleteProjectUseCase {
        async fn execute(&self, project_id: Uuid) -> Result<(), DeleteProjectError>;
    }
}

// ============================================================================
// Skill use cases
// ============================================================================

mock! {
    pub CreateSkillUseCase {}

    #[async_trait]
    impl CreateSkillUseCase for CreateSkillUseCase {
        async fn execute(&self, draft: SkillDraft, icon: Option<UploadedFile>) -> Result<Skill, SkillWriteError>;
    }
}

mock! {
    pub GetSkillsUseCase {}

    #[async_trait]
    impl GetSkillsUseCase for GetSkillsUseCase {
        async fn execute(&self) -> Result<Vec<Skill>, SkillReadError>;
    }
}

mock! {
    pub GetSkillUseCase {}

    #[async_trait]
    impl GetSkillUseCase for GetSkillUseCase {
        async fn execute(&self, skill_id: Uuid) -> Result<Skill, SkillReadError>;
    }
}

mock! {
    pub UpdateSkillUseCase {}

    #[async_trait]
    impl UpdateSkillUseCase for UpdateSkillUseCase {
        async fn execute(&self, skill_id: Uuid, patch: SkillPatch, icon: Option<UploadedFile>) -> Result<Skill, SkillWriteError>;
    }
}

mock! {
    pub DeleteSkillUseCase {}

    #[async_trait]
    impl DeleteSkillUseCase for DeleteSkillUseCase {
        async fn execute(&self, skill_id: Uuid) -> Result<(), SkillWriteError>;
    }
}

// ============================================================================
// Education use cases
// ============================================================================

mock! {
    pub CreateEducationUseCase {}

    #[async_trait]
    impl CreateEducationUseCase for CreateEducationUseCase {
        async fn execute(&self, draft: EducationDraft) -> Result<EducationRecord, EducationError>;
    }
}

mock! {
    pub ListEducationUseCase {}

    #[async_trait]
    impl ListEducationUseCase for ListEducationUseCase {
        async fn execute(&self) -> Result<Vec<EducationRecord>, EducationError>;
    }
}

mock! {
    pub UpdateEducationUseCase {}

    #[async_trait]
    impl UpdateEducationUseCase for UpdateEducationUseCase {
        async fn execute(&self, id: Uuid, patch: EducationPatch) -> Result<EducationRecord, EducationError>;
    }
}

mock! {
    pub DeleteEducationUseCase {}

    #[async_trait]
    impl DeleteEducationUseCase for DeleteEducationUseCase {
        async fn execute(&self, id: Uuid) -> Result<(), EducationError>;
    }
}

// ============================================================================
// Experience use cases
// ============================================================================

mock! {
    pub CreateExperienceUseCase {}

    #[async_trait]
    impl CreateExperienceUseCase for CreateExperienceUseCase {
        async fn execute(&self, draft: ExperienceDraft) -> Result<ExperienceRecord, ExperienceError>;
    }
}

mock! {
    pub ListExperienceUseCase {}

    #[async_trait]
    impl ListExperienceUseCase for ListExperienceUseCase {
        async fn execute(&self) -> Result<Vec<ExperienceRecord>, ExperienceError>;
    }
}

mock! {
    pub UpdateExperienceUseCase {}

    #[async_trait]
    impl UpdateExperienceUseCase for UpdateExperienceUseCase {
        async fn execute(&self, id: Uuid, patch: ExperiencePatch) -> Result<ExperienceRecord, ExperienceError>;
    }
}

mock! {
    pub DeleteExperienceUseCase {}

    #[async_trait]
    impl DeleteExperienceUseCase for DeleteExperienceUseCase {
        async fn execute(&self, id: Uuid) -> Result<(), ExperienceError>;
    }
}
