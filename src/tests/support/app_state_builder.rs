use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminUseCase, LoginError, ResolveAdminUseCase,
};
use crate::modules::education::application::education_use_cases::EducationUseCases;
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::shared::storage::UploadPolicy;
use crate::tests::support::auth_helper::TEST_ADMIN_ID;
use crate::tests::support::mocks::*;
use crate::tests::support::stubs::{StubLoginAdminUseCase, StubResolveAdminUseCase};
use crate::AppState;

/// Use cases without expectations. A test that reaches one of them fails.
pub fn default_project_use_cases() -> ProjectUseCases {
    ProjectUseCases {
        create: Arc::new(MockCreateProjectUseCase::new()),
        get_list: Arc::new(MockGetProjectsUseCase::new()),
        get_single: Arc::new(MockGetProjectUseCase::new()),
        update: Arc::new(MockUpdateProjectUseCase::new()),
        delete: Arc::new(MockDeleteProjectUseCase::new()),
    }
}

pub fn default_skill_use_cases() -> SkillUseCases {
    SkillUseCases {
        create: Arc::new(MockCreateSkillUseCase::new()),
        get_list: Arc::new(MockGetSkillsUseCase::new()),
        get_single: Arc::new(MockGetSkillUseCase::new()),
        update: Arc::new(MockUpdateSkillUseCase::new()),
        delete: Arc::new(MockDeleteSkillUseCase::new()),
    }
}

pub fn default_education_use_cases() -> EducationUseCases {
    EducationUseCases {
        create: Arc::new(MockCreateEducationUseCase::new()),
        list: Arc::new(MockListEducationUseCase::new()),
        update: Arc::new(MockUpdateEducationUseCase::new()),
        delete: Arc::new(MockDeleteEducationUseCase::new()),
    }
}

pub fn default_experience_use_cases() -> ExperienceUseCases {
    ExperienceUseCases {
        create: Arc::new(MockCreateExperienceUseCase::new()),
        list: Arc::new(MockListExperienceUseCase::new()),
        update: Arc::new(MockUpdateExperienceUseCase::new()),
        delete: Arc::new(MockDeleteExperienceUseCase::new()),
    }
}

pub struct TestAppStateBuilder {
    login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    resolve_admin: Arc<dyn ResolveAdminUseCase + Send + Sync>,
    project: ProjectUseCases,
    skill: SkillUseCases,
    education: EducationUseCases,
    experience: ExperienceUseCases,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login: Arc::new(StubLoginAdminUseCase::error(LoginError::InvalidCredentials)),
            resolve_admin: Arc::new(StubResolveAdminUseCase::found(TEST_ADMIN_ID, "admin")),
            project: default_project_use_cases(),
            skill: default_skill_use_cases(),
            education: default_education_use_cases(),
            experience: default_experience_use_cases(),
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn with_resolve_admin(
        mut self,
        uc: impl ResolveAdminUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resolve_admin = Arc::new(uc);
        self
    }

    pub fn with_project(mut self, project: ProjectUseCases) -> Self {
        self.project = project;
        self
    }

    pub fn with_skill(mut self, skill: SkillUseCases) -> Self {
        self.skill = skill;
        self
    }

    pub fn with_education(mut self, education: EducationUseCases) -> Self {
        self.education = education;
        self
    }

    pub fn with_experience(mut self, experience: ExperienceUseCases) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: AuthUseCases {
                login: self.login,
                resolve_admin: self.resolve_admin,
            },
            project: self.project,
            skill: self.skill,
            education: self.education,
            experience: self.experience,
            upload_policy: self.upload_policy,
        })
    }
}
