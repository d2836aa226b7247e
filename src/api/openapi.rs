use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{DeletedResponse, MessageResponse};
use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, LoginResponseDto};
use crate::education::adapter::incoming::web::routes::dto::{
    CreateEducationRequest, UpdateEducationRequest,
};
use crate::education::application::domain::entities::EducationRecord;
use crate::experience::adapter::incoming::web::routes::dto::{
    CreateExperienceRequest, UpdateExperienceRequest,
};
use crate::experience::application::domain::entities::{EmploymentType, ExperienceRecord};
use crate::project::adapter::incoming::web::routes::ProjectFormSchema;
use crate::project::application::domain::entities::Project;
use crate::skill::adapter::incoming::web::routes::SkillFormSchema;
use crate::skill::application::domain::entities::{Skill, SkillCategory, SkillLevel};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio content and the admin API that manages it"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login_admin_handler,

        // Projects
        crate::project::adapter::incoming::web::routes::get_projects::get_projects_handler,
        crate::project::adapter::incoming::web::routes::get_project::get_project_handler,
        crate::project::adapter::incoming::web::routes::create_project::create_project_handler,
        crate::project::adapter::incoming::web::routes::update_project::update_project_handler,
        crate::project::adapter::incoming::web::routes::delete_project::delete_project_handler,

        // Skills
        crate::skill::adapter::incoming::web::routes::get_skills_handler,
        crate::skill::adapter::incoming::web::routes::get_skill_handler,
        crate::skill::adapter::incoming::web::routes::create_skill_handler,
        crate::skill::adapter::incoming::web::routes::update_skill_handler,
        crate::skill::adapter::incoming::web::routes::delete_skill_handler,

        // Education
        crate::education::adapter::incoming::web::routes::get_education::get_education_handler,
        crate::education::adapter::incoming::web::routes::create_education::create_education_handler,
        crate::education::adapter::incoming::web::routes::update_education::update_education_handler,
        crate::education::adapter::incoming::web::routes::delete_education::delete_education_handler,

        // Experience
        crate::experience::adapter::incoming::web::routes::get_experience_handler,
        crate::experience::adapter::incoming::web::routes::create_experience_handler,
        crate::experience::adapter::incoming::web::routes::update_experience_handler,
        crate::experience::adapter::incoming::web::routes::delete_experience_handler,
    ),
    components(
        schemas(
            MessageResponse,
            DeletedResponse,
            LoginRequestDto,
            LoginResponseDto,
            Project,
            ProjectFormSchema,
            Skill,
            SkillCategory,
            SkillLevel,
            SkillFormSchema,
            EducationRecord,
            CreateEducationRequest,
            UpdateEducationRequest,
            ExperienceRecord,
            EmploymentType,
            CreateExperienceRequest,
            UpdateExperienceRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Administrator login"),
        (name = "Projects", description = "Portfolio projects"),
        (name = "Skills", description = "Skills with icons"),
        (name = "Education", description = "Education history"),
        (name = "Experience", description = "Work experience"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}
