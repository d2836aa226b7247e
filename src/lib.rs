pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, education, experience, project, skill};

#[cfg(test)]
mod tests;

use actix_web::{middleware::from_fn, web};

use crate::auth::adapter::incoming::web::middleware::protect;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::education::application::education_use_cases::EducationUseCases;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::shared::storage::UploadPolicy;
use crate::skill::application::skill_use_cases::SkillUseCases;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub project: ProjectUseCases,
    pub skill: SkillUseCases,
    pub education: EducationUseCases,
    pub experience: ExperienceUseCases,
    pub upload_policy: UploadPolicy,
}

/// Registers every route. Login sits outside the admin scope so the gate
/// never sees it.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::education::adapter::incoming::web::routes as education;
    use crate::experience::adapter::incoming::web::routes as experience;
    use crate::project::adapter::incoming::web::routes as project;
    use crate::skill::adapter::incoming::web::routes as skill;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Public reads
    cfg.service(project::get_projects_handler)
        .service(project::get_project_handler)
        .service(skill::get_skills_handler)
        .service(skill::get_skill_handler)
        .service(education::get_education_handler)
        .service(experience::get_experience_handler);

    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);

    // Admin
    cfg.service(
        web::scope("/api/admin")
            .wrap(from_fn(protect))
            .service(project::create_project_handler)
            .service(project::update_project_handler)
            .service(project::delete_project_handler)
            .service(skill::create_skill_handler)
            .service(skill::update_skill_handler)
            .service(skill::delete_skill_handler)
            .service(education::create_education_handler)
            .service(education::update_education_handler)
            .service(education::delete_education_handler)
            .service(experience::create_experience_handler)
            .service(experience::update_experience_handler)
            .service(experience::delete_experience_handler),
    );
}
