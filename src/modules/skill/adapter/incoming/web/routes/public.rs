use actix_web::{get, web, Responder};
use tracing::error;

use super::NOT_FOUND_MESSAGE;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::SkillReadError;
use crate::shared::api::{parse_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "Skills",
    responses(
        (status = 200, description = "All skills", body = Vec<Skill>),
        (status = 404, description = "There are no skills yet."),
        (status = 500, description = "Server error")
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get_list.execute().await {
        Ok(skills) if skills.is_empty() => ApiResponse::not_found("There are no skills yet."),
        Ok(skills) => ApiResponse::resource("Skills", skills),
        Err(e) => {
            error!(error = %e, "Failed to list skills");
            ApiResponse::server_error("Server Error")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/skills/{id}",
    tag = "Skills",
    params(("id" = String, Path, description = "Skill id")),
    responses(
        (status = 200, description = "The skill", body = Skill),
        (status = 404, description = "Skill not found"),
        (status = 500, description = "Server error")
    )
)]
#[get("/api/skills/{id}")]
pub async fn get_skill_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(skill_id) = parse_id(&path) else {
        return ApiResponse::not_found(NOT_FOUND_MESSAGE);
    };

    match data.skill.get_single.execute(skill_id).await {
        Ok(skill) => ApiResponse::resource("Skill", skill),
        Err(SkillReadError::NotFound) => ApiResponse::not_found(NOT_FOUND_MESSAGE),
        Err(e) => {
            error!(%skill_id, error = %e, "Failed to load skill");
            ApiResponse::server_error("Server Error")
        }
    }
}
