use actix_web::{delete, post, put, web, HttpResponse, Responder};
use tracing::{error, info};

use super::dto::{CreateExperienceRequest, UpdateExperienceRequest};
use super::NOT_FOUND_MESSAGE;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::experience::application::ports::incoming::use_cases::ExperienceError;
use crate::shared::api::{parse_id, ApiResponse};
use crate::AppState;

fn error_response(e: ExperienceError) -> HttpResponse {
    match e {
        ExperienceError::NotFound => ApiResponse::not_found(NOT_FOUND_MESSAGE),
        ExperienceError::Validation(e) => ApiResponse::validation_error(&e.to_string()),
        ExperienceError::RepositoryError(_) => {
            error!(error = %e, "Experience write failed");
            ApiResponse::server_error("Server Error")
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/experience",
    tag = "Experience",
    security(("bearer_auth" = [])),
    request_body = CreateExperienceRequest,
    responses(
        (status = 201, description = "Experience added successfully."),
        (status = 400, description = "Missing fields, invalid date or employment type"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Server error")
    )
)]
#[post("/experience")]
pub async fn create_experience_handler(
    admin: AuthenticatedAdmin,
    payload: web::Json<CreateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match payload.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.experience.create.execute(draft).await {
        Ok(record) => {
            info!(experience_id = %record.id, admin_id = %admin.admin_id, "Experience added by admin");
            ApiResponse::created("Experience added successfully.", "Experience", record)
        }
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/experience/{id}",
    tag = "Experience",
    params(("id" = String, Path, description = "Experience id")),
    security(("bearer_auth" = [])),
    request_body = UpdateExperienceRequest,
    responses(
        (status = 200, description = "Experience updated successfully."),
        (status = 400, description = "Invalid merged record"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Experience not found."),
        (status = 500, description = "Server error")
    )
)]
#[put("/experience/{id}")]
pub async fn update_experience_handler(
    admin: AuthenticatedAdmin,
    path: web::Path<String>,
    payload: web::Json<UpdateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_id(&path) else {
        return ApiResponse::not_found(NOT_FOUND_MESSAGE);
    };
    let patch = match payload.into_inner().into_patch() {
        Ok(patch) => patch,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.experience.update.execute(id, patch).await {
        Ok(record) => {
            info!(experience_id = %id, admin_id = %admin.admin_id, "Experience updated by admin");
            ApiResponse::updated("Experience updated successfully.", "Experience", record)
        }
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/experience/{id}",
    tag = "Experience",
    params(("id" = String, Path, description = "Experience id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Experience deleted successfully."),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Experience not found."),
        (status = 500, description = "Server error")
    )
)]
#[delete("/experience/{id}")]
pub async fn delete_experience_handler(
    admin: AuthenticatedAdmin,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_id(&path) else {
        return ApiResponse::not_found(NOT_FOUND_MESSAGE);
    };

    match data.experience.delete.execute(id).await {
        Ok(()) => {
            info!(experience_id = %id, admin_id = %admin.admin_id, "Experience removed by admin");
            ApiResponse::deleted("Experience deleted successfully.", id)
        }
        Err(e) => error_response(e),
    }
}
