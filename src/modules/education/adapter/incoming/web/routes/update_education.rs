use actix_web::{put, web, Responder};
use tracing::{error, info};

use super::dto::UpdateEducationRequest;
use super::NOT_FOUND_MESSAGE;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::education::application::ports::incoming::use_cases::EducationError;
use crate::shared::api::{parse_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/admin/education/{id}",
    tag = "Education",
    params(("id" = String, Path, description = "Education record id")),
    security(("bearer_auth" = [])),
    request_body = UpdateEducationRequest,
    responses(
        (status = 200, description = "Education updated successfully."),
        (status = 400, description = "Invalid merged record"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Education record not found."),
        (status = 500, description = "Server error")
    )
)]
#[put("/education/{id}")]
pub async fn update_education_handler(
    admin: AuthenticatedAdmin,
    path: web::Path<String>,
    payload: web::Json<UpdateEducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_id(&path) else {
        return ApiResponse::not_found(NOT_FOUND_MESSAGE);
    };

    match data
        .education
        .update
        .execute(id, payload.into_inner().into())
        .await
    {
        Ok(record) => {
            info!(education_id = %id, admin_id = %admin.admin_id, "Education updated by admin");
            ApiResponse::updated("Education updated successfully.", "Education", record)
        }
        Err(EducationError::NotFound) => ApiResponse::not_found(NOT_FOUND_MESSAGE),
        Err(EducationError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(e) => {
            error!(education_id = %id, error = %e, "Failed to update education record");
            ApiResponse::server_error("Server Error")
        }
    }
}
