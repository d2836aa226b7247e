use actix_web::{delete, web, Responder};
use tracing::{error, info};

use super::NOT_FOUND_MESSAGE;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::education::application::ports::incoming::use_cases::EducationError;
use crate::shared::api::{parse_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/admin/education/{id}",
    tag = "Education",
    params(("id" = String, Path, description = "Education record id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Education deleted successfully."),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Education record not found."),
        (status = 500, description = "Server error")
    )
)]
#[delete("/education/{id}")]
pub async fn delete_education_handler(
    admin: AuthenticatedAdmin,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_id(&path) else {
        return ApiResponse::not_found(NOT_FOUND_MESSAGE);
    };

    match data.education.delete.execute(id).await {
        Ok(()) => {
            info!(education_id = %id, admin_id = %admin.admin_id, "Education removed by admin");
            ApiResponse::deleted("Education deleted successfully.", id)
        }
        Err(EducationError::NotFound) => ApiResponse::not_found(NOT_FOUND_MESSAGE),
        Err(e) => {
            error!(education_id = %id, error = %e, "Failed to delete education record");
            ApiResponse::server_error("Server Error")
        }
    }
}
