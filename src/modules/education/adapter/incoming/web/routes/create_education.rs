use actix_web::{post, web, Responder};
use tracing::{error, info};

use super::dto::CreateEducationRequest;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::education::application::ports::incoming::use_cases::EducationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/admin/education",
    tag = "Education",
    security(("bearer_auth" = [])),
    request_body = CreateEducationRequest,
    responses(
        (status = 201, description = "Education added successfully."),
        (status = 400, description = "Missing fields or invalid date"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Server error")
    )
)]
#[post("/education")]
pub async fn create_education_handler(
    admin: AuthenticatedAdmin,
    payload: web::Json<CreateEducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.create.execute(payload.into_inner().into()).await {
        Ok(record) => {
            info!(education_id = %record.id, admin_id = %admin.admin_id, "Education added by admin");
            ApiResponse::created("Education added successfully.", "Education", record)
        }
        Err(EducationError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(e) => {
            error!(error = %e, "Failed to create education record");
            ApiResponse::server_error("Server Error")
        }
    }
}
