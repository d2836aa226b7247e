use actix_multipart::Multipart;
use actix_web::{put, web, Responder};
use tracing::{error, info, warn};

use super::project_form::{ProjectForm, ProjectFormSchema};
use super::PROJECT_IMAGE_FIELD;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::shared::api::{parse_id, ApiResponse, MultipartForm};
use crate::AppState;

const NOT_FOUND_MESSAGE: &str = "Project not found";

/// Partial update. Omitted parts keep their stored values; a new
/// `projectImage` replaces the stored reference.
#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    tag = "Projects",
    params(("id" = String, Path, description = "Project id")),
    security(("bearer_auth" = [])),
    request_body(content = ProjectFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Project updated successfully."),
        (status = 400, description = "Validation failed or duplicate link"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Server error")
    )
)]
#[put("/projects/{id}")]
pub async fn update_project_handler(
    admin: AuthenticatedAdmin,
    path: web::Path<String>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(project_id) = parse_id(&path) else {
        return ApiResponse::not_found(NOT_FOUND_MESSAGE);
    };

    let mut form = match MultipartForm::read(payload, PROJECT_IMAGE_FIELD, &data.upload_policy).await
    {
        Ok(form) => form,
        Err(e) => {
            warn!(%project_id, error = %e, "Rejected project form");
            return ApiResponse::validation_error(&e.to_string());
        }
    };

    let image = form.take_file();
    let patch = match ProjectForm::take_from(&mut form).into_patch() {
        Ok(patch) => patch,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.project.update.execute(project_id, patch, image).await {
        Ok(project) => {
            info!(%project_id, admin_id = %admin.admin_id, "Project updated by admin");
            ApiResponse::updated("Project updated successfully.", "Project", project)
        }

        Err(UpdateProjectError::NotFound) => ApiResponse::not_found(NOT_FOUND_MESSAGE),

        Err(
            e @ (UpdateProjectError::Validation(_)
            | UpdateProjectError::GithubLinkAlreadyExists
            | UpdateProjectError::DemoLiveAlreadyExists),
        ) => ApiResponse::validation_error(&e.to_string()),

        Err(e) => {
            error!(%project_id, error = %e, "Failed to update project");
            ApiResponse::server_error("Server Error")
        }
    }
}
