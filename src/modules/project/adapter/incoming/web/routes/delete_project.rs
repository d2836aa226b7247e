use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::{parse_id, ApiResponse};
use crate::AppState;

const NOT_FOUND_MESSAGE: &str = "Project not found";

#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    tag = "Projects",
    params(("id" = String, Path, description = "Project id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Project deleted successfully."),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Server error")
    )
)]
#[delete("/projects/{id}")]
pub async fn delete_project_handler(
    admin: AuthenticatedAdmin,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(project_id) = parse_id(&path) else {
        return ApiResponse::not_found(NOT_FOUND_MESSAGE);
    };

    match data.project.delete.execute(project_id).await {
        Ok(()) => {
            info!(%project_id, admin_id = %admin.admin_id, "Project removed by admin");
            ApiResponse::deleted("Project deleted successfully.", project_id)
        }
        Err(DeleteProjectError::NotFound) => ApiResponse::not_found(NOT_FOUND_MESSAGE),
        Err(e) => {
            error!(%project_id, error = %e, "Failed to delete project");
            ApiResponse::server_error("Server Error")
        }
    }
}
