use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectError;
use crate::shared::api::{parse_id, ApiResponse};
use crate::AppState;

const NOT_FOUND_MESSAGE: &str = "Project not found";

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "The project", body = Project),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Server error")
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(project_id) = parse_id(&path) else {
        return ApiResponse::not_found(NOT_FOUND_MESSAGE);
    };

    match data.project.get_single.execute(project_id).await {
        Ok(project) => ApiResponse::resource("Project", project),
        Err(GetProjectError::NotFound) => ApiResponse::not_found(NOT_FOUND_MESSAGE),
        Err(e) => {
            error!(%project_id, error = %e, "Failed to load project");
            ApiResponse::server_error("Server Error")
        }
    }
}
