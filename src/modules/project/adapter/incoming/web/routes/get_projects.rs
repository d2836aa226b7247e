use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    responses(
        (status = 200, description = "All projects, oldest first", body = Vec<Project>),
        (status = 404, description = "There are no projects yet."),
        (status = 500, description = "Server error")
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(projects) if projects.is_empty() => ApiResponse::not_found("There are no projects yet."),
        Ok(projects) => ApiResponse::resource("Projects", projects),
        Err(e) => {
            error!(error = %e, "Failed to list projects");
            ApiResponse::server_error("Server Error")
        }
    }
}
