use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use super::project_form::{ProjectForm, ProjectFormSchema};
use super::PROJECT_IMAGE_FIELD;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::shared::api::{ApiResponse, MultipartForm};
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/admin/projects/createProject",
    tag = "Projects",
    security(("bearer_auth" = [])),
    request_body(content = ProjectFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Project created successfully."),
        (status = 400, description = "Validation failed or duplicate link"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Server error")
    )
)]
#[post("/projects/createProject")]
pub async fn create_project_handler(
    admin: AuthenticatedAdmin,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut form = match MultipartForm::read(payload, PROJECT_IMAGE_FIELD, &data.upload_policy).await
    {
        Ok(form) => form,
        Err(e) => {
            warn!(error = %e, "Rejected project form");
            return ApiResponse::validation_error(&e.to_string());
        }
    };

    let image = form.take_file();
    let draft = match ProjectForm::take_from(&mut form).into_draft() {
        Ok(draft) => draft,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.project.create.execute(draft, image).await {
        Ok(project) => {
            info!(project_id = %project.id, admin_id = %admin.admin_id, "Project created by admin");
            ApiResponse::created("Project created successfully.", "Project", project)
        }

        Err(
            e @ (CreateProjectError::Validation(_)
            | CreateProjectError::GithubLinkAlreadyExists
            | CreateProjectError::DemoLiveAlreadyExists),
        ) => ApiResponse::validation_error(&e.to_string()),

        Err(e) => {
            error!(error = %e, "Failed to create project");
            ApiResponse::server_error("Server Error")
        }
    }
}
