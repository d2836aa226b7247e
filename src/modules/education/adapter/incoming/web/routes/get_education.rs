use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::education::application::domain::entities::EducationRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Unlike projects and skills, an empty list is a normal 200.
#[utoipa::path(
    get,
    path = "/api/education",
    tag = "Education",
    responses(
        (status = 200, description = "Education records, most recent start first", body = Vec<EducationRecord>),
        (status = 500, description = "Server error")
    )
)]
#[get("/api/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.education.list.execute().await {
        Ok(records) => ApiResponse::resource("Education", records),
        Err(e) => {
            error!(error = %e, "Failed to list education records");
            ApiResponse::server_error("Server Error")
        }
    }
}
