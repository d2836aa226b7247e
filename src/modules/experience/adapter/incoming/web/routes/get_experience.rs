use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::experience::application::domain::entities::ExperienceRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "Experience",
    responses(
        (status = 200, description = "Experience entries, most recent start first", body = Vec<ExperienceRecord>),
        (status = 500, description = "Server error")
    )
)]
#[get("/api/experience")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.list.execute().await {
        Ok(records) => ApiResponse::resource("Experience", records),
        Err(e) => {
            error!(error = %e, "Failed to list experience");
            ApiResponse::server_error("Server Error")
        }
    }
}
