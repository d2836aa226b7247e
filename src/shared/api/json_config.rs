use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";

/// Malformed JSON is a 400 with a fixed message; the parser detail is only logged.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!(error = %err, "Rejected malformed JSON body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::validation_error(INVALID_BODY_MESSAGE),
        )
        .into()
    })
}
