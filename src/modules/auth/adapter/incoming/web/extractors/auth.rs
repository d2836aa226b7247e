use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminProfile;
use crate::shared::api::ApiResponse;

/// The administrator admitted by the `protect` gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<AdminProfile> for AuthenticatedAdmin {
    fn from(profile: AdminProfile) -> Self {
        Self {
            admin_id: profile.id,
            username: profile.username,
            email: profile.email,
        }
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedAdmin {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Only present when the handler sits behind the gate.
        match req.extensions().get::<AuthenticatedAdmin>() {
            Some(admin) => ready(Ok(admin.clone())),
            None => ready(Err(create_api_error(ApiResponse::unauthorized(
                "Unauthorized, no token.",
            )))),
        }
    }
}

/// Token of an `Authorization: Bearer <token>` header.
pub fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
